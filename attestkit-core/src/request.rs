//! Request-hook surface for the token-exchange service.
//!
//! The debug provider holds the hook list on behalf of the exchange stage;
//! invoking the hooks happens in the exchange pipeline, not here.

/// A single header on an outbound exchange request.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ExchangeHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// Description of an outbound request to the attestation exchange service.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ExchangeRequest {
    /// Request URL.
    pub url: String,
    /// Headers attached to the request, in order.
    pub headers: Vec<ExchangeHeader>,
}

/// Hook invoked on requests made through the exchange service, e.g. to
/// attach host-managed authentication headers.
#[uniffi::export(with_foreign)]
pub trait RequestHook: Send + Sync {
    /// Returns `request` with this hook's modifications applied.
    fn apply(&self, request: ExchangeRequest) -> ExchangeRequest;
}
