//! Debug-mode credential provider.
//!
//! Supplies a locally managed debug token in place of a real
//! device-attestation token so apps can run on simulators and CI hosts. The
//! token is resolved with a fixed precedence: environment override, then the
//! persisted value, then a freshly generated value which is persisted for
//! future runs.
//!
//! Do not use the debug provider in applications shipped to real users, and
//! treat a registered debug token as a secret.

use std::sync::{Arc, Mutex, PoisonError};

use crate::environment::{EnvironmentReader, ProcessEnvironment, DEBUG_TOKEN_ENV_VAR};
use crate::request::RequestHook;
use crate::storage::{derive_storage_key, TokenStore};
use crate::token::generate_debug_token;

/// Debug-mode credential provider for a single protected resource.
///
/// Construction requires the storage identifier and resource name that
/// namespace the persisted token; the token store and environment reader are
/// injected so the precedence rule stays independently testable.
#[derive(uniffi::Object)]
pub struct DebugTokenProvider {
    storage_id: String,
    resource_name: String,
    api_key: Option<String>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    store: Arc<dyn TokenStore>,
    environment: Arc<dyn EnvironmentReader>,
    storage_key: String,
    /// Token used when the store is unavailable, stable for the lifetime of
    /// the instance. Also serializes the generate-and-persist step so
    /// concurrent first calls converge on one value.
    fallback_token: Mutex<Option<String>>,
}

#[uniffi::export]
impl DebugTokenProvider {
    /// Creates a provider for the resource identified by `resource_name`.
    ///
    /// * `storage_id` — namespace distinguishing otherwise-identical
    ///   resource protections across SDK consumers on one device; may be an
    ///   app name or an SDK name.
    /// * `resource_name` — the protected resource, e.g.
    ///   `projects/{project_id}/apps/{app_id}`.
    /// * `api_key` — platform API key for the later token exchange, if
    ///   needed.
    /// * `request_hooks` — hooks the exchange service will invoke on
    ///   outbound requests, in order.
    /// * `store` — persistent key-value store supplied by the platform host.
    /// * `environment` — environment-variable access, usually
    ///   [`ProcessEnvironment`].
    #[must_use]
    #[uniffi::constructor]
    pub fn new(
        storage_id: String,
        resource_name: String,
        api_key: Option<String>,
        request_hooks: Option<Vec<Arc<dyn RequestHook>>>,
        store: Arc<dyn TokenStore>,
        environment: Arc<dyn EnvironmentReader>,
    ) -> Self {
        let storage_key = derive_storage_key(&storage_id, &resource_name);
        Self {
            storage_id,
            resource_name,
            api_key,
            request_hooks: request_hooks.unwrap_or_default(),
            store,
            environment,
            storage_key,
            fallback_token: Mutex::new(None),
        }
    }

    /// Creates a provider that reads the override from the process
    /// environment.
    #[must_use]
    #[uniffi::constructor]
    pub fn with_process_environment(
        storage_id: String,
        resource_name: String,
        api_key: Option<String>,
        request_hooks: Option<Vec<Arc<dyn RequestHook>>>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self::new(
            storage_id,
            resource_name,
            api_key,
            request_hooks,
            store,
            Arc::new(ProcessEnvironment),
        )
    }

    /// Returns the locally generated debug token, independent of any
    /// environment override.
    ///
    /// If no token has been persisted yet, one is generated and persisted
    /// first. Read this value to register it in the attestation console.
    #[must_use]
    pub fn local_debug_token(&self) -> String {
        self.persisted_or_generated()
    }

    /// Returns the debug token currently in effect.
    ///
    /// Precedence, first match wins:
    /// 1. The [`DEBUG_TOKEN_ENV_VAR`] environment variable, if set and
    ///    non-empty. Never persisted.
    /// 2. The previously persisted token.
    /// 3. A newly generated random token, persisted for future runs.
    #[must_use]
    pub fn current_debug_token(&self) -> String {
        if let Some(token) = self
            .environment
            .var(DEBUG_TOKEN_ENV_VAR.to_string())
            .filter(|value| !value.is_empty())
        {
            return token;
        }
        self.persisted_or_generated()
    }

    /// Returns the storage identifier this provider was created with.
    #[must_use]
    pub fn storage_id(&self) -> String {
        self.storage_id.clone()
    }

    /// Returns the name of the protected resource.
    #[must_use]
    pub fn resource_name(&self) -> String {
        self.resource_name.clone()
    }

    /// Returns the API key for the token exchange, if one was provided.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }

    /// Returns the request hooks for the token exchange, in order.
    #[must_use]
    pub fn request_hooks(&self) -> Vec<Arc<dyn RequestHook>> {
        self.request_hooks.clone()
    }
}

impl DebugTokenProvider {
    /// Resolves the persisted token, generating and persisting one if none
    /// exists. Total: store failures degrade to a stable in-memory token.
    ///
    /// The fallback lock is held across the read-generate-write sequence so
    /// concurrent first calls converge on a single value.
    #[allow(clippy::significant_drop_tightening)]
    fn persisted_or_generated(&self) -> String {
        let mut fallback = self
            .fallback_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match self.store.get(self.storage_key.clone()) {
            Ok(Some(token)) => token,
            Ok(None) => {
                let token = fallback.clone().unwrap_or_else(generate_debug_token);
                match self.store.set(self.storage_key.clone(), token.clone()) {
                    Ok(()) => log::info!(
                        "AttestKit debug token: '{token}'. Register this value in the \
                         attestation console to receive valid attestation tokens."
                    ),
                    Err(err) => log::warn!(
                        "failed to persist debug token, continuing with an in-memory \
                         token: {err}"
                    ),
                }
                *fallback = Some(token.clone());
                token
            }
            Err(err) => {
                log::warn!(
                    "failed to read persisted debug token, continuing with an \
                     in-memory token: {err}"
                );
                let token = fallback.clone().unwrap_or_else(generate_debug_token);
                *fallback = Some(token.clone());
                token
            }
        }
    }
}
