//! Environment access for the debug-token override.

/// Name of the environment variable that, when set and non-empty, overrides
/// every other debug-token source. Typically injected from a CI secret.
pub const DEBUG_TOKEN_ENV_VAR: &str = "ATTESTKIT_DEBUG_TOKEN";

/// Read access to environment variables, injected into the provider so the
/// override lookup stays testable without mutating process state.
#[uniffi::export(with_foreign)]
pub trait EnvironmentReader: Send + Sync {
    /// Returns the value of the variable `name`, if set.
    fn var(&self, name: String) -> Option<String>;
}

/// [`EnvironmentReader`] backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentReader for ProcessEnvironment {
    fn var(&self, name: String) -> Option<String> {
        std::env::var(name).ok()
    }
}
