//! End-to-end checks of the debug provider through the public API.

use std::sync::Arc;

use attestkit_core::storage::{InMemoryTokenStore, TokenStore};
use attestkit_core::{DebugTokenProvider, EnvironmentReader, DEBUG_TOKEN_ENV_VAR};

struct NoEnvironment;

impl EnvironmentReader for NoEnvironment {
    fn var(&self, _name: String) -> Option<String> {
        None
    }
}

#[test]
fn token_survives_provider_recreation_over_shared_store() {
    // The store outlives the provider, as the platform keystore outlives the
    // process. Recreating the provider simulates an app restart.
    let store: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());

    let first_run = DebugTokenProvider::new(
        "integration_app".to_string(),
        "projects/demo/apps/ios".to_string(),
        None,
        None,
        store.clone(),
        Arc::new(NoEnvironment),
    );
    let token = first_run.current_debug_token();
    drop(first_run);

    let second_run = DebugTokenProvider::new(
        "integration_app".to_string(),
        "projects/demo/apps/ios".to_string(),
        None,
        None,
        store,
        Arc::new(NoEnvironment),
    );
    assert_eq!(second_run.current_debug_token(), token);
    assert_eq!(second_run.local_debug_token(), token);
}

#[test]
fn process_environment_override_takes_effect() {
    std::env::set_var(DEBUG_TOKEN_ENV_VAR, "ci-secret-token");

    let provider = DebugTokenProvider::with_process_environment(
        "integration_app_env".to_string(),
        "projects/demo/apps/android".to_string(),
        None,
        None,
        Arc::new(InMemoryTokenStore::new()),
    );
    assert_eq!(provider.current_debug_token(), "ci-secret-token");
    assert_ne!(provider.local_debug_token(), "ci-secret-token");

    std::env::remove_var(DEBUG_TOKEN_ENV_VAR);
}
