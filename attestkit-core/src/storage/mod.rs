//! Persistent debug-token storage: the platform seam and the key derivation
//! that namespaces tokens between SDK consumers on one device.

mod key;
pub mod memory;
mod traits;

pub use key::derive_storage_key;
pub use memory::InMemoryTokenStore;
pub use traits::TokenStore;

pub(crate) const DEBUG_TOKEN_KEY_PREFIX: &str = "attestkit.debug_token.";
