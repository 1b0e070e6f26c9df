//! Storage key derivation for persisted debug tokens.

use sha2::{Digest, Sha256};

use super::DEBUG_TOKEN_KEY_PREFIX;

/// Derives the storage key under which the debug token for the given
/// (`storage_id`, `resource_name`) pair is persisted.
///
/// Each component is length-prefixed before hashing so that distinct pairs
/// can never derive the same key, even when their concatenations agree.
#[must_use]
pub fn derive_storage_key(storage_id: &str, resource_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update((storage_id.len() as u64).to_be_bytes());
    hasher.update(storage_id.as_bytes());
    hasher.update((resource_name.len() as u64).to_be_bytes());
    hasher.update(resource_name.as_bytes());
    format!("{DEBUG_TOKEN_KEY_PREFIX}{}", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_key_derivation_is_stable() {
        let first = derive_storage_key("app_1", "projects/p/apps/a");
        let second = derive_storage_key("app_1", "projects/p/apps/a");
        assert_eq!(first, second);
        assert!(first.starts_with(DEBUG_TOKEN_KEY_PREFIX));
    }

    #[test_case("app_1", "projects/p/apps/a", "app_2", "projects/p/apps/a"; "different storage ids")]
    #[test_case("app_1", "projects/p/apps/a", "app_1", "projects/p/apps/b"; "different resource names")]
    #[test_case("ab", "c", "a", "bc"; "ambiguous concatenation")]
    fn test_distinct_pairs_derive_distinct_keys(
        storage_id_a: &str,
        resource_a: &str,
        storage_id_b: &str,
        resource_b: &str,
    ) {
        assert_ne!(
            derive_storage_key(storage_id_a, resource_a),
            derive_storage_key(storage_id_b, resource_b)
        );
    }
}
