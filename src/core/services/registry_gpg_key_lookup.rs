use tracing::debug;

use crate::core::errors::{Result, TfeError};
use crate::core::models::gpg_key::GpgKeyId;
use crate::core::models::key_state::GpgKeyLookup;
use crate::core::traits::gpg_keys::GpgKeys;

/// Read-only `tfe_registry_gpg_key` data source.
pub struct RegistryGpgKeyLookupService<K: GpgKeys> {
    pub keys: K,
}

impl<K: GpgKeys> RegistryGpgKeyLookupService<K> {
    /// Fetch a key by namespace and key id. A missing key is an error here.
    pub fn read(&self, namespace: &str, key_id: &str) -> Result<GpgKeyLookup> {
        debug!("Look up GPG key {namespace}/{key_id}");
        self.keys
            .read(&GpgKeyId::private(namespace, key_id))
            .map(GpgKeyLookup::from)
            .map_err(|e| match e {
                TfeError::ResourceNotFound => TfeError::LookupNotFound {
                    namespace: namespace.to_string(),
                    key_id: key_id.to_string(),
                },
                other => TfeError::LookupFailed {
                    namespace: namespace.to_string(),
                    key_id: key_id.to_string(),
                    source: Box::new(other),
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::memory_gpg_keys::{MemoryGpgKeys, Op};
    use crate::core::models::gpg_key::{GPG_KEY_TYPE, GpgKeyCreateOptions, PRIVATE_REGISTRY};

    fn seeded() -> (MemoryGpgKeys, String, String) {
        let registry = MemoryGpgKeys::new();
        let key = registry
            .create(
                PRIVATE_REGISTRY,
                &GpgKeyCreateOptions {
                    key_type: GPG_KEY_TYPE.into(),
                    namespace: "acme".into(),
                    ascii_armor: "ARMOR\n".into(),
                },
            )
            .unwrap();
        (registry, key.id, key.key_id)
    }

    #[test]
    fn lookup_populates_all_fields() {
        let (registry, id, key_id) = seeded();
        let svc = RegistryGpgKeyLookupService { keys: &registry };

        let found = svc.read("acme", &key_id).unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.provider_namespace, "acme");
        assert_eq!(found.key_id, key_id);
        assert_eq!(found.ascii_armor, "ARMOR\n");
    }

    #[test]
    fn missing_key_could_not_be_found() {
        let (registry, _, _) = seeded();
        let svc = RegistryGpgKeyLookupService { keys: &registry };

        let err = svc.read("acme", "nonexistent").unwrap_err();
        assert_eq!(err.to_string(), "Could not find GPG key acme/nonexistent");
    }

    #[test]
    fn other_failures_are_retrieval_errors() {
        let (registry, _, key_id) = seeded();
        registry.fail(Op::Read, 500);
        let svc = RegistryGpgKeyLookupService { keys: &registry };

        let err = svc.read("acme", &key_id).unwrap_err();
        assert!(matches!(err, TfeError::LookupFailed { .. }));
        assert!(
            err.to_string()
                .starts_with(&format!("Error retrieving GPG key acme/{key_id}: "))
        );
    }
}
