use crate::core::errors::Result;
use crate::core::models::gpg_key::{
    GpgKey, GpgKeyCreateOptions, GpgKeyId, GpgKeyUpdateOptions, RegistryName,
};

/// Port for the remote registry's GPG key API.
///
/// Implementations live in `adapters::registry`. An absent key is reported
/// as `TfeError::ResourceNotFound`; everything else is a remote failure.
pub trait GpgKeys: Send + Sync {
    /// Upload a new key into `registry_name`.
    fn create(&self, registry_name: RegistryName, options: &GpgKeyCreateOptions)
    -> Result<GpgKey>;

    fn read(&self, key_id: &GpgKeyId) -> Result<GpgKey>;

    fn update(&self, key_id: &GpgKeyId, options: &GpgKeyUpdateOptions) -> Result<GpgKey>;

    fn delete(&self, key_id: &GpgKeyId) -> Result<()>;
}

impl<T: GpgKeys + ?Sized> GpgKeys for &T {
    fn create(
        &self,
        registry_name: RegistryName,
        options: &GpgKeyCreateOptions,
    ) -> Result<GpgKey> {
        (**self).create(registry_name, options)
    }

    fn read(&self, key_id: &GpgKeyId) -> Result<GpgKey> {
        (**self).read(key_id)
    }

    fn update(&self, key_id: &GpgKeyId, options: &GpgKeyUpdateOptions) -> Result<GpgKey> {
        (**self).update(key_id, options)
    }

    fn delete(&self, key_id: &GpgKeyId) -> Result<()> {
        (**self).delete(key_id)
    }
}
