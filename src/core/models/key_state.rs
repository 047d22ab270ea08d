use serde::{Deserialize, Serialize};

use crate::core::models::gpg_key::{GPG_KEY_TYPE, GpgKey, GpgKeyId};

/// Desired configuration of a `tfe_registry_gpg_key` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgKeyConfig {
    pub provider_namespace: String,
    pub ascii_armor: String,
    pub key_type: Option<String>,
}

impl GpgKeyConfig {
    /// The configured type, or the registry's only type when unset.
    pub fn key_type(&self) -> &str {
        self.key_type.as_deref().unwrap_or(GPG_KEY_TYPE)
    }
}

/// Local state of a `tfe_registry_gpg_key` resource.
///
/// `id` is `None` before creation and after the key is found to be gone.
/// `key_id` is only ever written from a create or read response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpgKeyState {
    pub id: Option<String>,
    pub provider_namespace: String,
    pub ascii_armor: String,
    pub key_id: Option<String>,
    #[serde(rename = "type", default = "default_key_type")]
    pub key_type: String,
}

fn default_key_type() -> String {
    GPG_KEY_TYPE.to_string()
}

impl GpgKeyState {
    /// State for a resource that has not been created yet.
    pub fn planned(config: &GpgKeyConfig) -> Self {
        Self {
            id: None,
            provider_namespace: config.provider_namespace.clone(),
            ascii_armor: config.ascii_armor.clone(),
            key_id: None,
            key_type: config.key_type().to_string(),
        }
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    /// Composite registry key, available once the key id is known.
    pub fn gpg_key_id(&self) -> GpgKeyId {
        GpgKeyId::private(
            self.provider_namespace.clone(),
            self.key_id.clone().unwrap_or_default(),
        )
    }

    /// Display handle for log lines and error messages.
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    /// Copy the fields the registry is authoritative for.
    pub fn refresh_from(&mut self, key: &GpgKey) {
        self.provider_namespace = key.namespace.clone();
        self.ascii_armor = key.ascii_armor.clone();
        self.key_id = Some(key.key_id.clone());
    }
}

/// State of a `tfe_registry_gpg_key` data source lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpgKeyLookup {
    pub id: String,
    pub provider_namespace: String,
    pub key_id: String,
    pub ascii_armor: String,
}

impl From<GpgKey> for GpgKeyLookup {
    fn from(key: GpgKey) -> Self {
        Self {
            id: key.id,
            provider_namespace: key.namespace,
            key_id: key.key_id,
            ascii_armor: key.ascii_armor,
        }
    }
}
