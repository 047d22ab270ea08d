use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::core::errors::{Result, TfeError};

/// The only registry partition GPG keys can live in.
pub const PRIVATE_REGISTRY: RegistryName = RegistryName::Private;

/// The only key type the registry accepts.
pub const GPG_KEY_TYPE: &str = "gpg-keys";

/// A partition of the remote module/provider registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryName {
    Private,
    #[cfg(test)]
    Public,
}

impl RegistryName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryName::Private => "private",
            #[cfg(test)]
            RegistryName::Public => "public",
        }
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composite key of a GPG key in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgKeyId {
    pub registry_name: RegistryName,
    pub namespace: String,
    pub key_id: String,
}

impl GpgKeyId {
    /// Key in the private registry.
    pub fn private(namespace: impl Into<String>, key_id: impl Into<String>) -> Self {
        Self {
            registry_name: PRIVATE_REGISTRY,
            namespace: namespace.into(),
            key_id: key_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_registry_name(self.registry_name)?;
        validate_string_id("namespace", &self.namespace)?;
        validate_string_id("key_id", &self.key_id)
    }
}

impl fmt::Display for GpgKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.key_id)
    }
}

/// A GPG key as returned by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct GpgKey {
    pub id: String,
    pub ascii_armor: String,
    pub key_id: String,
    pub namespace: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub trust_signature: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgKeyCreateOptions {
    pub key_type: String,
    pub namespace: String,
    pub ascii_armor: String,
}

impl GpgKeyCreateOptions {
    pub fn validate(&self) -> Result<()> {
        validate_key_type(&self.key_type)?;
        validate_string_id("namespace", &self.namespace)?;
        if self.ascii_armor.trim().is_empty() {
            return Err(TfeError::InvalidOption {
                field: "ascii_armor",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpgKeyUpdateOptions {
    pub key_type: String,
    pub namespace: String,
}

impl GpgKeyUpdateOptions {
    pub fn validate(&self) -> Result<()> {
        validate_key_type(&self.key_type)?;
        validate_string_id("namespace", &self.namespace)
    }
}

pub fn validate_registry_name(name: RegistryName) -> Result<()> {
    if name != PRIVATE_REGISTRY {
        return Err(TfeError::InvalidOption {
            field: "registry_name",
            reason: format!("GPG keys only exist in the \"{PRIVATE_REGISTRY}\" registry"),
        });
    }
    Ok(())
}

fn validate_key_type(key_type: &str) -> Result<()> {
    if key_type != GPG_KEY_TYPE {
        return Err(TfeError::InvalidOption {
            field: "type",
            reason: format!("expected \"{GPG_KEY_TYPE}\", got \"{key_type}\""),
        });
    }
    Ok(())
}

fn string_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\-._]+$").expect("static pattern compiles"))
}

/// Namespaces and key ids end up as URL path segments.
pub fn validate_string_id(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TfeError::InvalidOption {
            field,
            reason: "is required".into(),
        });
    }
    if !string_id_pattern().is_match(value) {
        return Err(TfeError::InvalidOption {
            field,
            reason: format!("\"{value}\" may only contain letters, digits, '-', '.' and '_'"),
        });
    }
    Ok(())
}
