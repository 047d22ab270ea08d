//! JSON:API documents exchanged with the registry's GPG key endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::gpg_key::{GpgKey, GpgKeyCreateOptions, GpgKeyUpdateOptions};

pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Serialize)]
pub struct RequestDocument<A> {
    pub data: RequestData<A>,
}

#[derive(Debug, Serialize)]
pub struct RequestData<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateAttributes {
    pub namespace: String,
    pub ascii_armor: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateAttributes {
    pub namespace: String,
}

impl From<&GpgKeyCreateOptions> for RequestDocument<CreateAttributes> {
    fn from(options: &GpgKeyCreateOptions) -> Self {
        Self {
            data: RequestData {
                kind: options.key_type.clone(),
                attributes: CreateAttributes {
                    namespace: options.namespace.clone(),
                    ascii_armor: options.ascii_armor.clone(),
                },
            },
        }
    }
}

impl From<&GpgKeyUpdateOptions> for RequestDocument<UpdateAttributes> {
    fn from(options: &GpgKeyUpdateOptions) -> Self {
        Self {
            data: RequestData {
                kind: options.key_type.clone(),
                attributes: UpdateAttributes {
                    namespace: options.namespace.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GpgKeyDocument {
    pub data: GpgKeyResource,
}

#[derive(Debug, Deserialize)]
pub struct GpgKeyResource {
    pub id: String,
    pub attributes: GpgKeyAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GpgKeyAttributes {
    pub ascii_armor: String,
    pub key_id: String,
    pub namespace: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub trust_signature: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<GpgKeyDocument> for GpgKey {
    fn from(doc: GpgKeyDocument) -> Self {
        let attrs = doc.data.attributes;
        Self {
            id: doc.data.id,
            ascii_armor: attrs.ascii_armor,
            key_id: attrs.key_id,
            namespace: attrs.namespace,
            source: attrs.source,
            source_url: attrs.source_url,
            trust_signature: attrs.trust_signature,
            created_at: attrs.created_at,
            updated_at: attrs.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// All error details joined, falling back to titles.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.detail.as_deref().or(e.title.as_deref()))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
