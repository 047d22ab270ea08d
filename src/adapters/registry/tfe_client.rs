use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use tracing::trace;

use crate::adapters::registry::wire::{
    ErrorDocument, GpgKeyDocument, JSON_API_MEDIA_TYPE, RequestDocument,
};
use crate::core::errors::{Result, TfeError};
use crate::core::models::gpg_key::{
    GpgKey, GpgKeyCreateOptions, GpgKeyId, GpgKeyUpdateOptions, RegistryName,
    validate_registry_name,
};
use crate::core::traits::gpg_keys::GpgKeys;

/// Timeout applied to every registry request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Terraform Cloud/Enterprise instance.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub address: Url,
    pub token: String,
    pub ssl_skip_verify: bool,
}

/// Blocking client for the registry's GPG key API.
///
/// Requests run on a private current-thread runtime, one at a time.
pub struct TfeClient {
    address: Url,
    token: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl TfeClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("tfe-gpg/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(settings.ssl_skip_verify)
            .build()
            .map_err(|e| TfeError::InvalidConfig {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TfeError::InvalidConfig {
                detail: format!("Failed to create async runtime: {e}"),
            })?;

        if settings.address.cannot_be_a_base() {
            return Err(TfeError::InvalidConfig {
                detail: format!("Invalid address: {}", settings.address),
            });
        }

        Ok(Self {
            address: settings.address,
            token: settings.token,
            client,
            runtime,
        })
    }

    /// `<address>/api/registry/<registry>/v2/gpg-keys[/<namespace>/<key id>]`
    fn endpoint(&self, registry_name: RegistryName, key: Option<&GpgKeyId>) -> Url {
        let mut url = self.address.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "api",
                "registry",
                registry_name.as_str(),
                "v2",
                "gpg-keys",
            ]);
            if let Some(key) = key {
                segments.extend([key.namespace.as_str(), key.key_id.as_str()]);
            }
        }
        url
    }

    fn send<B: Serialize>(&self, method: Method, url: Url, body: Option<&B>) -> Result<Vec<u8>> {
        trace!(%method, %url, "registry request");
        self.runtime.block_on(async {
            let mut request = self
                .client
                .request(method, url)
                .bearer_auth(&self.token)
                .header(ACCEPT, JSON_API_MEDIA_TYPE);
            if let Some(body) = body {
                let payload = serde_json::to_vec(body).map_err(|e| TfeError::Transport {
                    reason: format!("Failed to encode request: {e}"),
                })?;
                request = request.header(CONTENT_TYPE, JSON_API_MEDIA_TYPE).body(payload);
            }

            let response = request.send().await.map_err(transport)?;
            let status = response.status();
            let bytes = response.bytes().await.map_err(transport)?;

            match status {
                s if s.is_success() => Ok(bytes.to_vec()),
                StatusCode::NOT_FOUND => Err(TfeError::ResourceNotFound),
                StatusCode::UNAUTHORIZED => Err(TfeError::Unauthorized),
                s => Err(TfeError::Remote {
                    status: s.as_u16(),
                    detail: serde_json::from_slice::<ErrorDocument>(&bytes)
                        .ok()
                        .and_then(|doc| doc.summary()),
                }),
            }
        })
    }

    fn send_for_key<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<GpgKey> {
        let bytes = self.send(method, url, body)?;
        let doc: GpgKeyDocument =
            serde_json::from_slice(&bytes).map_err(|e| TfeError::Transport {
                reason: format!("Failed to parse registry response: {e}"),
            })?;
        Ok(doc.into())
    }
}

fn transport(e: reqwest::Error) -> TfeError {
    TfeError::Transport {
        reason: e.to_string(),
    }
}

impl GpgKeys for TfeClient {
    fn create(
        &self,
        registry_name: RegistryName,
        options: &GpgKeyCreateOptions,
    ) -> Result<GpgKey> {
        validate_registry_name(registry_name)?;
        options.validate()?;
        let url = self.endpoint(registry_name, None);
        self.send_for_key(Method::POST, url, Some(&RequestDocument::from(options)))
    }

    fn read(&self, key_id: &GpgKeyId) -> Result<GpgKey> {
        key_id.validate()?;
        let url = self.endpoint(key_id.registry_name, Some(key_id));
        self.send_for_key::<()>(Method::GET, url, None)
    }

    fn update(&self, key_id: &GpgKeyId, options: &GpgKeyUpdateOptions) -> Result<GpgKey> {
        key_id.validate()?;
        options.validate()?;
        let url = self.endpoint(key_id.registry_name, Some(key_id));
        self.send_for_key(Method::PATCH, url, Some(&RequestDocument::from(options)))
    }

    fn delete(&self, key_id: &GpgKeyId) -> Result<()> {
        key_id.validate()?;
        let url = self.endpoint(key_id.registry_name, Some(key_id));
        self.send::<()>(Method::DELETE, url, None).map(|_| ())
    }
}
