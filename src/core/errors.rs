use std::path::PathBuf;

/// All domain errors for tfe-gpg.
///
/// The first group is what the remote registry client reports. The second
/// group wraps a client error with the operation and the key it was acting on,
/// which is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum TfeError {
    #[error("resource not found")]
    ResourceNotFound,

    #[error(
        "unauthorized\n\n  \
         The API token was rejected by the remote service.\n  \
         Check TFE_TOKEN or the `token` entry in your config file."
    )]
    Unauthorized,

    #[error("remote service returned status {status}{}", format_detail(.detail))]
    Remote { status: u16, detail: Option<String> },

    #[error("request failed: {reason}")]
    Transport { reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("Error creating new GPG key for namespace/organization {namespace}: {source}")]
    CreateFailed {
        namespace: String,
        #[source]
        source: Box<TfeError>,
    },

    #[error("Error reading GPG key {id}: {source}")]
    ReadFailed {
        id: String,
        #[source]
        source: Box<TfeError>,
    },

    #[error("Error updating GPG key {id}: {source}")]
    UpdateFailed {
        id: String,
        #[source]
        source: Box<TfeError>,
    },

    #[error("Error deleting GPG key {id}: {source}")]
    DeleteFailed {
        id: String,
        #[source]
        source: Box<TfeError>,
    },

    #[error("Could not find GPG key {namespace}/{key_id}")]
    LookupNotFound { namespace: String, key_id: String },

    #[error("Error retrieving GPG key {namespace}/{key_id}: {source}")]
    LookupFailed {
        namespace: String,
        key_id: String,
        #[source]
        source: Box<TfeError>,
    },

    #[error(
        "Changing {attributes} of GPG key {id} requires replacement\n\n  \
         These attributes identify the key and cannot be updated in place.\n  \
         Run 'tfe-gpg apply' to destroy and recreate the key."
    )]
    RequiresReplacement { id: String, attributes: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "State error in {path}: {detail}\n\n  \
         The state file is written by tfe-gpg; do not edit it by hand.\n  \
         Run 'tfe-gpg read' to refresh it from the registry."
    )]
    StateError { path: PathBuf, detail: String },

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TfeError {
    /// Whether the remote service reported the object as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TfeError::ResourceNotFound)
    }
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TfeError>;
