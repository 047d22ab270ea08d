use std::io::Read;
use std::path::{Path, PathBuf};

use crate::adapters::registry::tfe_client::TfeClient;
use crate::adapters::state::json_state_store::JsonStateStore;
use crate::cli::{Cli, KeyArgs};
use crate::config::app_config::{AppConfig, Overrides};
use crate::core::errors::{Result, TfeError};
use crate::core::models::key_state::{GpgKeyConfig, GpgKeyState};
use crate::core::traits::state_store::StateStore;

/// Everything a command needs, resolved from global flags.
pub struct Context {
    config: AppConfig,
    overrides: Overrides,
    pub state: JsonStateStore,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = AppConfig::discover(cli.config.as_deref().map(Path::new))?;
        Ok(Self {
            config,
            overrides: Overrides {
                address: cli.address.clone(),
                hostname: cli.hostname.clone(),
                token: cli.token.clone(),
            },
            state: JsonStateStore::new(PathBuf::from(&cli.state)),
        })
    }

    /// Registry client built from config, flags and environment.
    pub fn client(&self) -> Result<TfeClient> {
        TfeClient::new(self.config.client_settings(&self.overrides)?)
    }

    /// Load the tracked key, failing when nothing is tracked.
    pub fn require_state(&self) -> Result<GpgKeyState> {
        self.state.load()?.ok_or_else(|| TfeError::StateError {
            path: self.state.path().to_path_buf(),
            detail: "no GPG key is tracked. Run 'tfe-gpg create' or 'tfe-gpg apply' first."
                .into(),
        })
    }
}

/// Read key material from a file, or stdin for `-`.
pub fn read_ascii_armor(source: &str) -> Result<String> {
    if source == "-" {
        let mut armor = String::new();
        std::io::stdin().read_to_string(&mut armor)?;
        return Ok(armor);
    }
    std::fs::read_to_string(source).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TfeError::InvalidConfig {
            detail: format!("ascii armor file not found: {source}"),
        },
        _ => e.into(),
    })
}

impl KeyArgs {
    pub fn to_config(&self) -> Result<GpgKeyConfig> {
        Ok(GpgKeyConfig {
            provider_namespace: self.namespace.clone(),
            ascii_armor: read_ascii_armor(&self.ascii_armor)?,
            key_type: self.key_type.clone(),
        })
    }
}
