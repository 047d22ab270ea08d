use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Deserialize;

use crate::adapters::registry::tfe_client::ClientSettings;
use crate::core::errors::{Result, TfeError};

/// Hostname used when neither an address nor a hostname is configured.
pub const DEFAULT_HOSTNAME: &str = "app.terraform.io";

/// Top-level configuration read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderSection,
}

/// The `[provider]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSection {
    pub hostname: Option<String>,
    /// Full base URL; wins over `hostname`.
    pub address: Option<String>,
    pub token: Option<String>,
    #[serde(default)]
    pub ssl_skip_verify: bool,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub hostname: Option<String>,
    pub token: Option<String>,
}

impl AppConfig {
    /// Default location: `<config dir>/tfe-gpg/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tfe-gpg").join("config.toml"))
    }

    /// Parse a config file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TfeError::InvalidConfig {
                detail: format!("config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TfeError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })
    }

    /// Load `explicit` if given, else the default file when it exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Merge overrides over the file and produce client settings.
    ///
    /// Precedence: override address, override hostname, file address,
    /// file hostname, then the default hostname.
    pub fn client_settings(&self, overrides: &Overrides) -> Result<ClientSettings> {
        let provider = &self.provider;

        let address = match (
            &overrides.address,
            &overrides.hostname,
            &provider.address,
            &provider.hostname,
        ) {
            (Some(address), _, _, _) => address.clone(),
            (None, Some(hostname), _, _) => address_for_hostname(hostname),
            (None, None, Some(address), _) => address.clone(),
            (None, None, None, Some(hostname)) => address_for_hostname(hostname),
            (None, None, None, None) => address_for_hostname(DEFAULT_HOSTNAME),
        };
        let address = Url::parse(&address).map_err(|e| TfeError::InvalidConfig {
            detail: format!("invalid address \"{address}\": {e}"),
        })?;

        let token = overrides
            .token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| provider.token.clone())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| TfeError::InvalidConfig {
                detail: "no API token configured. Set TFE_TOKEN, pass --token, \
                         or add `token` to the [provider] section of the config file."
                    .into(),
            })?;

        Ok(ClientSettings {
            address,
            token,
            ssl_skip_verify: provider.ssl_skip_verify,
        })
    }
}

fn address_for_hostname(hostname: &str) -> String {
    format!("https://{hostname}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_src: &str) -> AppConfig {
        toml::from_str(toml_src).unwrap()
    }

    fn token_only() -> Overrides {
        Overrides {
            token: Some("t".into()),
            ..Overrides::default()
        }
    }

    #[test]
    fn defaults_to_terraform_cloud() {
        let settings = AppConfig::default().client_settings(&token_only()).unwrap();
        assert_eq!(settings.address.as_str(), "https://app.terraform.io/");
        assert!(!settings.ssl_skip_verify);
    }

    #[test]
    fn file_hostname_and_token_are_used() {
        let config = parse(
            r#"
            [provider]
            hostname = "tfe.example.com"
            token = "from-file"
            ssl_skip_verify = true
            "#,
        );
        let settings = config.client_settings(&Overrides::default()).unwrap();
        assert_eq!(settings.address.as_str(), "https://tfe.example.com/");
        assert_eq!(settings.token, "from-file");
        assert!(settings.ssl_skip_verify);
    }

    #[test]
    fn overrides_win_over_file() {
        let config = parse(
            r#"
            [provider]
            address = "https://file.example.com"
            token = "from-file"
            "#,
        );
        let overrides = Overrides {
            address: None,
            hostname: Some("cli.example.com".into()),
            token: Some("from-cli".into()),
        };
        let settings = config.client_settings(&overrides).unwrap();
        assert_eq!(settings.address.as_str(), "https://cli.example.com/");
        assert_eq!(settings.token, "from-cli");
    }

    #[test]
    fn empty_token_override_falls_back_to_file() {
        let config = parse(
            r#"
            [provider]
            token = "from-file"
            "#,
        );
        let overrides = Overrides {
            token: Some(String::new()),
            ..Overrides::default()
        };
        let settings = config.client_settings(&overrides).unwrap();
        assert_eq!(settings.token, "from-file");
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = AppConfig::default()
            .client_settings(&Overrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("TFE_TOKEN"));
    }

    #[test]
    fn invalid_address_is_an_error() {
        let overrides = Overrides {
            address: Some("not a url".into()),
            ..token_only()
        };
        assert!(AppConfig::default().client_settings(&overrides).is_err());
    }

    #[test]
    fn explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::discover(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, TfeError::InvalidConfig { .. }));
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse("");
        assert!(config.provider.token.is_none());
    }
}
