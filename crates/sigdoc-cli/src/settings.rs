//! Optional TOML settings
//!
//! ```toml
//! [verify]
//! document = "document.json"
//! key = "public_key.ecdsa.pem"
//!
//! [log]
//! filter = "sigdoc_core=debug"
//! format = "json"
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{CliError, CliResult};

pub const DEFAULT_DOCUMENT: &str = "document.json";
pub const DEFAULT_PUBLIC_KEY: &str = "public_key.ecdsa.pem";
pub const DEFAULT_PRIVATE_KEY: &str = "private.ecdsa.secure.pem";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub verify: VerifyCfg,
    pub log: LogCfg,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyCfg {
    /// Document verified when `--document` is not given
    pub document: String,
    /// Public key used when `--key` is not given
    pub key: String,
}

impl Default for VerifyCfg {
    fn default() -> Self {
        Self {
            document: DEFAULT_DOCUMENT.to_string(),
            key: DEFAULT_PUBLIC_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogCfg {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogCfg {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Settings {
    pub fn load(config_path: &Path) -> CliResult<Self> {
        if !config_path.exists() {
            return Err(CliError::FileNotFound(config_path.display().to_string()));
        }
        let text = fs::read_to_string(config_path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> CliResult<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.verify.document, DEFAULT_DOCUMENT);
        assert_eq!(settings.verify.key, DEFAULT_PUBLIC_KEY);
        assert_eq!(settings.log.filter, "warn");
        assert_eq!(settings.log.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [verify]
            key = "keys/release.pem"

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.verify.key, "keys/release.pem");
        assert_eq!(settings.verify.document, DEFAULT_DOCUMENT);
        assert_eq!(settings.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Settings::from_toml("[verify]\nkeyy = \"typo.pem\"\n");
        assert!(matches!(result, Err(CliError::Settings(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load(Path::new("/nonexistent/sigdoc.toml"));
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }
}
