//! Configuration file loading for lucarne.
//!
//! Reads `lucarne.config.json` from the current working directory. A
//! missing file yields defaults; an unreadable or unparsable file logs a
//! warning and yields defaults.

use std::path::Path;

use lucarne_atelier::FormMode;
use serde::{Deserialize, Serialize};

/// Top-level lucarne configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LucarneConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preview defaults for the CLI.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Defaults applied when the corresponding CLI flag is absent.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PreviewConfig {
    /// Form mode to preview (`login` or `signup`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FormMode>,

    /// Indented multi-line HTML output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

/// Load `lucarne.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> LucarneConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("lucarne.config.json");

    if !config_path.exists() {
        return LucarneConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %config_path.display(),
                    %err,
                    "failed to parse config, using defaults"
                );
                LucarneConfig::default()
            }
        },
        Err(err) => {
            tracing::warn!(
                path = %config_path.display(),
                %err,
                "failed to read config, using defaults"
            );
            LucarneConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LucarneConfig::default();
        assert!(config.schema.is_none());
        assert!(config.preview.mode.is_none());
        assert!(config.preview.pretty.is_none());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/lucarne-config-test")));
        assert!(config.preview.mode.is_none());
    }

    #[test]
    fn test_parse_preview_section() {
        let config: LucarneConfig =
            serde_json::from_str(r#"{ "preview": { "mode": "signup", "pretty": true } }"#)
                .unwrap();
        assert_eq!(config.preview.mode, Some(FormMode::Signup));
        assert_eq!(config.preview.pretty, Some(true));
    }
}
