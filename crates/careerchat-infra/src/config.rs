//! Configuration loader for careerchat.
//!
//! Reads `config.toml` (from `--config` or `<config dir>/careerchat/`) into
//! [`AppConfig`] and applies `CAREERCHAT_*` environment overrides. A missing
//! file means defaults; a malformed one is reported to the caller.

use std::path::{Path, PathBuf};

use careerchat_types::config::AppConfig;

/// Default location: `<platform config dir>/careerchat/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("careerchat").join("config.toml"))
}

/// Errors reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Read configuration from `path`.
///
/// - `Ok(None)` if the file does not exist (callers use [`AppConfig::default()`]).
/// - `Err` if the file exists but cannot be read or parsed; the binary logs a
///   warning and falls back to defaults once logging is up.
/// - `Ok(Some(config))` otherwise.
pub async fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
}

/// Apply `CAREERCHAT_HOST`, `CAREERCHAT_PORT` and `CAREERCHAT_MODEL` from the
/// process environment.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides(config, |name| std::env::var(name).ok());
}

/// Apply overrides from an arbitrary variable lookup.
///
/// An unparsable port is ignored with a warning.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(host) = lookup("CAREERCHAT_HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("CAREERCHAT_PORT") {
        match port.parse() {
            Ok(port) => config.server.port = port,
            Err(err) => tracing::warn!("Ignoring CAREERCHAT_PORT={port}: {err}"),
        }
    }
    if let Some(model) = lookup("CAREERCHAT_MODEL") {
        config.gateway.model = model;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[tokio::test]
    async fn read_config_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(&tmp.path().join("config.toml")).await.unwrap();
        assert!(config.is_none());
    }

    #[tokio::test]
    async fn read_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
[server]
host = "0.0.0.0"
port = 8080

[session]
idle_ttl_secs = 600
"#,
        )
        .await
        .unwrap();

        let config = read_config(&path).await.unwrap().unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.session.idle_ttl_secs, 600);
        assert_eq!(config.session.cookie_name, "careerchat_session");
        assert_eq!(config.gateway.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn read_config_invalid_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = read_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[tokio::test]
    async fn read_config_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn apply_overrides_sets_fields() {
        let vars: HashMap<&str, &str> = [
            ("CAREERCHAT_HOST", "0.0.0.0"),
            ("CAREERCHAT_PORT", "9000"),
            ("CAREERCHAT_MODEL", "gemini-2.5-flash"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        apply_overrides(&mut config, |name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.gateway.model, "gemini-2.5-flash");
    }

    #[test]
    fn apply_overrides_ignores_bad_port() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, |name| {
            (name == "CAREERCHAT_PORT").then(|| "not-a-port".to_string())
        });
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn default_config_path_ends_with_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("careerchat/config.toml"));
        }
    }
}
