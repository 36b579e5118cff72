//! Client configuration.
//!
//! Values are layered with `figment`: built-in defaults, then an optional YAML
//! file, then `GUILDKIT_*` environment variables (e.g.
//! `GUILDKIT_API_PREFIX=/api/v9`). Missing keys fall back to their defaults.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`ClientConfig::load`].
pub const ENV_PREFIX: &str = "GUILDKIT_";

/// Configuration error for client settings.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid guildkit configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prepended to every route, e.g. `/api/v6` + `/channels/1`.
    pub api_prefix: String,

    /// Upper bound for `delete_message_days` when banning.
    pub max_ban_delete_days: u32,

    /// Log request bodies at `trace` level.
    pub log_bodies: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api/v6".to_owned(),
            max_ban_delete_days: 7,
            log_bodies: false,
        }
    }
}

impl ClientConfig {
    /// Layered provider: defaults <- `file` (if given) <- environment.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] if a layer holds a value of the wrong type.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the file or the environment holds
    /// a value of the wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::from_figment(&Self::figment(file))?;
        tracing::debug!(
            api_prefix = %config.api_prefix,
            max_ban_delete_days = config.max_ban_delete_days,
            "loaded guildkit client config"
        );
        Ok(config)
    }

    /// Clamps a requested purge window to `max_ban_delete_days`.
    #[must_use]
    pub fn clamp_ban_days(&self, days: u32) -> u32 {
        days.min(self.max_ban_delete_days)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_sources() {
        temp_env::with_vars_unset(
            ["GUILDKIT_API_PREFIX", "GUILDKIT_MAX_BAN_DELETE_DAYS", "GUILDKIT_LOG_BODIES"],
            || {
                let config = ClientConfig::load(None).unwrap();
                assert_eq!(config, ClientConfig::default());
            },
        );
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "api_prefix: /api/v9\nmax_ban_delete_days: 3").unwrap();

        temp_env::with_vars_unset(["GUILDKIT_API_PREFIX", "GUILDKIT_MAX_BAN_DELETE_DAYS"], || {
            let config = ClientConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.api_prefix, "/api/v9");
            assert_eq!(config.max_ban_delete_days, 3);
            assert!(!config.log_bodies);
        });
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "api_prefix: /api/v9").unwrap();

        temp_env::with_var("GUILDKIT_API_PREFIX", Some("/api/v10"), || {
            let config = ClientConfig::load(Some(file.path())).unwrap();
            assert_eq!(config.api_prefix, "/api/v10");
        });
    }

    #[test]
    fn wrong_type_is_reported() {
        temp_env::with_var("GUILDKIT_MAX_BAN_DELETE_DAYS", Some("forever"), || {
            let err = ClientConfig::load(None).unwrap_err();
            assert!(err.to_string().contains("invalid guildkit configuration"));
        });
    }

    #[test]
    fn ban_days_are_clamped() {
        let config = ClientConfig::default();
        assert_eq!(config.clamp_ban_days(30), 7);
        assert_eq!(config.clamp_ban_days(2), 2);
    }
}
