//! Configuration loading from environment variables.

use thiserror::Error;

use variantgen_observability::{LogFormat, ObservabilityConfig};
use variantgen_products::GeneratorSettings;

pub const MAX_COMBINATIONS_VAR: &str = "VARIANTGEN_MAX_COMBINATIONS";
pub const LOG_FORMAT_VAR: &str = "VARIANTGEN_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Everything a process embedding the generator needs at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub generator: GeneratorSettings,
    pub observability: ObservabilityConfig,
}

/// Load configuration from the process environment.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration from an env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a plain map.
pub fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let non_empty = |var: &str| lookup(var).ok().filter(|raw| !raw.trim().is_empty());

    let max_combinations = non_empty(MAX_COMBINATIONS_VAR)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: MAX_COMBINATIONS_VAR.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()?;

    let format = non_empty(LOG_FORMAT_VAR)
        .map(|raw| {
            raw.parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: LOG_FORMAT_VAR.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()?
        .unwrap_or_default();

    Ok(AppConfig {
        generator: GeneratorSettings { max_combinations },
        observability: ObservabilityConfig {
            format,
            ..ObservabilityConfig::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = build_config(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generator.max_combinations, None);
        assert_eq!(config.observability.format, LogFormat::Json);
    }

    #[test]
    fn reads_limit_and_format() {
        let config = build_config(lookup_from(&[
            (MAX_COMBINATIONS_VAR, " 500 "),
            (LOG_FORMAT_VAR, "text"),
        ]))
        .unwrap();
        assert_eq!(config.generator.max_combinations, Some(500));
        assert_eq!(config.observability.format, LogFormat::Text);
    }

    #[test]
    fn empty_limit_means_unlimited() {
        let config = build_config(lookup_from(&[(MAX_COMBINATIONS_VAR, "")])).unwrap();
        assert_eq!(config.generator.max_combinations, None);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = build_config(lookup_from(&[(MAX_COMBINATIONS_VAR, "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidEnvVar { var, .. } => assert_eq!(var, MAX_COMBINATIONS_VAR),
        }

        let err = build_config(lookup_from(&[(LOG_FORMAT_VAR, "xml")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar {
                var: LOG_FORMAT_VAR.to_string(),
                reason: "unknown log format 'xml' (expected 'json' or 'text')".to_string(),
            }
        );
    }
}
