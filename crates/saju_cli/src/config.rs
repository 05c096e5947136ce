use std::env;
use std::fmt;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output: OutputFormat,
    pub telemetry: TelemetryConfig,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("SAJU_OUTPUT") {
            Some(v) => OutputFormat::parse(&v).ok_or(ConfigError::InvalidOutput(v))?,
            None => OutputFormat::Text,
        };
        let log_level = lookup("SAJU_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());
        Ok(Self {
            output,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidOutput(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutput(v) => {
                write!(f, "SAJU_OUTPUT must be 'text' or 'json', got '{v}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_env_missing() {
        let config = AppConfig::from_lookup(lookup(&[])).expect("defaults load");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_output_and_level() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SAJU_OUTPUT", "JSON"),
            ("SAJU_LOG_LEVEL", "saju_chart=debug"),
        ]))
        .expect("config loads");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.telemetry.log_level, "saju_chart=debug");
    }

    #[test]
    fn rejects_unknown_output() {
        let err = AppConfig::from_lookup(lookup(&[("SAJU_OUTPUT", "yaml")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidOutput("yaml".to_string()));
    }
}
