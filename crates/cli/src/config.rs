//! Process configuration, read from the environment.

use larder_observability::LogFormat;

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `RUST_LOG`
    pub log_filter: String,
    /// `LARDER_LOG_FORMAT` (`json` | `text`)
    pub log_format: LogFormat,
    /// Problems found while reading the environment. Logged once tracing is up.
    pub warnings: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let log_format = match lookup("LARDER_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                warnings.push(format!("LARDER_LOG_FORMAT ignored: {err}"));
                LogFormat::default()
            }),
        };

        Self {
            log_filter,
            log_format,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.log_filter, "warn");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert!(cfg.warnings.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[("RUST_LOG", "larder_inventory=debug"), ("LARDER_LOG_FORMAT", "text")]);
        assert_eq!(cfg.log_filter, "larder_inventory=debug");
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn bad_format_falls_back_with_warning() {
        let cfg = config(&[("LARDER_LOG_FORMAT", "xml")]);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.warnings.len(), 1);
        assert!(cfg.warnings[0].contains("xml"));
    }
}
