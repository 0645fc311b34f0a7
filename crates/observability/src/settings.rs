use core::str::FromStr;

use thiserror::Error;

/// Log output format, selected with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON lines.
    #[default]
    Json,
    /// Single-line human-readable logs.
    Compact,
    /// Multi-line human-readable logs.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format {0:?} (expected json, compact or pretty)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `shopkeep_shopping=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogSettings {
    /// Read `RUST_LOG` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    /// Build settings from raw variable values; unset or blank values use defaults.
    pub fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let defaults = Self::default();

        let filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.filter);

        let format = match format.map(str::trim).filter(|f| !f.is_empty()) {
            None => defaults.format,
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownLogFormat| {
                // The subscriber is not installed yet, so stderr is the only channel.
                eprintln!("{err}; using {:?}", defaults.format);
                defaults.format
            }),
        };

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_use_defaults() {
        assert_eq!(LogSettings::from_vars(None, None), LogSettings::default());
        assert_eq!(LogSettings::from_vars(Some("  "), Some("")), LogSettings::default());
    }

    #[test]
    fn vars_override_defaults() {
        let settings = LogSettings::from_vars(Some("shopkeep_shopping=debug"), Some("Pretty"));
        assert_eq!(settings.filter, "shopkeep_shopping=debug");
        assert_eq!(settings.format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let settings = LogSettings::from_vars(None, Some("xml"));
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(
            "xml".parse::<LogFormat>(),
            Err(UnknownLogFormat("xml".to_string()))
        );
    }
}
