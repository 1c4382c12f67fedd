//! Application configuration loaded from the environment and command line.

use std::{env, str::FromStr};

use serde::{Deserialize, Serialize};

/// Default `tracing` filter when neither `RUST_LOG` nor `BOXOFFICE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "boxoffice=warn";

/// How records are printed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Framed, human-readable blocks.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level settings for the `boxoffice` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Record display format.
    pub output: OutputFormat,
    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `BOXOFFICE_OUTPUT` and `RUST_LOG` / `BOXOFFICE_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// Unset or unparsable values fall back to defaults; `RUST_LOG` wins over
    /// `BOXOFFICE_LOG`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            output: lookup("BOXOFFICE_OUTPUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.output),
            log_filter: lookup("RUST_LOG")
                .or_else(|| lookup("BOXOFFICE_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }

    /// Applies command-line overrides: `--json`, `--text`, `--log=<filter>`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--json" => self.output = OutputFormat::Json,
                "--text" => self.output = OutputFormat::Text,
                _ => {
                    if let Some(filter) = arg.strip_prefix("--log=") {
                        self.log_filter = filter.to_string();
                    }
                }
            }
        }
        self
    }
}
