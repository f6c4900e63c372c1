use serde::{Deserialize, Serialize};

/// `[logging]` section. Diagnostics go to stderr; stdout carries only the
/// lookup result, so the default stays quiet at `warn`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `dnsq_infrastructure=debug`.
    /// `RUST_LOG` takes precedence; each `-d` flag raises it.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
