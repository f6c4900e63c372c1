/// Problems with the TOML config file or the CLI overrides applied on top of
/// it. The binary reports these before any query is sent and exits with 2.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Path and underlying I/O message.
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value parsed but is unusable, e.g. a port of 0 or a server that is
    /// not an IP literal.
    #[error("Configuration validation error: {0}")]
    Validation(String),
}
