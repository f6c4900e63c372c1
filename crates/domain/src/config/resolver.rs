use serde::{Deserialize, Serialize};

/// Where and how to send queries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IP literal of the server to query; resolv.conf is consulted when unset.
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            resolv_conf: default_resolv_conf(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_retries() -> u32 {
    3
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
