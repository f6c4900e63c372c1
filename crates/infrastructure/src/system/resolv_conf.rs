use async_trait::async_trait;
use dnsq_application::ports::NameserverSource;
use dnsq_domain::DomainError;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Reads `nameserver` lines from a resolv.conf-style file.
pub struct ResolvConfReader {
    path: PathBuf,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLV_CONF)
    }
}

#[async_trait]
impl NameserverSource for ResolvConfReader {
    async fn nameservers(&self) -> Result<Vec<IpAddr>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let servers = parse_nameservers(&content);
        debug!(
            path = %self.path.display(),
            count = servers.len(),
            "Nameservers loaded"
        );
        Ok(servers)
    }
}

pub fn parse_nameservers(content: &str) -> Vec<IpAddr> {
    let mut servers = Vec::new();

    for line in content.lines() {
        let line = line.trim_start();
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }

        for token in fields {
            match token.parse::<IpAddr>() {
                Ok(ip) => servers.push(ip),
                Err(_) => warn!(token, "Ignoring unparsable nameserver entry"),
            }
        }
    }

    servers
}
