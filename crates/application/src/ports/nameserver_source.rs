use async_trait::async_trait;
use dnsq_domain::DomainError;
use std::net::IpAddr;

/// System-provided default nameservers, in preference order.
#[async_trait]
pub trait NameserverSource: Send + Sync {
    async fn nameservers(&self) -> Result<Vec<IpAddr>, DomainError>;
}
