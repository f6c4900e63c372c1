use async_trait::async_trait;
use dnsq_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,

    pub from: SocketAddr,
}

/// Moves one encoded query to a nameserver and brings back its reply.
///
/// Implementations time out with `DomainError::TransportTimeout`; the lookup
/// use case treats that variant, and only that one, as retryable.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
