//! UDP transport (RFC 1035 §4.2.1).
//!
//! Messages go out as-is, one datagram each. A reply with the TC bit set is
//! handed back untouched; deciding to retry over TCP is the caller's job.

use super::{io_error, timeout_error};
use async_trait::async_trait;
use dnsq_application::ports::{DnsTransport, TransportResponse};
use dnsq_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Largest datagram accepted from a server.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;
        let deadline = Instant::now() + timeout;

        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| io_error(server, "bind for", e))?;

        let bytes_sent = tokio::time::timeout_at(deadline, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "send to", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| timeout_error(server))?
                    .map_err(|e| io_error(server, "receive from", e))?;

            if from != server {
                warn!(
                    expected = %server,
                    received_from = %from,
                    "Discarding UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %server, bytes_received, "UDP response received");

            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
                from,
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
