//! TCP transport (RFC 1035 §4.2.2): every message travels behind a two-byte
//! big-endian length prefix.

use super::{io_error, timeout_error};
use async_trait::async_trait;
use dnsq_application::ports::{DnsTransport, TransportResponse};
use dnsq_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn connect(&self, deadline: Instant) -> Result<TcpStream, DomainError> {
        let server = self.server_addr;
        let stream = tokio::time::timeout_at(deadline, TcpStream::connect(server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "connect to", e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| io_error(server, "set TCP_NODELAY on", e))?;

        Ok(stream)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;
        let deadline = Instant::now() + timeout;

        let mut stream = self.connect(deadline).await?;

        tokio::time::timeout_at(deadline, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "send to", e))?;

        debug!(server = %server, message_len = message_bytes.len(), "TCP query sent");

        let response = tokio::time::timeout_at(deadline, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| io_error(server, "read from", e))?;

        debug!(server = %server, response_len = response.len(), "TCP response received");

        Ok(TransportResponse {
            bytes: response,
            protocol_used: "TCP",
            from: server,
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

/// Fails with `InvalidInput` for messages that do not fit the 16-bit prefix.
pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> std::io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("message of {} bytes exceeds 65535", message_bytes.len()),
        )
    })?;

    let mut framed = Vec::with_capacity(2 + message_bytes.len());
    framed.extend_from_slice(&length.to_be_bytes());
    framed.extend_from_slice(message_bytes);
    stream.write_all(&framed).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> std::io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let mut response = vec![0u8; usize::from(u16::from_be_bytes(len_buf))];
    stream.read_exact(&mut response).await?;
    Ok(response)
}
