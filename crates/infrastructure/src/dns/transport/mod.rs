pub mod tcp;
pub mod udp;

use dnsq_application::ports::DnsTransport;
use dnsq_domain::{DnsProtocol, DomainError};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

pub fn create_transport(protocol: &DnsProtocol) -> Arc<dyn DnsTransport> {
    match protocol {
        DnsProtocol::Udp { addr } => Arc::new(UdpTransport::new(*addr)),
        DnsProtocol::Tcp { addr } => Arc::new(TcpTransport::new(*addr)),
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, context: &str, err: io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => timeout_error(server),
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset {
                server: server.to_string(),
            }
        }
        _ => DomainError::TransportIo(format!("{} {}: {}", context, server, err)),
    }
}
