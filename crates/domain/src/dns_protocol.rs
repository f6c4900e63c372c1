use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Transport used to reach a nameserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsProtocol {
    Udp { addr: SocketAddr },
    Tcp { addr: SocketAddr },
}

impl DnsProtocol {
    pub fn udp(ip: IpAddr, port: u16) -> Self {
        DnsProtocol::Udp {
            addr: SocketAddr::new(ip, port),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        match self {
            DnsProtocol::Udp { addr } | DnsProtocol::Tcp { addr } => *addr,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Udp { .. } => "UDP",
            DnsProtocol::Tcp { .. } => "TCP",
        }
    }

    /// The same server reached over a byte stream, used after a truncated
    /// datagram reply.
    pub fn to_stream(&self) -> Self {
        DnsProtocol::Tcp {
            addr: self.socket_addr(),
        }
    }
}

impl FromStr for DnsProtocol {
    type Err = String;

    /// Accepts `udp://IP:PORT`, `tcp://IP:PORT` or a bare `IP:PORT` (UDP).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_addr = |rest: &str| {
            rest.parse::<SocketAddr>()
                .map_err(|e| format!("Invalid socket address '{}': {}", rest, e))
        };
        if let Some(rest) = s.strip_prefix("udp://") {
            return Ok(DnsProtocol::Udp {
                addr: parse_addr(rest)?,
            });
        }
        if let Some(rest) = s.strip_prefix("tcp://") {
            return Ok(DnsProtocol::Tcp {
                addr: parse_addr(rest)?,
            });
        }
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(DnsProtocol::Udp { addr });
        }
        Err(format!(
            "Invalid DNS endpoint format: '{}'. Expected: udp://IP:PORT, tcp://IP:PORT or IP:PORT",
            s
        ))
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProtocol::Udp { addr } => write!(f, "udp://{}", addr),
            DnsProtocol::Tcp { addr } => write!(f, "tcp://{}", addr),
        }
    }
}
