mod dns_transport;
mod nameserver_source;

pub use dns_transport::{DnsTransport, TransportResponse};
pub use nameserver_source::NameserverSource;
