//! dnsq domain layer: the DNS wire codec and the types shared by the client.
pub mod config;
pub mod dns_protocol;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config};
pub use dns_protocol::DnsProtocol;
pub use dns_record::{parse_query_type, RecordType};
pub use errors::{DomainError, WireError};
pub use wire::{Header, Message, Name, Question, RData, ResourceRecord, ResponseCode};
