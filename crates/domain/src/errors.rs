use thiserror::Error;

/// Failures raised by the wire codec.
///
/// Every decode failure is final for the buffer it came from: the partially
/// decoded message must be discarded. `Truncated` is the one variant that is a
/// signal rather than a defect; the caller is expected to repeat the query over
/// a stream transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Label is {len} octets long (max 63)")]
    LabelTooLong { len: usize },

    #[error("Invalid name: {0}")]
    InvalidNameSpec(String),

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Buffer truncated: needed {needed} bytes, {available} available")]
    TruncatedBuffer { needed: usize, available: usize },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Message is truncated (TC flag set), retry over TCP")]
    Truncated,

    #[error("Too many records in {section} section (max 65535)")]
    TooManyRecords { section: &'static str },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query to {server} timed out after {attempts} attempts")]
    QueryTimeout { server: String, attempts: u32 },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport I/O error: {0}")]
    TransportIo(String),

    #[error("DNS server not specified and found no defaults")]
    NoNameservers,

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
