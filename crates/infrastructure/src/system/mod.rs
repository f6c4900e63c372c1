pub mod resolv_conf;

pub use resolv_conf::{parse_nameservers, ResolvConfReader, DEFAULT_RESOLV_CONF};
