//! dnsq application layer: ports to the outside world and the lookup use case.
pub mod ports;
pub mod use_cases;
