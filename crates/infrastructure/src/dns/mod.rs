pub mod transport;

pub use transport::{create_transport, TcpTransport, UdpTransport};
