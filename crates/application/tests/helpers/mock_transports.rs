#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use dnsq_application::ports::{DnsTransport, NameserverSource, TransportResponse};
use dnsq_domain::DomainError;
use std::collections::VecDeque;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type Responder = Box<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

pub enum Step {
    Timeout,
    Fail(DomainError),
    Reply(Responder),
}

/// Plays back a fixed script, one step per `send`, and remembers every query
/// it was handed. Running past the end of the script behaves like a timeout.
#[derive(Clone)]
pub struct ScriptedTransport {
    protocol: &'static str,
    server: SocketAddr,
    steps: Arc<Mutex<VecDeque<Step>>>,
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl ScriptedTransport {
    pub fn udp() -> Self {
        Self::new("UDP")
    }

    pub fn tcp() -> Self {
        Self::new("TCP")
    }

    fn new(protocol: &'static str) -> Self {
        Self {
            protocol,
            server: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53)), 53),
            steps: Arc::new(Mutex::new(VecDeque::new())),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn then_timeout(self) -> Self {
        self.steps.lock().unwrap().push_back(Step::Timeout);
        self
    }

    pub fn then_fail(self, error: DomainError) -> Self {
        self.steps.lock().unwrap().push_back(Step::Fail(error));
        self
    }

    pub fn then_reply<F>(self, responder: F) -> Self
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        self.steps
            .lock()
            .unwrap()
            .push_back(Step::Reply(Box::new(responder)));
        self
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Reply(responder)) => Ok(TransportResponse {
                bytes: responder(message_bytes),
                protocol_used: self.protocol,
                from: self.server,
            }),
            Some(Step::Fail(error)) => Err(error),
            Some(Step::Timeout) | None => Err(DomainError::TransportTimeout {
                server: self.server.to_string(),
            }),
        }
    }

    fn protocol_name(&self) -> &'static str {
        self.protocol
    }
}

pub struct FixedNameservers(pub Vec<IpAddr>);

#[async_trait]
impl NameserverSource for FixedNameservers {
    async fn nameservers(&self) -> Result<Vec<IpAddr>, DomainError> {
        Ok(self.0.clone())
    }
}

/// Echoes the query back as an answer carrying one A record for `ip`.
pub fn answer_for(query: &[u8], ip: Ipv4Addr) -> Vec<u8> {
    let mut reply = query.to_vec();
    reply[2] |= 0x80;
    reply[3] = 0x80;
    reply[6..8].copy_from_slice(&1u16.to_be_bytes());
    reply.extend_from_slice(&[0xC0, 0x0C]);
    reply.extend_from_slice(&1u16.to_be_bytes());
    reply.extend_from_slice(&1u16.to_be_bytes());
    reply.extend_from_slice(&300u32.to_be_bytes());
    reply.extend_from_slice(&4u16.to_be_bytes());
    reply.extend_from_slice(&ip.octets());
    reply
}

/// Echoes the query back with QR and TC set and nothing else.
pub fn truncated_for(query: &[u8]) -> Vec<u8> {
    let mut reply = query.to_vec();
    reply[2] |= 0x82;
    reply
}

pub fn with_id(mut reply: Vec<u8>, id: u16) -> Vec<u8> {
    reply[..2].copy_from_slice(&id.to_be_bytes());
    reply
}
