use crate::ports::{DnsTransport, TransportResponse};
use dnsq_domain::{DomainError, Message, Name, Question, WireError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LookupPolicy {
    /// Per-attempt wait for a reply.
    pub timeout: Duration,
    /// Datagram attempts before giving up. Zero is treated as one.
    pub retries: u32,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            retries: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub hostname: String,
    pub query_type: u16,
}

impl LookupRequest {
    pub fn new(hostname: impl Into<String>, query_type: u16) -> Self {
        Self {
            hostname: hostname.into(),
            query_type,
        }
    }
}

/// Everything a caller may want to show about one exchange.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub query: Message,
    pub response: Message,
    pub query_bytes: Vec<u8>,
    pub response_bytes: Vec<u8>,
    pub protocol_used: &'static str,
}

/// Sends one question to one server: datagram first, with retries on timeout,
/// then a single stream retry if the datagram reply came back truncated.
pub struct LookupHostUseCase {
    datagram: Arc<dyn DnsTransport>,
    stream: Arc<dyn DnsTransport>,
    policy: LookupPolicy,
}

impl LookupHostUseCase {
    pub fn new(
        datagram: Arc<dyn DnsTransport>,
        stream: Arc<dyn DnsTransport>,
        policy: LookupPolicy,
    ) -> Self {
        Self {
            datagram,
            stream,
            policy,
        }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupOutcome, DomainError> {
        let start = Instant::now();

        let name = Name::from_dotted(&request.hostname).map_err(|e| {
            DomainError::InvalidDomainName(format!("{}: {}", request.hostname, e))
        })?;
        let mut query = Message::new();
        query.add_question(Question::new(name, request.query_type))?;
        let query_bytes = query.encode()?;

        debug!(
            id = query.id(),
            hostname = %request.hostname,
            query_type = request.query_type,
            bytes = query_bytes.len(),
            "Query built"
        );

        let reply = self.send_datagram(&query_bytes).await?;
        let (response, reply) = match Message::decode(&reply.bytes) {
            Ok(response) => (response, reply),
            Err(WireError::Truncated) => {
                info!(
                    protocol = self.stream.protocol_name(),
                    "UDP response truncated, retrying with TCP"
                );
                let reply = self.stream.send(&query_bytes, self.policy.timeout).await?;
                (Message::decode(&reply.bytes)?, reply)
            }
            Err(e) => return Err(e.into()),
        };

        if response.id() != query.id() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "reply id {} from {} does not match query id {}",
                response.id(),
                reply.from,
                query.id()
            )));
        }

        debug!(
            server = %reply.from,
            protocol = reply.protocol_used,
            answers = response.answers().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Lookup complete"
        );

        Ok(LookupOutcome {
            query,
            response,
            query_bytes,
            response_bytes: reply.bytes,
            protocol_used: reply.protocol_used,
        })
    }

    async fn send_datagram(&self, query_bytes: &[u8]) -> Result<TransportResponse, DomainError> {
        let attempts = self.policy.retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.datagram.send(query_bytes, self.policy.timeout).await {
                Ok(reply) => return Ok(reply),
                Err(DomainError::TransportTimeout { server }) => {
                    if attempt < attempts {
                        warn!("Attempt {}/{} timed out, retrying...", attempt, attempts);
                        continue;
                    }
                    warn!("Attempt {}/{} timed out, quitting", attempt, attempts);
                    return Err(DomainError::QueryTimeout { server, attempts });
                }
                Err(e) => return Err(e),
            }
        }
    }
}
