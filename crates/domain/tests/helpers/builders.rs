#![allow(dead_code)]
use std::net::Ipv4Addr;

/// Assembles raw response bytes field by field, so tests can feed the
/// decoder exactly what a server would send, compression pointers included.
pub struct WireBuilder {
    id: u16,
    flags_hi: u8,
    flags_lo: u8,
    counts: [u16; 4],
    body: Vec<u8>,
}

impl WireBuilder {
    pub fn response(id: u16) -> Self {
        Self {
            id,
            flags_hi: 0x81, // QR + RD
            flags_lo: 0x80, // RA
            counts: [0; 4],
            body: Vec::new(),
        }
    }

    pub fn authoritative(mut self) -> Self {
        self.flags_hi |= 0x04;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.flags_hi |= 0x02;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags_lo = (self.flags_lo & 0xF0) | (rcode & 0x0F);
        self
    }

    /// Overrides a section count without adding records.
    pub fn count(mut self, section: usize, value: u16) -> Self {
        self.counts[section] = value;
        self
    }

    /// Current body offset from the start of the message.
    pub fn offset(&self) -> u16 {
        (12 + self.body.len()) as u16
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.body.extend(encode_name(name));
        self.body.extend_from_slice(&qtype.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.counts[0] += 1;
        self
    }

    pub fn answer_a(self, owner: &[u8], ip: Ipv4Addr, ttl: u32) -> Self {
        self.record(0, owner, 1, ttl, &ip.octets())
    }

    pub fn answer(self, owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(0, owner, rtype, ttl, rdata)
    }

    pub fn authority(self, owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(1, owner, rtype, ttl, rdata)
    }

    pub fn additional(self, owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(2, owner, rtype, ttl, rdata)
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    fn record(mut self, section: usize, owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.body.extend_from_slice(owner);
        self.body.extend_from_slice(&rtype.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.body.extend_from_slice(&ttl.to_be_bytes());
        self.body.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.body.extend_from_slice(rdata);
        self.counts[section + 1] += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.body.len());
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.push(self.flags_hi);
        buf.push(self.flags_lo);
        for count in self.counts {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        buf.extend(self.body);
        buf
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn pointer(offset: u16) -> [u8; 2] {
    (0xC000 | offset).to_be_bytes()
}
