use super::{read_u16, Name};
use crate::dns_record::RecordType;
use crate::errors::WireError;
use std::fmt;

pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// A question in class IN.
    pub fn new(name: Name, qtype: u16) -> Self {
        Self {
            name,
            qtype,
            qclass: CLASS_IN,
        }
    }

    /// An A/IN question for dotted `name`.
    pub fn a(name: &str) -> Result<Self, WireError> {
        Ok(Self::new(Name::from_dotted(name)?, RecordType::A.to_u16()))
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn wire_len(&self) -> usize {
        self.name.wire_len() + 4
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        self.name.encode(out);
        out.extend_from_slice(&self.qtype.to_be_bytes());
        out.extend_from_slice(&self.qclass.to_be_bytes());
    }

    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, name_len) = Name::decode(buf, offset)?;
        let pos = offset + name_len;
        let qtype = read_u16(buf, pos)?;
        let qclass = read_u16(buf, pos + 2)?;
        Ok((
            Self {
                name,
                qtype,
                qclass,
            },
            name_len + 4,
        ))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "What is | {}", self.name)
    }
}
