use super::{ensure_available, read_u16, read_u32, Name};
use crate::dns_record::RecordType;
use crate::errors::WireError;
use std::fmt;
use std::net::Ipv4Addr;

/// type + class + ttl + rdlength
const FIXED_LEN: usize = 10;

/// Record payload, selected by the numeric type at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    /// Type A.
    Address(Ipv4Addr),
    /// Types NS and CNAME.
    Name(Name),
    /// Anything else, kept verbatim.
    Opaque(Vec<u8>),
}

impl RData {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            RData::Address(addr) => out.extend_from_slice(&addr.octets()),
            RData::Name(name) => name.encode(out),
            RData::Opaque(bytes) => out.extend_from_slice(bytes),
        }
    }
}

/// An answer, authority or additional record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    /// Re-encodes the record. Names, both owner and rdata, are written
    /// uncompressed, so the rdata length may differ from the one received.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), WireError> {
        self.name.encode(out);
        out.extend_from_slice(&self.rtype.to_be_bytes());
        out.extend_from_slice(&self.rclass.to_be_bytes());
        out.extend_from_slice(&self.ttl.to_be_bytes());

        let len_at = out.len();
        out.extend_from_slice(&[0, 0]);
        self.rdata.encode(out);
        let rdlen = u16::try_from(out.len() - len_at - 2).map_err(|_| {
            WireError::MalformedRecord(format!(
                "rdata of {} bytes does not fit the length field",
                out.len() - len_at - 2
            ))
        })?;
        out[len_at..len_at + 2].copy_from_slice(&rdlen.to_be_bytes());
        Ok(())
    }

    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, name_len) = Name::decode(buf, offset)?;
        let mut pos = offset + name_len;

        ensure_available(buf, pos, FIXED_LEN)?;
        let rtype = read_u16(buf, pos)?;
        let rclass = read_u16(buf, pos + 2)?;
        let ttl = read_u32(buf, pos + 4)?;
        let rdlen = usize::from(read_u16(buf, pos + 8)?);
        pos += FIXED_LEN;

        ensure_available(buf, pos, rdlen)?;
        let rdata = match RecordType::from_u16(rtype) {
            Some(RecordType::A) => {
                if rdlen != 4 {
                    return Err(WireError::MalformedRecord(format!(
                        "A record rdata is {} bytes, expected 4",
                        rdlen
                    )));
                }
                RData::Address(Ipv4Addr::new(
                    buf[pos],
                    buf[pos + 1],
                    buf[pos + 2],
                    buf[pos + 3],
                ))
            }
            Some(RecordType::NS | RecordType::CNAME) => {
                let (target, used) = Name::decode(buf, pos)?;
                if used != rdlen {
                    return Err(WireError::MalformedRecord(format!(
                        "type {} rdata name spans {} bytes, rdlength says {}",
                        rtype, used, rdlen
                    )));
                }
                RData::Name(target)
            }
            _ => RData::Opaque(buf[pos..pos + rdlen].to_vec()),
        };

        Ok((
            Self {
                name,
                rtype,
                rclass,
                ttl,
                rdata,
            },
            name_len + FIXED_LEN + rdlen,
        ))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.record_type(), &self.rdata) {
            (Some(RecordType::A), RData::Address(addr)) => {
                write!(f, "Host {} | A: {} | {}", self.name, addr, self.ttl)
            }
            (Some(rt @ (RecordType::NS | RecordType::CNAME)), RData::Name(target)) => {
                write!(f, "Host {} | {}: {} | {}", self.name, rt, target, self.ttl)
            }
            _ => write!(f, "Resource type >{}< not supported", self.rtype),
        }
    }
}
