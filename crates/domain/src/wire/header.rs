use super::{ensure_available, read_u16};
use crate::errors::WireError;
use std::fmt;

pub const HEADER_LEN: usize = 12;

/// Response code carried in the low nibble of the fourth header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    /// Codes 6 through 15. `from_u8` never yields 0 through 5 here; a
    /// hand-built `Unknown(3)` encodes as 3 and decodes as `NameError`.
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => code & 0x0F,
        }
    }
}

/// The fixed 12-byte message header.
///
/// Byte 2 packs `QR(1) OPCODE(4) AA(1) TC(1) RD(1)`, byte 3 packs
/// `RA(1) Z(3) RCODE(4)`. `opcode` and `z` are masked to their field widths
/// on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub response_code: ResponseCode,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            id: 0,
            response: false,
            opcode: 0,
            authoritative: false,
            truncated: false,
            recursion_desired: false,
            recursion_available: false,
            z: 0,
            response_code: ResponseCode::NoError,
            qd_count: 0,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        }
    }
}

impl Header {
    /// A standard query header with a random transaction id and RD set.
    pub fn query() -> Self {
        Self::query_with_id(fastrand::u16(..))
    }

    pub fn query_with_id(id: u16) -> Self {
        Self {
            id,
            recursion_desired: true,
            ..Self::default()
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let flags_hi = (u8::from(self.response) << 7)
            | ((self.opcode & 0x0F) << 3)
            | (u8::from(self.authoritative) << 2)
            | (u8::from(self.truncated) << 1)
            | u8::from(self.recursion_desired);
        let flags_lo = (u8::from(self.recursion_available) << 7)
            | ((self.z & 0x07) << 4)
            | self.response_code.to_u8();

        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.id.to_be_bytes());
        out[2] = flags_hi;
        out[3] = flags_lo;
        out[4..6].copy_from_slice(&self.qd_count.to_be_bytes());
        out[6..8].copy_from_slice(&self.an_count.to_be_bytes());
        out[8..10].copy_from_slice(&self.ns_count.to_be_bytes());
        out[10..12].copy_from_slice(&self.ar_count.to_be_bytes());
        out
    }

    /// Decodes the first 12 bytes of `buf`. No validation beyond length.
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        ensure_available(buf, 0, HEADER_LEN)?;
        let flags_hi = buf[2];
        let flags_lo = buf[3];

        Ok(Self {
            id: read_u16(buf, 0)?,
            response: flags_hi & 0x80 != 0,
            opcode: (flags_hi >> 3) & 0x0F,
            authoritative: flags_hi & 0x04 != 0,
            truncated: flags_hi & 0x02 != 0,
            recursion_desired: flags_hi & 0x01 != 0,
            recursion_available: flags_lo & 0x80 != 0,
            z: (flags_lo >> 4) & 0x07,
            response_code: ResponseCode::from_u8(flags_lo),
            qd_count: read_u16(buf, 4)?,
            an_count: read_u16(buf, 6)?,
            ns_count: read_u16(buf, 8)?,
            ar_count: read_u16(buf, 10)?,
        })
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = vec![
            format!("id = {}", self.id),
            if self.response { "Answer" } else { "Query" }.to_string(),
            format!("opcode = {}", self.opcode),
        ];
        if self.authoritative {
            line.push("Authoritative Answer".to_string());
        }
        if self.truncated {
            line.push("Truncated".to_string());
        }
        if self.recursion_desired {
            line.push("Recursion Desired".to_string());
        }
        if self.recursion_available {
            line.push("Recursion Available".to_string());
        }
        writeln!(f, "{}", line.join(" | "))?;
        write!(
            f,
            "return_code = {} | questions = {} | answers = {} | authority = {} | additional = {}",
            self.response_code.to_u8(),
            self.qd_count,
            self.an_count,
            self.ns_count,
            self.ar_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_header_defaults() {
        let header = Header::query();
        assert!(header.recursion_desired);
        assert!(!header.response);
        assert_eq!(header.response_code, ResponseCode::NoError);
    }

    #[test]
    fn test_flag_bit_positions() {
        let header = Header {
            id: 0xBEEF,
            response: true,
            opcode: 2,
            authoritative: true,
            truncated: false,
            recursion_desired: true,
            recursion_available: true,
            z: 0,
            response_code: ResponseCode::NameError,
            qd_count: 1,
            an_count: 2,
            ns_count: 3,
            ar_count: 4,
        };
        let bytes = header.encode();
        assert_eq!(
            bytes,
            [0xBE, 0xEF, 0x95, 0x83, 0, 1, 0, 2, 0, 3, 0, 4]
        );
        assert_eq!(Header::decode(&bytes).unwrap(), header);
    }

    #[test]
    fn test_round_trip_every_flag_combination() {
        for bits in 0u16..(1 << 9) {
            let header = Header {
                id: bits.wrapping_mul(257),
                response: bits & 1 != 0,
                opcode: ((bits >> 1) & 0x0F) as u8,
                authoritative: bits & 0x20 != 0,
                truncated: bits & 0x40 != 0,
                recursion_desired: bits & 0x80 != 0,
                recursion_available: bits & 0x100 != 0,
                z: (bits % 8) as u8,
                response_code: ResponseCode::from_u8((bits % 16) as u8),
                qd_count: bits,
                an_count: u16::MAX - bits,
                ns_count: 0,
                ar_count: 7,
            };
            assert_eq!(Header::decode(&header.encode()).unwrap(), header);
        }
    }

    #[test]
    fn test_decode_short_buffer() {
        assert_eq!(
            Header::decode(&[0u8; 11]),
            Err(WireError::TruncatedBuffer {
                needed: 12,
                available: 11
            })
        );
    }

    #[test]
    fn test_response_code_low_values_decode_as_named() {
        for code in 0..=15u8 {
            assert_eq!(ResponseCode::from_u8(code).to_u8(), code);
        }
        assert_eq!(ResponseCode::from_u8(9), ResponseCode::Unknown(9));
        assert_eq!(
            ResponseCode::from_u8(ResponseCode::Unknown(3).to_u8()),
            ResponseCode::NameError
        );
        assert_eq!(ResponseCode::Unknown(0x1A).to_u8(), 0x0A);
    }

    #[test]
    fn test_display() {
        let header = Header::query_with_id(7);
        let text = header.to_string();
        assert!(text.starts_with("id = 7 | Query | opcode = 0 | Recursion Desired"));
        assert!(text.contains("questions = 0"));
    }
}
