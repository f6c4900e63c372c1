//! RFC 1035 wire codec.
//!
//! Encoding is plain composition: every part writes itself into a growing
//! `Vec<u8>`. Decoding walks a single cursor left to right over the received
//! buffer; each sub-decoder returns how many bytes it consumed so the caller can
//! advance. All integers are big-endian.

mod header;
mod message;
mod name;
mod question;
mod record;

pub use header::{Header, ResponseCode, HEADER_LEN};
pub use message::Message;
pub use name::{Name, MAX_LABEL_LEN, MAX_POINTER_HOPS};
pub use question::{Question, CLASS_IN};
pub use record::{RData, ResourceRecord};

use crate::errors::WireError;

fn ensure_available(buf: &[u8], pos: usize, len: usize) -> Result<(), WireError> {
    let needed = pos.saturating_add(len);
    if needed > buf.len() {
        return Err(WireError::TruncatedBuffer {
            needed,
            available: buf.len(),
        });
    }
    Ok(())
}

fn read_u16(buf: &[u8], pos: usize) -> Result<u16, WireError> {
    ensure_available(buf, pos, 2)?;
    Ok(u16::from_be_bytes([buf[pos], buf[pos + 1]]))
}

fn read_u32(buf: &[u8], pos: usize) -> Result<u32, WireError> {
    ensure_available(buf, pos, 4)?;
    Ok(u32::from_be_bytes([
        buf[pos],
        buf[pos + 1],
        buf[pos + 2],
        buf[pos + 3],
    ]))
}
