use crate::errors::WireError;
use smallvec::SmallVec;
use std::fmt;

pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on compression pointers followed while decoding one name.
/// A chain longer than this is treated as a loop.
pub const MAX_POINTER_HOPS: usize = 16;

const MAX_NAME_WIRE_LEN: usize = 255;
const POINTER_MASK: u8 = 0xC0;

type Labels = SmallVec<[Box<[u8]>; 4]>;

/// A domain name as an ordered sequence of non-empty labels.
///
/// The root label is implicit: it is written as the terminating zero byte on
/// the wire and dropped from the label list. A decoded name owns its labels, so
/// the buffer it was read from can be discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    labels: Labels,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses dotted text (`"www.example.com"`, trailing dot optional).
    pub fn from_dotted(text: &str) -> Result<Self, WireError> {
        if text.is_empty() {
            return Err(WireError::InvalidNameSpec("name is empty".to_string()));
        }
        if text == "." {
            return Ok(Self::root());
        }
        let text = text.strip_suffix('.').unwrap_or(text);
        Self::from_labels(text.split('.'))
    }

    pub fn from_labels<I, L>(labels: I) -> Result<Self, WireError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut out = Labels::new();
        for label in labels {
            let label = label.as_ref();
            if label.is_empty() {
                return Err(WireError::InvalidNameSpec(
                    "empty label inside name".to_string(),
                ));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(WireError::LabelTooLong { len: label.len() });
            }
            out.push(label.into());
        }
        Ok(Self { labels: out })
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(|label| &**label)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the uncompressed wire form, terminator included.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        for label in &self.labels {
            // from_labels guarantees len <= 63
            out.push(label.len() as u8);
            out.extend_from_slice(label);
        }
        out.push(0);
    }

    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        self.encode(&mut out);
        out
    }

    /// Decodes the name starting at `offset`, following compression pointers.
    ///
    /// Returns the name and the number of bytes it occupies at `offset`: up
    /// to and including the first pointer if one was followed, otherwise up
    /// to and including the zero terminator.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let mut labels = Labels::new();
        let mut pos = offset;
        let mut consumed: Option<usize> = None;
        let mut hops = 0usize;
        let mut name_len = 1usize;

        loop {
            let len = *buf.get(pos).ok_or_else(|| {
                WireError::MalformedName(format!("name runs past end of buffer at offset {}", pos))
            })?;

            match len & POINTER_MASK {
                POINTER_MASK => {
                    let low = *buf.get(pos + 1).ok_or_else(|| {
                        WireError::MalformedName(format!(
                            "compression pointer at offset {} cut short",
                            pos
                        ))
                    })?;
                    let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);
                    if target >= buf.len() {
                        return Err(WireError::MalformedName(format!(
                            "compression pointer to offset {} outside {}-byte buffer",
                            target,
                            buf.len()
                        )));
                    }
                    hops += 1;
                    if hops > MAX_POINTER_HOPS {
                        return Err(WireError::MalformedName(format!(
                            "more than {} compression pointers, likely a loop",
                            MAX_POINTER_HOPS
                        )));
                    }
                    consumed.get_or_insert(pos + 2 - offset);
                    pos = target;
                }
                0x00 if len == 0 => {
                    let consumed = consumed.unwrap_or(pos + 1 - offset);
                    return Ok((Self { labels }, consumed));
                }
                0x00 => {
                    let start = pos + 1;
                    let end = start + usize::from(len);
                    if end > buf.len() {
                        return Err(WireError::MalformedName(format!(
                            "label at offset {} runs past end of buffer",
                            pos
                        )));
                    }
                    name_len += usize::from(len) + 1;
                    if name_len > MAX_NAME_WIRE_LEN {
                        return Err(WireError::MalformedName(format!(
                            "name exceeds {} octets",
                            MAX_NAME_WIRE_LEN
                        )));
                    }
                    labels.push(buf[start..end].into());
                    pos = end;
                }
                other => {
                    return Err(WireError::MalformedName(format!(
                        "reserved label type 0x{:02x} at offset {}",
                        other, pos
                    )));
                }
            }
        }
    }

    pub fn to_fqdn(&self) -> String {
        if self.is_root() {
            return ".".to_string();
        }
        format!("{}.", self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}
