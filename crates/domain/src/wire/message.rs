use super::{ensure_available, Header, Question, ResourceRecord, ResponseCode, HEADER_LEN};
use crate::errors::WireError;
use std::fmt;
use tracing::{debug, trace};

/// Root name plus type and class.
const MIN_QUESTION_LEN: usize = 5;
/// Root name plus the ten fixed record bytes.
const MIN_RECORD_LEN: usize = 11;

/// A full DNS message: header plus the four record sections.
///
/// Section counts in the header always equal the lengths of the lists; the
/// lists are private so the only way to grow them is through the methods that
/// keep the counts in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answers: Vec<ResourceRecord>,
    authority: Vec<ResourceRecord>,
    additional: Vec<ResourceRecord>,
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    /// An empty query with a random id and recursion desired.
    pub fn new() -> Self {
        Self::with_header(Header::query())
    }

    /// An empty message around `header`. Its counts are reset to zero.
    pub fn with_header(mut header: Header) -> Self {
        header.qd_count = 0;
        header.an_count = 0;
        header.ns_count = 0;
        header.ar_count = 0;
        Self {
            header,
            questions: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    pub fn authority(&self) -> &[ResourceRecord] {
        &self.authority
    }

    pub fn additional(&self) -> &[ResourceRecord] {
        &self.additional
    }

    pub fn add_question(&mut self, question: Question) -> Result<(), WireError> {
        self.header.qd_count = next_count(self.questions.len(), "question")?;
        self.questions.push(question);
        Ok(())
    }

    pub fn add_answer(&mut self, record: ResourceRecord) -> Result<(), WireError> {
        self.header.an_count = next_count(self.answers.len(), "answer")?;
        self.answers.push(record);
        Ok(())
    }

    pub fn add_authority(&mut self, record: ResourceRecord) -> Result<(), WireError> {
        self.header.ns_count = next_count(self.authority.len(), "authority")?;
        self.authority.push(record);
        Ok(())
    }

    pub fn add_additional(&mut self, record: ResourceRecord) -> Result<(), WireError> {
        self.header.ar_count = next_count(self.additional.len(), "additional")?;
        self.additional.push(record);
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.header.encode());
        for question in &self.questions {
            question.encode(&mut out);
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.encode(&mut out)?;
        }
        Ok(out)
    }

    /// Decodes a received message.
    ///
    /// Fails with [`WireError::Truncated`] as soon as the header carries the
    /// TC flag; the sections of a truncated datagram are never parsed.
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        let header = Header::decode(buf)?;
        if header.truncated {
            debug!(id = header.id, len = buf.len(), "Truncated response");
            return Err(WireError::Truncated);
        }

        let mut pos = HEADER_LEN;

        let mut questions =
            Vec::with_capacity(capacity_for(buf, pos, header.qd_count, MIN_QUESTION_LEN));
        for _ in 0..header.qd_count {
            ensure_available(buf, pos, 1)?;
            let (question, used) = Question::decode(buf, pos)?;
            questions.push(question);
            pos += used;
        }

        let answers = decode_records(buf, &mut pos, header.an_count)?;
        let authority = decode_records(buf, &mut pos, header.ns_count)?;
        let additional = decode_records(buf, &mut pos, header.ar_count)?;

        trace!(
            id = header.id,
            consumed = pos,
            len = buf.len(),
            "Message decoded"
        );

        Ok(Self {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Human-readable outcome of a response, keyed on its response code.
    pub fn render_summary(&self) -> String {
        let mut lines = Vec::new();
        match self.header.response_code {
            ResponseCode::NoError => {
                lines.push(format!(
                    "--- Answer is{} Authoritative ---",
                    if self.header.authoritative { "" } else { " not" }
                ));
                lines.extend(self.answers.iter().map(ToString::to_string));
            }
            ResponseCode::FormatError => lines.push("--- Format Error ---".to_string()),
            ResponseCode::ServerFailure => lines.push("--- Server Failure ---".to_string()),
            ResponseCode::NameError => {
                lines.push("--- Name Error ---".to_string());
                if self.header.authoritative {
                    lines.push("Hostname does not exist".to_string());
                }
            }
            ResponseCode::NotImplemented => {
                lines.push("--- Not Implemented (on DNS server) ---".to_string())
            }
            ResponseCode::Refused => lines.push("--- Refused (on DNS server) ---".to_string()),
            ResponseCode::Unknown(_) => lines.push("--- Unknown Error ---".to_string()),
        }
        lines.join("\n")
    }
}

fn next_count(current: usize, section: &'static str) -> Result<u16, WireError> {
    u16::try_from(current + 1).map_err(|_| WireError::TooManyRecords { section })
}

/// Header counts are sender-controlled; never reserve more entries than the
/// remaining bytes could hold.
fn capacity_for(buf: &[u8], pos: usize, count: u16, min_len: usize) -> usize {
    usize::from(count).min(buf.len().saturating_sub(pos) / min_len)
}

fn decode_records(
    buf: &[u8],
    pos: &mut usize,
    count: u16,
) -> Result<Vec<ResourceRecord>, WireError> {
    let mut records = Vec::with_capacity(capacity_for(buf, *pos, count, MIN_RECORD_LEN));
    for _ in 0..count {
        ensure_available(buf, *pos, 1)?;
        let (record, used) = ResourceRecord::decode(buf, *pos)?;
        records.push(record);
        *pos += used;
    }
    Ok(records)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        if !self.questions.is_empty() {
            write!(f, "\nQuestion:")?;
            for question in &self.questions {
                write!(f, "\n{}", question)?;
            }
        }
        for (heading, records) in [
            ("Answer:", &self.answers),
            ("Authority:", &self.authority),
            ("Additional:", &self.additional),
        ] {
            if records.is_empty() {
                continue;
            }
            write!(f, "\n{}", heading)?;
            for record in records {
                write!(f, "\n{}", record)?;
            }
        }
        Ok(())
    }
}
