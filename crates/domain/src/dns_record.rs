mod record_type;

pub use record_type::{parse_query_type, RecordType};
