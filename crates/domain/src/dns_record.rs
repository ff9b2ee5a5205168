mod answer;
mod record;
mod record_type;

pub use answer::{parse_answer_line, parse_answer_section, COMMENT_MARKER};
pub use record::DnsRecord;
pub use record_type::RecordType;
