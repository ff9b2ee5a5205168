use serde::{Deserialize, Serialize};

/// One answer-section line as printed by `dig +noall +answer`.
///
/// `record_type` is kept as the text `dig` printed rather than [`super::RecordType`]:
/// an `A` query may legitimately answer with `CNAME` lines, and `ALL` answers
/// carry whatever the zone holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: String,

    pub ttl: u32,

    pub data: String,
}

impl DnsRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            ttl,
            data: data.into(),
        }
    }
}
