use super::DnsRecord;
use tracing::debug;

/// Lines containing this character are `dig` comments and never carry a record.
pub const COMMENT_MARKER: char = ';';

const MIN_ANSWER_FIELDS: usize = 5;

/// Parses a single `NAME TTL CLASS TYPE DATA...` line.
///
/// Returns `None` for blank lines, comment lines, lines with fewer than five
/// fields and lines whose TTL is not a non-negative integer.
pub fn parse_answer_line(line: &str) -> Option<DnsRecord> {
    let line = line.trim();
    if line.is_empty() || line.contains(COMMENT_MARKER) {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_ANSWER_FIELDS {
        return None;
    }

    let ttl = match fields[1].parse::<u32>() {
        Ok(ttl) => ttl,
        Err(e) => {
            debug!(error = %e, ttl = fields[1], "Skipping answer line with invalid TTL");
            return None;
        }
    };

    // fields[2] is the class (IN, CH, ...), not kept
    Some(DnsRecord::new(
        fields[0],
        fields[3],
        ttl,
        fields[4..].join(" "),
    ))
}

/// Parses every record in `dig` answer output, preserving the order `dig` printed them.
pub fn parse_answer_section(output: &str) -> Vec<DnsRecord> {
    let records: Vec<DnsRecord> = output.lines().filter_map(parse_answer_line).collect();
    debug!(records = records.len(), "Answer section parsed");
    records
}
