use std::fmt;
use std::str::FromStr;

/// Record types `dig` may be asked for. Anything outside this set is rejected
/// before a process is ever spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    ALL,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    DNAME,
    DNSKEY,
    DS,
    HINFO,
    HTTPS,
    INTEGRITY,
    IPSECKEY,
    KEY,
    MX,
    NAPTR,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    PTR,
    RP,
    RRSIG,
    SIG,
    SOA,
    SPF,
    SRV,
    SSHFP,
    SVCB,
    TLSA,
    TXT,
    WKS,
}

impl RecordType {
    pub const ALL_TYPES: [RecordType; 34] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::ALL,
        RecordType::CAA,
        RecordType::CDNSKEY,
        RecordType::CDS,
        RecordType::CERT,
        RecordType::CNAME,
        RecordType::DNAME,
        RecordType::DNSKEY,
        RecordType::DS,
        RecordType::HINFO,
        RecordType::HTTPS,
        RecordType::INTEGRITY,
        RecordType::IPSECKEY,
        RecordType::KEY,
        RecordType::MX,
        RecordType::NAPTR,
        RecordType::NS,
        RecordType::NSEC,
        RecordType::NSEC3,
        RecordType::NSEC3PARAM,
        RecordType::PTR,
        RecordType::RP,
        RecordType::RRSIG,
        RecordType::SIG,
        RecordType::SOA,
        RecordType::SPF,
        RecordType::SRV,
        RecordType::SSHFP,
        RecordType::SVCB,
        RecordType::TLSA,
        RecordType::TXT,
        RecordType::WKS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::ALL => "ALL",
            RecordType::CAA => "CAA",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CDS => "CDS",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DS => "DS",
            RecordType::HINFO => "HINFO",
            RecordType::HTTPS => "HTTPS",
            RecordType::INTEGRITY => "INTEGRITY",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::KEY => "KEY",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::PTR => "PTR",
            RecordType::RP => "RP",
            RecordType::RRSIG => "RRSIG",
            RecordType::SIG => "SIG",
            RecordType::SOA => "SOA",
            RecordType::SPF => "SPF",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::SVCB => "SVCB",
            RecordType::TLSA => "TLSA",
            RecordType::TXT => "TXT",
            RecordType::WKS => "WKS",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL_TYPES
            .iter()
            .copied()
            .find(|rt| rt.as_str() == normalized)
            .ok_or_else(|| format!("Unsupported record type: {}", s.trim()))
    }
}
