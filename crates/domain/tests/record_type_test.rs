use ferrous_dig_domain::RecordType;
use std::str::FromStr;

#[test]
fn test_every_allowed_type_round_trips() {
    for rt in RecordType::ALL_TYPES {
        assert_eq!(RecordType::from_str(rt.as_str()), Ok(rt));
        assert_eq!(rt.to_string(), rt.as_str());
    }
}

#[test]
fn test_allow_list_size() {
    assert_eq!(RecordType::ALL_TYPES.len(), 34);
}

#[test]
fn test_allow_list_is_sorted() {
    let names: Vec<&str> = RecordType::ALL_TYPES.iter().map(|rt| rt.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_from_str_trims_and_uppercases() {
    assert_eq!(RecordType::from_str(" mx "), Ok(RecordType::MX));
    assert_eq!(RecordType::from_str("aaaa"), Ok(RecordType::AAAA));
    assert_eq!(RecordType::from_str("\tNsec3Param\n"), Ok(RecordType::NSEC3PARAM));
}

#[test]
fn test_from_str_accepts_less_common_types() {
    for name in ["ALL", "INTEGRITY", "KEY", "SIG", "SPF", "RP", "CERT", "WKS"] {
        assert!(RecordType::from_str(name).is_ok(), "{} should be allowed", name);
    }
}

#[test]
fn test_from_str_rejects_unknown_types() {
    for name in ["", "   ", "ANY", "OPT", "NULL", "A AAAA", "A;", "ZONEMD", "AXFR"] {
        assert!(
            RecordType::from_str(name).is_err(),
            "{:?} should be rejected",
            name
        );
    }
}

#[test]
fn test_from_str_error_names_the_type() {
    let err = RecordType::from_str(" bogus ").unwrap_err();
    assert_eq!(err, "Unsupported record type: bogus");
}
