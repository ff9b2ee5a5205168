use ferrous_dig_domain::{parse_answer_line, parse_answer_section, DnsRecord};

#[test]
fn test_parse_two_records_skipping_comment() {
    let output = "example.com.\t\t300\tIN\tA\t93.184.216.34\n\
; comment line\n\
example.com.\t\t300\tIN\tA\t93.184.216.35\n";

    let records = parse_answer_section(output);

    assert_eq!(
        records,
        vec![
            DnsRecord::new("example.com.", "A", 300, "93.184.216.34"),
            DnsRecord::new("example.com.", "A", 300, "93.184.216.35"),
        ]
    );
}

#[test]
fn test_parse_empty_output() {
    assert!(parse_answer_section("").is_empty());
    assert!(parse_answer_section("\n\n   \n").is_empty());
}

#[test]
fn test_parse_comment_only_output() {
    let output = "; <<>> DiG 9.18.24 <<>> @8.8.8.8 nxdomain.example A +noall +answer\n\
;; global options: +cmd\n";
    assert!(parse_answer_section(output).is_empty());
}

#[test]
fn test_parse_joins_multi_field_data() {
    let output = "example.com.\t3600\tIN\tMX\t10 mail.example.com.\n\
example.com.\t3600\tIN\tSOA\tns.icann.org. noc.dns.icann.org. 2024081466 7200 3600 1209600 3600\n";

    let records = parse_answer_section(output);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].record_type, "MX");
    assert_eq!(records[0].data, "10 mail.example.com.");
    assert_eq!(records[1].record_type, "SOA");
    assert_eq!(
        records[1].data,
        "ns.icann.org. noc.dns.icann.org. 2024081466 7200 3600 1209600 3600"
    );
}

#[test]
fn test_parse_collapses_whitespace_runs_in_data() {
    let record = parse_answer_line("example.com. 300 IN TXT \"hello    world\"").unwrap();
    assert_eq!(record.data, "\"hello world\"");
}

#[test]
fn test_parse_keeps_cname_chain_order() {
    let output = "www.example.com. 60 IN CNAME edge.example.net.\n\
edge.example.net. 20 IN A 192.0.2.10\n";

    let records = parse_answer_section(output);

    assert_eq!(records[0].record_type, "CNAME");
    assert_eq!(records[0].ttl, 60);
    assert_eq!(records[1].name, "edge.example.net.");
    assert_eq!(records[1].ttl, 20);
}

#[test]
fn test_parse_skips_short_lines() {
    assert!(parse_answer_line("example.com. 300 IN A").is_none());
    assert!(parse_answer_line("just words").is_none());
}

#[test]
fn test_parse_skips_any_line_containing_comment_marker() {
    assert!(parse_answer_line("example.com. 300 IN TXT \"v=DKIM1; k=rsa\"").is_none());
}

#[test]
fn test_parse_skips_invalid_ttl() {
    assert!(parse_answer_line("example.com. -5 IN A 192.0.2.1").is_none());
    assert!(parse_answer_line("example.com. IN 300 A 192.0.2.1").is_none());
}

#[test]
fn test_parse_zero_ttl() {
    let record = parse_answer_line("example.com. 0 IN A 192.0.2.1").unwrap();
    assert_eq!(record.ttl, 0);
}

#[test]
fn test_parse_handles_crlf() {
    let records = parse_answer_section("example.com. 300 IN A 192.0.2.1\r\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data, "192.0.2.1");
}
