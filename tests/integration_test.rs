//! Integration tests for cidr-sort
//!
//! These tests verify the complete workflow from text (or file) to rendered output.

use cidr_sort::config::{Input, Settings};
use cidr_sort::processing::{process, PrefixPolicy};
use cidr_sort::sources::{ranges_to_text, read_text};
use cidr_sort::{run, sort_text, Family, OutputFormat, Summary};
use std::path::PathBuf;

#[test]
fn test_mixed_text_one_per_line() {
    let text = "192.168.1.5, 10.0.0.0/24 and ::1 plus garbage-text-999";
    let p = process(text, OutputFormat::OnePerLine, PrefixPolicy::Lenient);
    assert_eq!(p.rendered, "10.0.0.0/24\n192.168.1.5/32\n::1/128\n");
    assert_eq!(p.rendered.lines().count(), 3);
    assert_eq!(p.summary, Summary { total: 3, v4: 2, v6: 1 });
}

#[test]
fn test_space_delimited_v4_first() {
    assert_eq!(
        sort_text("2001:db8::1 10.0.0.1", OutputFormat::SpaceDelimited),
        "10.0.0.1/32 2001:db8::1/128"
    );
}

#[test]
fn test_f5_single_network() {
    assert_eq!(
        sort_text("172.16.0.0/12", OutputFormat::F5BigIp),
        "network 172.16.0.0/12,\n"
    );
}

#[test]
fn test_empty_and_invalid_inputs() {
    for text in ["", "   \n\t ", "999.999.999.999"] {
        for format in OutputFormat::ALL {
            let p = process(text, format, PrefixPolicy::Lenient);
            assert_eq!(p.rendered, "", "input {text:?} format {format}");
            assert_eq!(p.summary.total, 0);
            assert!(p.records.is_empty());
            assert!(p.spans.is_empty());
        }
    }
}

#[test]
fn test_garbage_and_large_input() {
    let garbage: String = (0u32..20_000)
        .map(|i| char::from_u32((i * 7919) % 0x2FF + 1).unwrap_or('?'))
        .collect();
    let p = process(&garbage, OutputFormat::NginxAllow, PrefixPolicy::Lenient);
    let joined: String = p.segments.iter().map(|s| &garbage[s.span.range()]).collect();
    assert_eq!(joined, garbage);

    let line = "deny 10.1.2.3; allow 2001:db8::/32 # host 192.0.2.1.\n";
    let big = line.repeat(50_000);
    let p = process(&big, OutputFormat::OnePerLine, PrefixPolicy::Lenient);
    assert_eq!(p.summary, Summary { total: 150_000, v4: 100_000, v6: 50_000 });
}

#[test]
fn test_idempotent() {
    let text = "10.0.0.2 ::ffff:1.2.3.4 10.0.0.1/8 fe80::/10 10.0.0.1";
    for format in OutputFormat::ALL {
        let first = process(text, format, PrefixPolicy::Lenient);
        let second = process(text, format, PrefixPolicy::Lenient);
        assert_eq!(first, second);
    }
}

#[test]
fn test_order_invariants() {
    let text = "fe80::1 10.0.0.2 10.0.0.0/24 ::1 10.0.0.1 10.0.0.0/8 8.8.8.8";
    let p = process(text, OutputFormat::OnePerLine, PrefixPolicy::Lenient);
    let first_v6 = p
        .records
        .iter()
        .position(|r| r.family() == Family::V6)
        .unwrap();
    assert!(p.records[..first_v6].iter().all(|r| r.family() == Family::V4));
    assert!(p.records[first_v6..].iter().all(|r| r.family() == Family::V6));
    assert!(p.records.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(
        p.rendered,
        "8.8.8.8/32\n10.0.0.0/8\n10.0.0.0/24\n10.0.0.1/32\n10.0.0.2/32\n::1/128\nfe80::1/128\n"
    );
}

#[test]
fn test_sample_file() {
    let text = read_text(&PathBuf::from("src/tests/test_data/sample_input.txt"))
        .expect("Failed to read sample input");
    let p = process(&text, OutputFormat::ApacheRequire, PrefixPolicy::Lenient);
    assert_eq!(
        p.rendered,
        "Require ip 10.0.0.0/8\n\
         Require ip 10.0.0.0/24\n\
         Require ip 10.0.0.5/32\n\
         Require ip 10.0.0.40/32\n\
         Require ip 192.168.1.0/24\n\
         Require ip ::1/128\n\
         Require ip 2001:db8:10::/48\n"
    );
    assert_eq!(p.summary, Summary { total: 7, v4: 5, v6: 2 });
}

#[test]
fn test_cloudflare_fixture_through_pipeline() {
    let body = std::fs::read_to_string("src/tests/test_data/cloudflare_ips.json")
        .expect("Failed to read fixture");
    let text = ranges_to_text("fixture", &body).expect("Failed to parse fixture");
    let p = process(&text, OutputFormat::NginxAllow, PrefixPolicy::Strict);
    assert_eq!(p.summary, Summary { total: 22, v4: 15, v6: 7 });
    let lines: Vec<&str> = p.rendered.lines().collect();
    assert_eq!(lines[0], "allow 103.21.244.0/22;");
    assert_eq!(lines[14], "allow 198.41.128.0/17;");
    assert_eq!(lines[15], "allow 2400:cb00::/32;");
    assert_eq!(lines[21], "allow 2c0f:f248::/32;");
}

#[tokio::test]
async fn test_run_file_to_file() {
    let output = std::env::temp_dir().join(format!("cidr_sort_it_{}.txt", std::process::id()));
    let settings = Settings {
        input: Input::File(PathBuf::from("src/tests/test_data/sample_input.txt")),
        output: Some(output.clone()),
        format: OutputFormat::SpaceDelimited,
        ..Default::default()
    };
    let outcome = run(&settings).await.expect("Run failed");
    assert!(outcome.text.contains("Firewall change request"));
    let written = std::fs::read_to_string(&output).expect("Output not written");
    assert_eq!(written, outcome.processed.rendered);
    assert!(written.starts_with("10.0.0.0/8 10.0.0.0/24 "));
    std::fs::remove_file(&output).ok();
}

#[tokio::test]
async fn test_run_missing_file() {
    let settings = Settings {
        input: Input::File(PathBuf::from("src/tests/test_data/missing.txt")),
        ..Default::default()
    };
    let err = run(&settings).await.unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}
