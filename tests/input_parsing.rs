//! Tests for lookup input parsing and target classification.

use dns_lookup_bot::error_handling::LookupError;
use dns_lookup_bot::input::{self, classify, InlineRequest, Target, TargetKind};

#[test]
fn test_valid_domains() {
    for domain in [
        "example.com",
        "sub.example.co.uk",
        "xn--80ak6aa92e.com",
        "a-b.c-d.io",
        "EXAMPLE.ORG",
        "123.example.net",
    ] {
        assert_eq!(classify(domain), TargetKind::Domain, "{domain}");
    }
}

#[test]
fn test_invalid_domains() {
    for target in [
        "localhost",
        "example.c",
        "example.123",
        "under_score.com",
        "example..com",
        ".example.com",
        "example.com.",
        "exa mple.com",
        "bücher.de",
        "",
    ] {
        assert_eq!(classify(target), TargetKind::Invalid, "{target:?}");
    }
}

#[test]
fn test_ip_literals() {
    for ip in ["8.8.8.8", "0.0.0.0", "2001:4860:4860::8888", "::1"] {
        assert_eq!(classify(ip), TargetKind::IpLiteral, "{ip}");
    }
    // Malformed addresses fall through to the domain grammar and fail there
    for not_ip in ["256.1.1.1", "1.2.3", "8.8.8.8.8"] {
        assert_eq!(classify(not_ip), TargetKind::Invalid, "{not_ip}");
    }
}

#[test]
fn test_ip_checked_before_domain() {
    match Target::parse("1.1.1.1") {
        Ok(Target::IpLiteral(ip)) => assert_eq!(ip.to_string(), "1.1.1.1"),
        other => panic!("expected IP literal, got {other:?}"),
    }
}

#[test]
fn test_message_parse_shapes() {
    let one = input::parse("example.com").unwrap();
    assert_eq!(one.resolver_name, "Default");
    assert_eq!(one.target, "example.com");

    let two = input::parse("  Google   example.com ").unwrap();
    assert_eq!(two.resolver_name, "Google");
    assert_eq!(two.target, "example.com");

    let extra = input::parse("Google example.com trailing words").unwrap();
    assert_eq!(extra.target, "example.com");

    assert!(matches!(input::parse(""), Err(LookupError::Usage)));
    assert!(matches!(input::parse(" \t "), Err(LookupError::Usage)));
}

#[test]
fn test_resolver_names_are_case_sensitive_tokens() {
    let parsed = input::parse("google example.com").unwrap();
    assert_eq!(parsed.resolver_name, "google");
}

#[test]
fn test_inline_parse_shapes() {
    match input::parse_inline("lookup 8.8.8.8").unwrap() {
        InlineRequest::Reverse { target } => assert_eq!(target, "8.8.8.8"),
        other => panic!("unexpected: {other:?}"),
    }
    match input::parse_inline("Quad9 example.com").unwrap() {
        InlineRequest::Lookup(parsed) => {
            assert_eq!(parsed.resolver_name, "Quad9");
            assert_eq!(parsed.target, "example.com");
        }
        other => panic!("unexpected: {other:?}"),
    }
    match input::parse_inline("example.com").unwrap() {
        InlineRequest::Lookup(parsed) => assert_eq!(parsed.resolver_name, "Default"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(input::parse_inline("   "), Err(LookupError::Usage)));
    assert!(matches!(input::parse_inline("lookup"), Err(LookupError::Usage)));
}

#[test]
fn test_inline_remainder_kept_whole() {
    // The remainder is not re-split, so the extra word makes the target invalid
    match input::parse_inline("Google example.com extra").unwrap() {
        InlineRequest::Lookup(parsed) => {
            assert_eq!(parsed.target, "example.com extra");
            assert!(parsed.classify_target().is_err());
        }
        other => panic!("unexpected: {other:?}"),
    }
}
