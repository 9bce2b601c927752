// Input module tests.

use super::*;

#[test]
fn test_parse_empty_is_usage_error() {
    assert_eq!(parse(""), Err(LookupError::Usage));
    assert_eq!(parse("   \t  "), Err(LookupError::Usage));
}

#[test]
fn test_parse_single_token_uses_default_resolver() {
    for input in ["example.com", "8.8.8.8", "garbage", "  padded.org  "] {
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.resolver_name, "Default", "input: {input:?}");
        assert_eq!(parsed.target, input.trim());
    }
}

#[test]
fn test_parse_two_tokens_independent_of_resolver_validity() {
    let parsed = parse("Cloudflare example.com").unwrap();
    assert_eq!(
        parsed,
        ParsedInput {
            resolver_name: "Cloudflare".into(),
            target: "example.com".into()
        }
    );

    let parsed = parse("Nope example.com").unwrap();
    assert_eq!(parsed.resolver_name, "Nope");
    assert_eq!(parsed.target, "example.com");
}

#[test]
fn test_parse_extra_tokens_ignored() {
    let parsed = parse("Google example.com trailing words").unwrap();
    assert_eq!(parsed.resolver_name, "Google");
    assert_eq!(parsed.target, "example.com");
}

#[test]
fn test_parse_collapses_repeated_whitespace() {
    let parsed = parse("Google \t  example.com").unwrap();
    assert_eq!(parsed.resolver_name, "Google");
    assert_eq!(parsed.target, "example.com");
}

#[test]
fn test_classify_ip_literals() {
    assert_eq!(classify("8.8.8.8"), TargetKind::IpLiteral);
    assert_eq!(classify("2001:4860:4860::8888"), TargetKind::IpLiteral);
    assert_eq!(classify("::1"), TargetKind::IpLiteral);
}

#[test]
fn test_classify_domains() {
    assert_eq!(classify("example.com"), TargetKind::Domain);
    assert_eq!(classify("sub-domain.example.co.uk"), TargetKind::Domain);
    assert_eq!(classify("a.bc"), TargetKind::Domain);
    assert_eq!(classify("EXAMPLE.COM"), TargetKind::Domain);
}

#[test]
fn test_classify_invalid() {
    assert_eq!(classify("not a domain"), TargetKind::Invalid);
    assert_eq!(classify("a.b"), TargetKind::Invalid);
    assert_eq!(classify("localhost"), TargetKind::Invalid);
    assert_eq!(classify("example.c0m"), TargetKind::Invalid);
    assert_eq!(classify("example..com"), TargetKind::Invalid);
    assert_eq!(classify(".com"), TargetKind::Invalid);
    assert_eq!(classify("bücher.de"), TargetKind::Invalid);
    assert_eq!(classify(""), TargetKind::Invalid);
}

#[test]
fn test_classify_malformed_ip_is_not_domain() {
    // Fails the strict IP parse and the final label is numeric
    assert_eq!(classify("256.1.1.1"), TargetKind::Invalid);
    assert_eq!(classify("1.2.3"), TargetKind::Invalid);
}

#[test]
fn test_target_parse_payloads() {
    assert_eq!(
        Target::parse("8.8.8.8"),
        Ok(Target::IpLiteral("8.8.8.8".parse().unwrap()))
    );
    assert_eq!(
        Target::parse("example.com"),
        Ok(Target::Domain("example.com".into()))
    );
    assert_eq!(
        Target::parse("nope"),
        Err(LookupError::InvalidFormat {
            target: "nope".into()
        })
    );
}

#[test]
fn test_target_display() {
    assert_eq!(Target::Domain("example.com".into()).to_string(), "example.com");
    assert_eq!(
        Target::IpLiteral("1.1.1.1".parse().unwrap()).to_string(),
        "1.1.1.1"
    );
}

#[test]
fn test_parse_inline_blank_is_usage() {
    assert_eq!(parse_inline(""), Err(LookupError::Usage));
    assert_eq!(parse_inline("   "), Err(LookupError::Usage));
}

#[test]
fn test_parse_inline_single_part() {
    assert_eq!(
        parse_inline("example.com"),
        Ok(InlineRequest::Lookup(ParsedInput {
            resolver_name: "Default".into(),
            target: "example.com".into()
        }))
    );
}

#[test]
fn test_parse_inline_two_parts_keeps_remainder() {
    assert_eq!(
        parse_inline("Google example.com"),
        Ok(InlineRequest::Lookup(ParsedInput {
            resolver_name: "Google".into(),
            target: "example.com".into()
        }))
    );
    // Remainder is not split further
    let request = parse_inline("Google two words").unwrap();
    match request {
        InlineRequest::Lookup(parsed) => {
            assert_eq!(parsed.target, "two words");
            assert_eq!(classify(&parsed.target), TargetKind::Invalid);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}

#[test]
fn test_parse_inline_reverse_keyword() {
    assert_eq!(
        parse_inline("lookup 8.8.8.8"),
        Ok(InlineRequest::Reverse {
            target: "8.8.8.8".into()
        })
    );
    assert_eq!(parse_inline("lookup"), Err(LookupError::Usage));
    assert_eq!(parse_inline("lookup   "), Err(LookupError::Usage));
}

#[test]
fn test_is_valid_domain() {
    assert!(is_valid_domain("example.com"));
    assert!(!is_valid_domain("8.8.8.8"));
}
