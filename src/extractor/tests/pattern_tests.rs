//! Tests for node line matching and field parsing

use crate::extractor::pattern::{NodeFields, NodeLinePattern};

fn pattern() -> NodeLinePattern {
    NodeLinePattern::new().unwrap()
}

fn matches(line: &str) -> bool {
    pattern().captures(line).is_some()
}

#[test]
fn test_matches_scientific_notation_line() {
    let fields = pattern()
        .captures("  100   1.2345E-02   273.15   0.000")
        .unwrap();

    assert_eq!(
        fields,
        NodeFields {
            node: "100",
            fx: "1.2345E-02",
            t: "273.15",
            qi: "0.000",
        }
    );

    let record = fields.parse(1).unwrap();
    assert_eq!(record.node, Some(100));
    assert_eq!(record.fx, 0.012345);
    assert_eq!(record.t, 273.15);
    assert_eq!(record.qi, 0.0);
}

#[test]
fn test_matches_signed_integers() {
    let record = pattern()
        .captures("200   -5   10   0.5")
        .unwrap()
        .parse(1)
        .unwrap();

    assert_eq!(record.node, Some(200));
    assert_eq!(record.fx, -5.0);
    assert_eq!(record.t, 10.0);
    assert_eq!(record.qi, 0.5);
}

#[test]
fn test_explicit_plus_sign_and_lowercase_exponent() {
    let record = pattern()
        .captures("7 +1.5e+2 -2.0e-1 +3")
        .unwrap()
        .parse(1)
        .unwrap();

    assert_eq!(record.fx, 150.0);
    assert_eq!(record.t, -0.2);
    assert_eq!(record.qi, 3.0);
}

#[test]
fn test_tabs_are_whitespace() {
    assert!(matches("\t100\t1.0\t2.0\t3.0"));
}

#[test]
fn test_trailing_content_is_ignored() {
    let p = pattern();

    let fields = p.captures("100 1.0 2.0 3.0 4.0").unwrap();
    assert_eq!(fields.qi, "3.0");

    let fields = p.captures("100 1.0 2.0 3.0  W/m2").unwrap();
    assert_eq!(fields.t, "2.0");

    assert!(matches("100 1.0 2.0 3.0\r\n"));
}

#[test]
fn test_rejects_non_node_lines() {
    assert!(!matches("NODE  FX  T  QI"));
    assert!(!matches(""));
    assert!(!matches("   "));
    assert!(!matches("------------------------"));
    assert!(!matches("100 1.0 2.0"));
    assert!(!matches("-100 1.0 2.0 3.0"));
    assert!(!matches("1.5 1.0 2.0 3.0"));
    assert!(!matches("100 .5 2.0 3.0"));
    assert!(!matches("100 5. 2.0 3.0"));
    assert!(!matches("x 100 1.0 2.0 3.0"));
    assert!(!matches("100 abc 2.0 3.0"));
}

#[test]
fn test_non_ascii_digits_do_not_match() {
    // Arabic-Indic digits are Unicode \d but not parseable as f64
    assert!(!matches("100 \u{0661} 2.0 3.0"));
}

#[test]
fn test_oversized_node_parses_without_number() {
    let record = pattern()
        .captures("123456789012345678901234567890 1.0 2.0 3.0")
        .unwrap()
        .parse(42)
        .unwrap();

    assert_eq!(record.node, None);
    assert_eq!(record.fx, 1.0);
    assert_eq!(record.t, 2.0);
}

#[test]
fn test_leading_zero_node_parses() {
    let record = pattern()
        .captures("00099999 1.0 2.0 3.0")
        .unwrap()
        .parse(1)
        .unwrap();

    assert_eq!(record.node, Some(99999));
}
