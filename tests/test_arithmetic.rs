//! Integration tests for arithmetic evaluation

#[path = "common/mod.rs"]
mod common;
use common::eval;

#[test]
fn test_plus() {
    assert_eq!(eval("5 + 3"), 8.0);
}

#[test]
fn test_minus() {
    assert_eq!(eval("10 - 3"), 7.0);
}

#[test]
fn test_minus_below_zero() {
    assert_eq!(eval("3 - 10"), -7.0);
}

#[test]
fn test_mul() {
    assert_eq!(eval("4 * 5"), 20.0);
}

#[test]
fn test_div() {
    assert_eq!(eval("10 / 2"), 5.0);
    // Non-integer division
    assert_eq!(eval("10 / 4"), 2.5);
}

#[test]
fn test_single_number() {
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("  42  "), 42.0);
}

#[test]
fn test_decimals() {
    assert_eq!(eval("0.5 + .25"), 0.75);
    assert_eq!(eval("1.5 * 4"), 6.0);
}

#[test]
fn test_exponent_notation_literal() {
    assert_eq!(eval("1e3 / 8"), 125.0);
}

#[test]
fn test_documented_example() {
    // 2 + 21 - 1
    assert_eq!(eval("2 + 3 * 7 - 4 / (2 + 2)"), 22.0);
}

#[test]
fn test_mul_binds_tighter() {
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("2 * 3 + 4"), 10.0);
    assert_eq!(eval("20 - 6 / 3"), 18.0);
}

#[test]
fn test_left_to_right_among_equals() {
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("64 / 4 / 2"), 8.0);
    assert_eq!(eval("8 / 2 * 4"), 16.0);
    assert_eq!(eval("1 - 2 + 3"), 2.0);
}

#[test]
fn test_parentheses_override() {
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("10 - (4 - 3)"), 9.0);
    assert_eq!(eval("64 / (4 / 2)"), 32.0);
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(eval("((2))"), 2.0);
    assert_eq!(eval("((1 + 2) * (3 + 4)) / 7"), 3.0);
}

#[test]
fn test_matches_native_float_arithmetic() {
    let cases: [(&str, f64); 6] = [
        ("0.1 + 0.2", 0.1 + 0.2),
        ("1 / 3 * 3", 1.0 / 3.0 * 3.0),
        ("1.5 + 2.25 * 4 - 9 / 3", 1.5 + 2.25 * 4.0 - 9.0 / 3.0),
        ("7 / 2 / 2 - 0.3", 7.0 / 2.0 / 2.0 - 0.3),
        ("(0.7 - 0.1) * (3 + 0.5) / 1.1", (0.7 - 0.1) * (3.0 + 0.5) / 1.1),
        ("100 - 99.99 - 0.01", 100.0 - 99.99 - 0.01),
    ];
    for (input, expected) in cases {
        assert_eq!(eval(input), expected, "input: {input}");
    }
}

#[test]
fn test_whitespace_insensitive() {
    assert_eq!(eval("1+2"), eval("1 + 2"));
    assert_eq!(eval("2+3*7-4/(2+2)"), eval("2 + 3 * 7 - 4 / (2 + 2)"));
    assert_eq!(eval("   (  1+2 )*3   "), 9.0);
}
