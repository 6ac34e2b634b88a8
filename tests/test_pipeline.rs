//! Integration tests for the individual pipeline stages

#[path = "common/mod.rs"]
mod common;
use common::{evaluate, lex, parse, postfix, render, EvalError, Token};
use std::thread;

const SAMPLES: [&str; 8] = [
    "2 + 3 * 7 - 4 / (2 + 2)",
    "1+2",
    "((1.25))*8",
    "3 @ 4",
    "1.2.3 - abc",
    "(1 + 2",
    ")(",
    "π * 2",
];

#[test]
fn test_postfix_conversion() {
    assert_eq!(postfix("2 + 3 * 7 - 4 / (2 + 2)"), "2 3 7 * + 4 2 2 + / -");
    assert_eq!(postfix("(1 + 2) * 3"), "1 2 + 3 *");
    assert_eq!(postfix("1 - 2 - 3"), "1 2 - 3 -");
}

#[test]
fn test_to_postfix_string() {
    assert_eq!(sycalc::to_postfix_string("1+2*3").unwrap(), "1 2 3 * +");
    assert!(sycalc::to_postfix_string("(1").is_err());
}

#[test]
fn test_relex_rendered_tokens() {
    for input in SAMPLES {
        let tokens = lex(input);
        assert_eq!(lex(&render(&tokens)), tokens, "input: {input}");
    }
}

#[test]
fn test_lex_preserves_order() {
    assert_eq!(
        lex("(9)"),
        vec![Token::LeftParen, Token::Number(9.0), Token::RightParen]
    );
}

#[test]
fn test_postfix_contains_no_parens() {
    let tokens = parse(lex("((1 + 2) * (3 - (4 / 5)))")).unwrap();
    assert!(tokens
        .iter()
        .all(|t| matches!(t, Token::Number(_) | Token::Operator(_))));
}

#[test]
fn test_evaluate_hand_built_sequence() {
    let tokens = lex("6 3 /");
    assert_eq!(evaluate(&tokens), Ok(2.0));
}

#[test]
fn test_evaluate_rejects_infix_parens() {
    assert_eq!(
        evaluate(&lex("( 1")),
        Err(EvalError::UnknownToken("(".to_string()))
    );
}

#[test]
fn test_concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8)
        .map(|n| {
            thread::spawn(move || {
                let input = format!("{n} * ({n} + 1) / 2");
                sycalc::calc(&input)
            })
        })
        .collect();

    for (n, handle) in (1..=8).zip(handles) {
        let expected = f64::from(n * (n + 1) / 2);
        assert_eq!(handle.join().unwrap(), Ok(expected));
    }
}
