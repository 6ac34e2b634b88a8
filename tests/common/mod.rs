//! Common test utilities for sycalc integration tests

#[allow(unused_imports)]
pub use sycalc::{calc, evaluate, lex, parse, render, CalcError, EvalError, ParseError, Token};

/// Helper to evaluate input and return the value, panicking on failure
#[allow(dead_code)]
pub fn eval(input: &str) -> f64 {
    calc(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
}

/// Helper to evaluate input that is expected to fail
#[allow(dead_code)]
pub fn eval_err(input: &str) -> CalcError {
    match calc(input) {
        Ok(value) => panic!("{input:?} should fail, got {value}"),
        Err(e) => e,
    }
}

/// Helper to get the postfix rendering of an infix expression
#[allow(dead_code)]
pub fn postfix(input: &str) -> String {
    let tokens = parse(lex(input)).unwrap_or_else(|e| panic!("{input:?} failed: {e}"));
    render(&tokens)
}
