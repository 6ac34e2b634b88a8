//! sycalc - infix arithmetic evaluation
//!
//! # Overview
//!
//! sycalc evaluates arithmetic expressions written in ordinary infix
//! notation. Evaluation is a strict three-stage pipeline, and each stage is
//! usable on its own:
//!
//! ```text
//! lex       "2 + 3 * 7"     -> [2, +, 3, *, 7]
//! parse     [2, +, 3, *, 7] -> [2, 3, 7, *, +]   (shunting-yard)
//! evaluate  [2, 3, 7, *, +] -> 23
//! ```
//!
//! Supported syntax is deliberately small: non-negative decimal numbers,
//! the binary operators `+ - * /` (`*` and `/` bind tighter, all group left
//! to right) and parentheses. Spaces are optional.
//!
//! # Example
//!
//! ```rust
//! use sycalc::{calc, CalcError, EvalError, ParseError};
//!
//! assert_eq!(calc("2 + 3 * 7 - 4 / (2 + 2)").unwrap(), 22.0);
//! assert!(matches!(
//!     calc("(1 + 2"),
//!     Err(CalcError::Parse(ParseError::MismatchedParentheses))
//! ));
//! assert!(matches!(
//!     calc("5 / 0"),
//!     Err(CalcError::Eval(EvalError::DivisionByZero))
//! ));
//! ```

pub mod eval;
pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use eval::{evaluate, EvalError};
pub use lexer::{lex, render, Operator, Token};
pub use parser::{parse, ParseError};

use thiserror::Error;

/// Any failure of the full pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Evaluate an infix expression
pub fn calc(input: &str) -> Result<f64, CalcError> {
    let postfix = parse(lex(input))?;
    Ok(evaluate(&postfix)?)
}

/// Convert an infix expression to postfix text, e.g. `"1 + 2"` -> `"1 2 +"`
pub fn to_postfix_string(input: &str) -> Result<String, CalcError> {
    let postfix = parse(lex(input))?;
    Ok(render(&postfix))
}
