//! Evaluator for sycalc - postfix evaluation over a value stack
//!
//! Walks a postfix sequence left to right:
//! - Numbers push themselves to the stack
//! - Operators pop their right operand, then their left, and push the result
//! - Anything else is rejected
//!
//! A well-formed sequence leaves exactly one value, which is the result.

mod math;
mod stack;

use crate::lexer::Token;
use stack::ValueStack;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Too few operands for an operator, or not exactly one value at the end
    #[error("invalid expression")]
    InvalidExpression,
    #[error("division by zero")]
    DivisionByZero,
    /// A token that is neither a number nor an operator
    #[error("invalid token: {0}")]
    UnknownToken(String),
}

/// Evaluate a postfix token sequence
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack = ValueStack::new();

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Operator(op) => {
                let (a, b) = stack.pop_operands()?;
                stack.push(op.apply(a, b)?);
            }
            Token::LeftParen | Token::RightParen | Token::Word(_) => {
                return Err(EvalError::UnknownToken(token.to_string()));
            }
        }
    }

    stack.into_result()
}
