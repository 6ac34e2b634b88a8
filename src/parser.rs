//! Parser for sycalc
//!
//! Converts infix tokens into postfix (reverse Polish) order with the
//! shunting-yard algorithm. The output contains only `Number` and
//! `Operator` tokens; parentheses are consumed here and words are rejected.

use crate::lexer::{Operator, Token};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("invalid character: {0}")]
    InvalidCharacter(String),
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    LeftParen,
    Operator(Operator),
}

/// Converter state
pub struct Parser {
    output: Vec<Token>,
    operators: Vec<Pending>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            output: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Convert the whole token sequence into postfix order
    pub fn parse(mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        for token in tokens {
            self.push_token(token)?;
        }
        self.finish()
    }

    fn push_token(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Number(_) => self.output.push(token),
            Token::LeftParen => self.operators.push(Pending::LeftParen),
            Token::RightParen => self.close_group()?,
            Token::Operator(op) => self.push_operator(op),
            Token::Word(text) => return Err(ParseError::InvalidCharacter(text)),
        }
        Ok(())
    }

    /// Pop operators up to the matching `(`, which is discarded
    fn close_group(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.pop() {
                Some(Pending::LeftParen) => return Ok(()),
                Some(Pending::Operator(op)) => self.output.push(Token::Operator(op)),
                None => return Err(ParseError::MismatchedParentheses),
            }
        }
    }

    /// Pop every stacked operator that binds at least as tightly, then push.
    /// Popping on equal precedence makes operators left-associative.
    fn push_operator(&mut self, op: Operator) {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.output.push(Token::Operator(top));
        }
        self.operators.push(Pending::Operator(op));
    }

    /// Drain the operator stack; any `(` left over was never closed
    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(Token::Operator(op)),
                Pending::LeftParen => return Err(ParseError::MismatchedParentheses),
            }
        }
        Ok(self.output)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse infix tokens into postfix order
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    Parser::new().parse(tokens)
}
