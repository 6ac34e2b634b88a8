//! Tokenization for sycalc
//!
//! Splits an infix expression into tokens. Lexing never fails: text that is
//! neither a number nor a symbol is kept as a `Word` and rejected later by
//! the parser, which knows enough context to report it.

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while},
    character::complete::one_of,
    combinator::{map, map_opt},
    multi::many0,
    sequence::preceded,
    IResult,
};
use std::fmt;

/// Characters that always form a token of their own
const SYMBOLS: &str = "+-*/()";

/// Characters that end accumulated text (symbols plus the space separator)
const DELIMITERS: &str = " +-*/()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter. Every operator is
    /// left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, parsed once at lex time
    Number(f64),
    /// One of `+ - * /`
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Any other run of text (`abc`, `@`, `1.2.3`)
    Word(String),
}

impl Token {
    /// Classify accumulated text as a number or a word.
    /// Literals too large for `f64` (`1e400`) are words; only an explicit
    /// `inf`/`infinity` spelling yields an infinite number.
    pub fn classify(text: &str) -> Token {
        match text.parse::<f64>() {
            Ok(value) if value.is_infinite() && !is_infinity_spelling(text) => {
                Token::Word(text.to_string())
            }
            Ok(value) => Token::Number(value),
            Err(_) => Token::Word(text.to_string()),
        }
    }

    /// Map a single-character symbol to its token
    pub fn from_symbol(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => Operator::from_symbol(c).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Word(s) => write!(f, "{}", s),
        }
    }
}

fn is_infinity_spelling(text: &str) -> bool {
    text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("infinity")
}

/// Skip the space separator. Only `' '` separates; tabs are ordinary text.
fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c == ' ')(input)
}

/// Parse a single-character symbol: + - * / ( )
fn symbol(input: &str) -> IResult<&str, Token> {
    map_opt(one_of(SYMBOLS), Token::from_symbol)(input)
}

/// Parse a run of text up to the next delimiter (number or word)
fn text(input: &str) -> IResult<&str, Token> {
    map(is_not(DELIMITERS), Token::classify)(input)
}

/// Parse any single token
fn token(input: &str) -> IResult<&str, Token> {
    preceded(separator, alt((symbol, text)))(input)
}

/// Tokenize a complete input string
pub fn lex(input: &str) -> Vec<Token> {
    match many0(token)(input) {
        Ok((_, tokens)) => tokens,
        // `token` either consumes at least one character or fails softly
        // with `Err::Error` once only spaces remain, which many0 treats as
        // the end of the sequence. It never returns `Failure`/`Incomplete`.
        Err(e) => unreachable!("lexing cannot fail: {e:?}"),
    }
}

/// Render tokens as text, separated by single spaces
pub fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
