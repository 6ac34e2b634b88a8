use clap::Parser;
use std::process::ExitCode;
use sycalc::{evaluate, lex, parse, render, CalcError};
use tracing::debug;

use crate::config::LogLevel;

/// Expression evaluated by `--demo`
pub(crate) const DEMO_EXPRESSION: &str = "2 + 3 * 7 - 4 / (2 + 2)";

/// Evaluate infix arithmetic expressions.
///
/// With no expression, starts an interactive session.
#[derive(Parser, Debug)]
#[command(name = "sycalc", version, about)]
pub(crate) struct CliArgs {
    /// Expression to evaluate; separate words are joined with spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub(crate) expression: Vec<String>,

    /// Evaluate the built-in demonstration expression
    #[arg(long, conflicts_with = "expression")]
    pub(crate) demo: bool,

    /// Print the postfix form before the result
    #[arg(short, long)]
    pub(crate) postfix: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub(crate) log_level: Option<LogLevel>,
}

impl CliArgs {
    /// The one-shot expression, if any was requested
    pub(crate) fn expression(&self) -> Option<String> {
        if self.demo {
            Some(DEMO_EXPRESSION.to_string())
        } else if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }
}

/// Evaluate a single line, optionally printing its postfix form first
pub(crate) fn execute_line(input: &str, show_postfix: bool) -> Result<f64, CalcError> {
    debug!(input, "evaluating");
    let postfix = parse(lex(input))?;
    let rendered = render(&postfix);
    debug!(postfix = %rendered, "converted");
    if show_postfix {
        println!("Postfix: {}", rendered);
    }
    let value = evaluate(&postfix)?;
    debug!(value, "evaluated");
    Ok(value)
}

/// Print an outcome the way every front end reports it
pub(crate) fn report(outcome: &Result<f64, CalcError>) {
    match outcome {
        Ok(value) => println!("Result: {}", value),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Evaluate one expression and turn the outcome into an exit status
pub(crate) fn execute_command(input: &str, show_postfix: bool) -> ExitCode {
    let outcome = execute_line(input, show_postfix);
    report(&outcome);
    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
