//! sycalc - infix calculator
//!
//! Usage:
//!   sycalc                    Start interactive REPL
//!   sycalc "2 + 3 * 4"        Evaluate one expression
//!   sycalc --demo             Evaluate the built-in example

mod cli;
mod config;
mod logging;
mod repl;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};

use crate::cli::{execute_command, CliArgs};
use crate::config::Config;
use crate::logging::init_logging;
use crate::repl::run_repl;

/// Exit status for unusable configuration, matching clap's usage errors
const CONFIG_ERROR_STATUS: u8 = 2;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config.apply_overrides(args.log_level),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(CONFIG_ERROR_STATUS);
        }
    };
    init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), "starting sycalc");

    if let Some(expression) = args.expression() {
        return execute_command(&expression, args.postfix);
    }

    match run_repl(&config, args.postfix) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "REPL failed");
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
