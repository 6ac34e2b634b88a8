use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::{debug, info, warn};

use crate::cli::{execute_line, report};
use crate::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "sycalc> ";

/// What a single REPL line asks for
#[derive(Debug, PartialEq)]
pub(crate) enum ReplCommand<'a> {
    Blank,
    Exit,
    Help,
    /// `.postfix <expr>`: show the conversion only
    Postfix(&'a str),
    Evaluate(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Commands are recognised on the trimmed line; expressions are passed
    /// on untouched.
    pub(crate) fn from_line(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "" => ReplCommand::Blank,
            "exit" | "quit" => ReplCommand::Exit,
            ".help" => ReplCommand::Help,
            ".postfix" => ReplCommand::Postfix(""),
            _ => match trimmed.strip_prefix(".postfix ") {
                Some(rest) => ReplCommand::Postfix(rest),
                None => ReplCommand::Evaluate(line),
            },
        }
    }
}

pub(crate) fn print_help() {
    println!(
        r#"sycalc {} - infix calculator

SYNTAX:
    numbers                 42  3.5  .25  1e3
    operators               + - * /   (* and / bind tighter, left to right)
    grouping                ( )
    spaces                  optional: 1+2 is 1 + 2

COMMANDS:
    .postfix <expr>         Show the postfix (RPN) form of <expr>
    .help                   Show this help
    exit, quit, Ctrl-D      Leave the session"#,
        VERSION
    );
}

/// Run the interactive session until Ctrl-D or `exit`
pub(crate) fn run_repl(config: &Config, show_postfix: bool) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    if let Some(path) = &config.history_path {
        // A missing history file is normal on first run
        if let Err(e) = rl.load_history(path) {
            debug!(error = %e, path = %path.display(), "no history loaded");
        }
    }

    if config.banner {
        println!("sycalc {} - infix calculator", VERSION);
        println!("  Type 'exit' or Ctrl-D to quit, '.help' for usage");
    }

    info!("session started");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let command = ReplCommand::from_line(&line);
                if command != ReplCommand::Blank {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match command {
                    ReplCommand::Blank => {}
                    ReplCommand::Exit => break,
                    ReplCommand::Help => print_help(),
                    ReplCommand::Postfix(expr) => match sycalc::to_postfix_string(expr) {
                        Ok(postfix) => println!("Postfix: {}", postfix),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    ReplCommand::Evaluate(expr) => report(&execute_line(expr, show_postfix)),
                }
            }
            // Ctrl-C drops the current line only
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &config.history_path {
        if let Err(e) = rl.save_history(path) {
            warn!(error = %e, path = %path.display(), "could not save history");
        }
    }

    info!("session ended");
    Ok(())
}
