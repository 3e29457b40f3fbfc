//! # plex
//!
//! plex is a small embeddable scripting interpreter written in Rust.
//! A program is a single string of comma-separated statements that assign
//! variables, print values, read input, manage named "folders" of saved
//! program text, and branch on conditions.
//!
//! A statement that fails is reported as an `Error: ...` output line and the
//! rest of the program still runs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate, clippy::module_name_repetitions)]

use crate::interpreter::{io::NoInput, session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` tree for expressions and the `Statement`
/// enum for classified statements.
pub mod ast;
/// Terminal front end: logging and console input/output for the `plex`
/// binary.
pub mod cli;
/// Provides unified error types for parsing and execution.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, statements).
/// - Renders the messages that appear after `Error: ` in program output.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together lexing, parsing, evaluation, the variable and
/// folder stores and the host capabilities to provide a complete runtime.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use interpreter::help::help_text;

/// Runs `program` in a fresh session with no input available and returns
/// its output lines.
///
/// Statements that need input (`input`, `folder create`) behave as if the
/// input source were exhausted.
///
/// # Examples
/// ```
/// use plex::run;
///
/// assert_eq!(run("print 2+2*3"), ["8"]);
/// assert_eq!(run("print 10/0"), ["Error: Division by zero"]);
/// assert_eq!(run(r#"if 1>0: print "yes" else: print "no""#), ["yes"]);
/// assert_eq!(run(r#"if 0>1: print "yes" else: print "no""#), ["no"]);
/// ```
#[must_use]
pub fn run(program: &str) -> Vec<String> {
    Session::new().run(program, &mut NoInput)
}
