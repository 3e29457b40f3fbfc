//! Centralized status output with verbosity levels and selective color usage.
//!
//! Program output itself is not logged; it goes through
//! [`TerminalOutput`](crate::cli::console::TerminalOutput). The logger covers
//! everything around it: banners, host failures and verbose diagnostics.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Default level
    Normal,
    /// Diagnostics about each run
    Verbose,
}

impl LogLevel {
    /// Returns `true` if a message of level `target` is shown at this level.
    ///
    /// # Example
    /// ```
    /// use plex::cli::logger::LogLevel;
    ///
    /// assert!(LogLevel::Verbose.should_show(LogLevel::Normal));
    /// assert!(!LogLevel::Quiet.should_show(LogLevel::Normal));
    /// ```
    #[must_use]
    pub const fn should_show(self, target: Self) -> bool {
        matches!((self, target),
                 (Self::Quiet | Self::Normal, Self::Quiet)
                 | (Self::Normal, Self::Normal)
                 | (Self::Verbose, _))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// `quiet` wins over `verbose` when both are set.
    #[must_use]
    pub const fn new(verbose: bool, quiet: bool) -> Self {
        let level = if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };

        Self { level }
    }

    // Greeting shown when the REPL starts (Normal level)
    pub fn banner(&self, version: &str) {
        if self.level.should_show(LogLevel::Normal) {
            println!("{} {}", "plex".bright_blue().bold(), version.bright_blue());
            println!("Type 'help' for commands, 'exit' or Ctrl+D to quit.");
        }
    }

    // An `Error: ...` line produced by the program (always shown)
    pub fn program_error(&self, line: &str) {
        println!("{}", line.red());
    }

    // Host failures such as unreadable files (always shown)
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR:".red().bold(), message.bright_red());
    }

    pub fn warn(&self, message: &str) {
        if self.level.should_show(LogLevel::Normal) {
            eprintln!("{} {}", "Warning:".yellow().bold(), message.bright_yellow());
        }
    }

    // Detailed information (Verbose level)
    pub fn detail(&self, message: &str) {
        if self.level.should_show(LogLevel::Verbose) {
            eprintln!("  {}", message.dimmed());
        }
    }

    pub fn detail_item(&self, label: &str, value: &str) {
        if self.level.should_show(LogLevel::Verbose) {
            eprintln!("  {}: {}", label.bright_white(), value);
        }
    }
}
