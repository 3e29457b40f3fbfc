use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;

use crate::{
    cli::logger::Logger,
    interpreter::io::{InputSource, OutputSink},
};

/// Prints program output to stdout, highlighting `Error:` lines.
pub struct TerminalOutput<'a> {
    logger: &'a Logger,
    lines:  usize,
    errors: usize,
}

impl<'a> TerminalOutput<'a> {
    #[must_use]
    pub const fn new(logger: &'a Logger) -> Self {
        Self { logger,
               lines: 0,
               errors: 0 }
    }

    /// Number of lines written so far.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Number of `Error:` lines written so far.
    #[must_use]
    pub const fn errors(&self) -> usize {
        self.errors
    }
}

impl OutputSink for TerminalOutput<'_> {
    fn write_line(&mut self, line: &str) {
        self.lines += 1;
        if line.starts_with("Error: ") {
            self.errors += 1;
            self.logger.program_error(line);
        } else {
            println!("{line}");
        }
    }
}

/// Reads input lines from standard input, printing the prompt first.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if !prompt.is_empty() {
            print!("{prompt}");
            if !prompt.ends_with(' ') {
                println!();
            }
            io::stdout().flush().ok()?;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }
}

/// Reads input lines through the REPL's line editor.
///
/// A multi-line prompt for `folder create` is printed above the edit line,
/// continuation lines get a `... ` prompt.
pub struct EditorInput<'a> {
    editor: &'a mut DefaultEditor,
}

impl<'a> EditorInput<'a> {
    pub const fn new(editor: &'a mut DefaultEditor) -> Self {
        Self { editor }
    }
}

impl InputSource for EditorInput<'_> {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let prompt = if prompt.is_empty() {
            "... "
        } else if prompt.ends_with(' ') {
            prompt
        } else {
            println!("{prompt}");
            "... "
        };

        self.editor.readline(prompt).ok()
    }
}
