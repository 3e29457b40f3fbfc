use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    cli::{
        console::{EditorInput, TerminalOutput},
        logger::Logger,
    },
    interpreter::{help::help_text, session::Session},
};

pub const PROMPT: &str = "plex> ";

/// One line typed at the REPL prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// `exit`, in any case.
    Exit,
    /// `help` or `help <topic>`.
    Help(Option<&'a str>),
    /// Anything else is a program.
    Program(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Classifies a trimmed REPL line.
    ///
    /// # Example
    /// ```
    /// use plex::cli::repl::ReplCommand;
    ///
    /// assert_eq!(ReplCommand::parse("EXIT"), ReplCommand::Exit);
    /// assert_eq!(ReplCommand::parse("help"), ReplCommand::Help(None));
    /// assert_eq!(ReplCommand::parse("help open folder"),
    ///            ReplCommand::Help(Some("open folder")));
    /// assert_eq!(ReplCommand::parse("print 1"), ReplCommand::Program("print 1"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        if line.eq_ignore_ascii_case("exit") {
            return Self::Exit;
        }
        if line.eq_ignore_ascii_case("help") {
            return Self::Help(None);
        }
        if let Some(head) = line.get(..5)
           && head.eq_ignore_ascii_case("help ")
        {
            return Self::Help(Some(line[5..].trim()));
        }
        Self::Program(line)
    }
}

/// Runs the interactive loop until `exit`, Ctrl+C or end of input.
///
/// All lines share one session, so variables and folders persist between
/// prompts.
pub fn start_repl(session: &mut Session, logger: &Logger) -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    logger.banner(env!("CARGO_PKG_VERSION"));

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line) {
            logger.warn(&format!("could not record history: {e}"));
        }

        match ReplCommand::parse(line) {
            ReplCommand::Exit => break,
            ReplCommand::Help(topic) => println!("{}", help_text(topic)),
            ReplCommand::Program(program) => {
                let mut input = EditorInput::new(&mut editor);
                let mut output = TerminalOutput::new(logger);
                session.run_with(program, &mut input, &mut output);

                logger.detail_item("output lines", &output.lines().to_string());
                logger.detail_item("errors", &output.errors().to_string());
                logger.detail_item("variables", &session.state().variables.len().to_string());
                logger.detail_item("folders", &session.state().folders.len().to_string());
            },
        }
    }

    Ok(())
}
