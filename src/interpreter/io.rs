use std::collections::VecDeque;

/// Supplies lines of text to `input` and `folder create`.
///
/// Implementations may block until a line is available. `prompt` describes
/// what is being asked for; hosts with a terminal usually print it, others may
/// ignore it.
pub trait InputSource {
    /// Returns the next line without its line terminator, or `None` when no
    /// more input will ever arrive.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Receives program output one line at a time.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// An input source that never has input.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        None
    }
}

/// An input source that hands out a fixed queue of lines.
///
/// # Example
/// ```
/// use plex::interpreter::io::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["x = 1", "."]);
/// assert_eq!(input.read_line("> ").as_deref(), Some("x = 1"));
/// assert_eq!(input.read_line("> ").as_deref(), Some("."));
/// assert_eq!(input.read_line("> "), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    /// Number of lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.pop_front()
    }
}
