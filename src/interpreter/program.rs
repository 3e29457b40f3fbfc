use crate::interpreter::{
    io::{InputSource, OutputSink},
    state::InterpreterState,
};

/// Maximum depth of folder-open and conditional re-entry.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Drives one program run over a borrowed session state.
///
/// The executor splits program text into statements, dispatches each one and
/// turns every failure into an `Error: <message>` output line. A failing
/// statement never stops the statements after it, at any nesting depth.
pub struct Executor<'a> {
    pub(crate) state:  &'a mut InterpreterState,
    pub(crate) input:  &'a mut dyn InputSource,
    pub(crate) output: &'a mut dyn OutputSink,
}

impl<'a> Executor<'a> {
    pub fn new(state: &'a mut InterpreterState,
               input: &'a mut dyn InputSource,
               output: &'a mut dyn OutputSink)
               -> Self {
        Self { state,
               input,
               output }
    }

    /// Runs a top-level program.
    pub fn run(&mut self, program: &str) {
        self.run_nested(program, 0);
    }

    /// Runs `program` at the given nesting depth.
    ///
    /// Folder contents and conditional branches come back through here, so
    /// they share the comma convention and the per-statement error isolation
    /// of top-level programs.
    pub(crate) fn run_nested(&mut self, program: &str, depth: usize) {
        for statement in statements(program) {
            if let Err(error) = self.dispatch(statement, depth) {
                self.output.write_line(&format!("Error: {error}"));
            }
        }
    }
}

/// Splits program text into trimmed, non-empty statements.
///
/// # Example
/// ```
/// use plex::interpreter::program::statements;
///
/// let parts: Vec<_> = statements(" x = 5 ,, print x ,").collect();
/// assert_eq!(parts, ["x = 5", "print x"]);
/// ```
pub fn statements(program: &str) -> impl Iterator<Item = &str> {
    program.split(',').map(str::trim).filter(|statement| !statement.is_empty())
}
