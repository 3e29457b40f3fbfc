use crate::interpreter::{
    io::{InputSource, OutputSink},
    program::Executor,
    state::InterpreterState,
};

/// An interpreter session owning its variable and folder stores.
///
/// Each session is independent: two sessions never observe each other's
/// variables or folders. A session must not run two programs at the same
/// time; `run` takes `&mut self` and returns only after every nested folder
/// and branch run has finished.
///
/// # Example
/// ```
/// use plex::interpreter::{io::NoInput, session::Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.run("x = 5,y = +,print x", &mut NoInput),
///            ["Error: Invalid expression: unexpected token '+' at column 0", "5"]);
///
/// // Bindings survive between runs of the same session.
/// assert_eq!(session.run("print x * 2", &mut NoInput), ["10"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    state: InterpreterState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing state.
    #[must_use]
    pub const fn with_state(state: InterpreterState) -> Self {
        Self { state }
    }

    #[must_use]
    pub const fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Consumes the session and returns its state.
    #[must_use]
    pub fn into_state(self) -> InterpreterState {
        self.state
    }

    /// Runs `program` and collects every output line.
    pub fn run(&mut self, program: &str, input: &mut dyn InputSource) -> Vec<String> {
        let mut output = Vec::new();
        self.run_with(program, input, &mut output);
        output
    }

    /// Runs `program`, streaming each output line to `output` as it is
    /// produced.
    pub fn run_with(&mut self,
                    program: &str,
                    input: &mut dyn InputSource,
                    output: &mut dyn OutputSink) {
        Executor::new(&mut self.state, input, output).run(program);
    }
}
