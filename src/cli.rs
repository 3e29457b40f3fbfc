/// Level-filtered, colored status output for the terminal front end.
pub mod logger;
/// Terminal implementations of the interpreter's input and output
/// capabilities.
pub mod console;
/// The interactive read-eval-print loop.
pub mod repl;
