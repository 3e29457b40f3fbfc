/// The evaluator module computes the value of parsed expressions.
///
/// The evaluator walks the expression tree, resolves variables against the
/// current bindings and applies arithmetic, comparison and logical operators.
///
/// # Responsibilities
/// - Evaluates every expression node over the `Value` type.
/// - Reports division by zero separately from all other failures.
pub mod evaluator;
/// The lexer module tokenizes expressions for the parser.
///
/// Built on `logos`, it turns an expression string into `(Token, column)`
/// pairs: numbers, strings, booleans, identifiers, keywords and operators.
pub mod lexer;
/// The parser module builds expression trees and classifies statements.
///
/// # Responsibilities
/// - Parses expressions with standard precedence by recursive descent.
/// - Classifies statement text into assignment, print, input, folder and
///   conditional statements.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
/// Variable and folder stores, and the per-session state that owns them.
pub mod state;
/// Input and output capabilities supplied by the embedding host.
pub mod io;
/// The program interpreter: statement splitting and per-statement error
/// isolation.
pub mod program;
/// The statement dispatcher: one handler per statement kind.
pub mod dispatcher;
/// Interpreter sessions, the main embedding entry point.
pub mod session;
/// Static command documentation.
pub mod help;
