/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// an expression: integers, reals, booleans and quoted strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A boolean literal value: `true`/`True` or `false`/`False`.
    Bool(bool),
    /// A single- or double-quoted string literal, escapes already resolved.
    Str(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are built by the parser from a single statement fragment and
/// evaluated against the current variable bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison or logic).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// One classified statement of a program.
///
/// Statements are produced by the statement parser from a single trimmed,
/// comma-delimited segment and executed by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`
    Assignment {
        /// Target variable.
        name:  String,
        /// Expression whose value is stored.
        value: Expr,
    },
    /// `print expression`
    Print {
        /// Expression whose rendered value is emitted.
        expr: Expr,
    },
    /// `input name`
    Input {
        /// Variable receiving the line read from the input source.
        name: String,
    },
    /// `folder create name`
    FolderCreate {
        /// Folder to create or overwrite.
        name: String,
    },
    /// `folder list`
    FolderList,
    /// `folder open name`
    FolderOpen {
        /// Folder whose content is interpreted.
        name: String,
    },
    /// `folder delete name`
    FolderDelete {
        /// Folder to remove.
        name: String,
    },
    /// `if condition: body [else: else_body]`
    Conditional(Conditional),
}

/// The parts of an `if` statement.
///
/// Both branches are kept as raw program text and re-enter the program
/// interpreter only when chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    /// The condition deciding which branch runs.
    pub condition:   Expr,
    /// Program text run when the condition is truthy.
    pub body:        String,
    /// Program text after a body-level `else:`.
    pub else_body:   Option<String>,
    /// Program text after an `else` written inside the condition itself.
    pub inline_else: Option<String>,
}

/// Binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication or string repetition (`*`).
    Mul,
    /// True division (`/`), always producing a real.
    Div,
    /// Floor division (`//`).
    FloorDiv,
    /// Modulo with the sign of the divisor (`%`).
    Mod,
    /// Exponentiation (`**`).
    Pow,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// Short-circuit logical and.
    And,
    /// Short-circuit logical or.
    Or,
}

/// Unary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric negation (`-x`).
    Negate,
    /// Logical negation (`not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, FloorDiv, Greater, GreaterEqual, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            FloorDiv => "//",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "not"),
        }
    }
}
