use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_logical_or,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser builds. A parenthesized group counts as
/// a level of its own.
pub const MAX_EXPRESSION_DEPTH: usize = 128;

/// A parsed subexpression together with the number of levels it occupies.
pub type Nested = (Expr, usize);

/// Fails when `height` levels placed below `depth` enclosing ones would pass
/// [`MAX_EXPRESSION_DEPTH`].
pub(crate) fn within_limit(depth: usize, height: usize, column: usize) -> ParseResult<()> {
    if depth + height > MAX_EXPRESSION_DEPTH {
        return Err(ParseError::NestingTooDeep { column });
    }
    Ok(())
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_nested(tokens, 0).map(|(expr, _)| expr)
}

/// Parses an expression that sits below `depth` enclosing levels.
pub(crate) fn parse_nested<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, depth)
}

/// Lexes and parses `source` as exactly one expression.
///
/// Any token left over after the expression is an error, so `1 2` is
/// rejected rather than silently evaluated as `1`.
///
/// # Errors
/// Returns a `ParseError` for lexical errors, malformed syntax, empty input,
/// trailing tokens or an expression nested deeper than
/// [`MAX_EXPRESSION_DEPTH`].
///
/// # Example
/// ```
/// use plex::{
///     ast::{BinaryOperator, Expr, LiteralValue},
///     interpreter::parser::core::parse_source,
/// };
///
/// let expr = parse_source("1 + x").unwrap();
/// assert_eq!(expr,
///            Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(1) }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Variable { name: "x".to_string() }), });
///
/// assert!(parse_source("1 +").is_err());
/// assert!(parse_source("1 2").is_err());
/// assert!(parse_source(&format!("{}1{}", "(".repeat(500), ")".repeat(500))).is_err());
/// ```
pub fn parse_source(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((tok, column)) = iter.next() {
        if *tok == Token::RParen {
            return Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                     column: *column, });
        }
        return Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                          column: *column, });
    }

    Ok(expr)
}
