use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Nested, ParseResult, parse_nested, within_limit},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`   (numeric negation)
/// - `not` (logical not)
///
/// Unary operators are right-associative, so an input like `not -x` is parsed
/// as `not (-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "not") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, column) = match tokens.peek() {
        Some((Token::Minus, column)) => (UnaryOperator::Negate, *column),
        Some((Token::Not, column)) => (UnaryOperator::Not, *column),
        _ => return parse_primary(tokens, depth),
    };
    tokens.next();
    within_limit(depth, 1, column)?;

    let (expr, height) = parse_unary(tokens, depth + 1)?;
    Ok((Expr::UnaryOp { op,
                        expr: Box::new(expr) },
        height + 1))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// ```text
///     primary := integer | real | string | boolean
///              | identifier
///              | "(" expression ")"
/// ```
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, column) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    within_limit(depth, 1, *column)?;

    let value = match token {
        Token::Integer(n) => LiteralValue::Integer(*n),
        Token::Real(r) => LiteralValue::Real(*r),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Str(s) => LiteralValue::Str(s.clone()),
        Token::Identifier(name) => return Ok((Expr::Variable { name: name.clone() }, 1)),
        Token::LParen => return parse_grouping(tokens, depth, *column),
        tok => {
            return Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                     column: *column, });
        },
    };

    Ok((Expr::Literal { value }, 1))
}

/// Parses the inside of a parenthesized group. The opening `(` has already
/// been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         depth: usize,
                         open_column: usize)
                         -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (expr, height) = parse_nested(tokens, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok((expr, height + 1)),
        Some((_, column)) => Err(ParseError::ExpectedClosingParen { column: *column }),
        None => Err(ParseError::ExpectedClosingParen { column: open_column }),
    }
}
