use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nested, ParseResult, within_limit},
            unary::parse_unary,
        },
    },
};

/// Builds a boxed binary node at `depth`, one level above the taller operand.
fn binary((left, left_height): Nested,
          op: BinaryOperator,
          (right, right_height): Nested,
          depth: usize,
          column: usize)
          -> ParseResult<Nested> {
    let height = 1 + left_height.max(right_height);
    within_limit(depth, height, column)?;

    Ok((Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) },
        height))
}

/// Parses logical OR expressions.
///
/// Lowest precedence level. Left-associative.
///
/// Grammar: `or := and ("or" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;

    while let Some((Token::Or, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let right = parse_logical_and(tokens, depth + 1)?;
        left = binary(left, BinaryOperator::Or, right, depth, column)?;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Binds tighter than `or` and looser than comparisons.
///
/// Grammar: `and := comparison ("and" comparison)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_comparison(tokens, depth)?;

    while let Some((Token::And, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let right = parse_comparison(tokens, depth + 1)?;
        left = binary(left, BinaryOperator::And, right, depth, column)?;
    }

    Ok(left)
}

/// Parses relational and equality operators.
///
/// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`. Comparisons fold to the left,
/// so `a < b < c` compares the boolean result of `a < b` with `c`.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=" | "==" | "!=")
/// additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, depth)?;

    while let Some((token, column)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if is_comparison_op(op) => op,
            _ => break,
        };
        let column = *column;
        tokens.next();

        let right = parse_additive(tokens, depth + 1)?;
        left = binary(left, op, right, depth, column)?;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let column = *column;
            tokens.next();
            let right = parse_multiplicative(tokens, depth + 1)?;
            left = binary(left, op, right, depth, column)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `//` and `%`.
///
/// Grammar: `multiplicative := power (("*" | "/" | "//" | "%") power)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_power(tokens, depth)?;
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            let column = *column;
            tokens.next();
            let right = parse_power(tokens, depth + 1)?;
            left = binary(left, op, right, depth, column)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `**` is right-associative: `a ** b ** c` parses as `a ** (b ** c)`.
/// Unary operators bind tighter, so `-2 ** 2` is `(-2) ** 2`.
///
/// Grammar: `power := unary ("**" power)?`
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Nested>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_unary(tokens, depth)?;

    if let Some((Token::StarStar, column)) = tokens.peek() {
        let column = *column;
        tokens.next();
        let exponent = parse_power(tokens, depth + 1)?;
        return binary(base, BinaryOperator::Pow, exponent, depth, column);
    }

    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use plex::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::SlashSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::SlashSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::StarStar => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
