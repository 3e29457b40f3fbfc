use crate::{
    ast::{Conditional, Statement},
    error::RuntimeError,
    interpreter::parser::core::parse_source,
};

/// Returns `true` if `name` matches `[A-Za-z][A-Za-z0-9_]*`.
///
/// # Example
/// ```
/// use plex::interpreter::parser::statement::is_valid_identifier;
///
/// assert!(is_valid_identifier("total_2"));
/// assert!(!is_valid_identifier("2total"));
/// assert!(!is_valid_identifier("_hidden"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classifies one trimmed statement and parses its parts.
///
/// The classification order is fixed: a top-level `=` makes an assignment,
/// otherwise the statement is matched by literal prefix against `print`,
/// `input`, `folder create`, `folder list`, `folder open`, `folder delete`
/// and `if`, in that order.
///
/// # Errors
/// - `InvalidIdentifier` for a bad assignment or input target.
/// - `InvalidStatementShape` for wrong token counts.
/// - `InvalidConditional` for an `if` without `": "`.
/// - `InvalidExpression` when an embedded expression does not parse.
/// - `UnknownStatement` when nothing matches.
///
/// # Example
/// ```
/// use plex::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// assert_eq!(parse_statement("folder open notes").unwrap(),
///            Statement::FolderOpen { name: "notes".to_string() });
/// assert!(parse_statement("jump 3").is_err());
/// ```
pub fn parse_statement(statement: &str) -> Result<Statement, RuntimeError> {
    let equals = top_level_equals(statement);
    if !equals.is_empty() {
        return parse_assignment(statement, &equals);
    }

    if let Some(rest) = statement.strip_prefix("print") {
        return Ok(Statement::Print { expr: parse_source(rest.trim())? });
    }
    if let Some(rest) = statement.strip_prefix("input") {
        let name = rest.trim();
        if !is_valid_identifier(name) {
            return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
        }
        return Ok(Statement::Input { name: name.to_string() });
    }
    if statement.starts_with("folder create") {
        let name = folder_name(statement, "folder creation")?;
        return Ok(Statement::FolderCreate { name });
    }
    if statement.starts_with("folder list") {
        return Ok(Statement::FolderList);
    }
    if statement.starts_with("folder open") {
        let name = folder_name(statement, "open folder")?;
        return Ok(Statement::FolderOpen { name });
    }
    if statement.starts_with("folder delete") {
        let name = folder_name(statement, "delete folder")?;
        return Ok(Statement::FolderDelete { name });
    }
    if let Some(rest) = statement.strip_prefix("if") {
        return parse_conditional(rest).map(Statement::Conditional);
    }

    Err(RuntimeError::UnknownStatement { statement: statement.to_string() })
}

/// `name = expression`, where exactly one top-level `=` is allowed.
fn parse_assignment(statement: &str, equals: &[usize]) -> Result<Statement, RuntimeError> {
    let [position] = equals else {
        return Err(RuntimeError::InvalidStatementShape { kind: "assignment" });
    };

    let name = statement[..*position].trim();
    if !is_valid_identifier(name) {
        return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
    }

    let value = parse_source(statement[position + 1..].trim())?;
    Ok(Statement::Assignment { name: name.to_string(),
                               value })
}

/// Folder statements must have exactly three whitespace separated tokens.
fn folder_name(statement: &str, kind: &'static str) -> Result<String, RuntimeError> {
    match statement.split_whitespace().collect::<Vec<_>>().as_slice() {
        [_, _, name] => Ok((*name).to_string()),
        _ => Err(RuntimeError::InvalidStatementShape { kind }),
    }
}

/// Parses everything after the `if` keyword.
///
/// The text is split on the first `": "` into condition and body. An `else`
/// found anywhere in the condition text splits off an inline fallback
/// fragment. A body-level `else:` splits the body into its two branches.
fn parse_conditional(rest: &str) -> Result<Conditional, RuntimeError> {
    let Some((condition, body)) = rest.trim().split_once(": ") else {
        return Err(RuntimeError::InvalidConditional);
    };
    let condition = condition.trim();
    let body = body.trim();

    let (if_condition, inline_else) = match condition.split_once("else") {
        Some((if_condition, fragment)) => (if_condition.trim(), non_empty(fragment)),
        None => (condition, None),
    };

    let (body, else_body) = match find_body_else(body) {
        Some((start, end)) => (body[..start].trim(), non_empty(&body[end..])),
        None => (body, None),
    };

    Ok(Conditional { condition: parse_source(if_condition)?,
                     body: body.to_string(),
                     else_body,
                     inline_else })
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Byte offsets of every `=` that is outside string literals and not part of
/// `==`, `!=`, `<=` or `>=`.
fn top_level_equals(statement: &str) -> Vec<usize> {
    let bytes = statement.as_bytes();
    let mut positions = Vec::new();

    for (index, byte) in unquoted_bytes(statement) {
        if byte != b'=' {
            continue;
        }
        let before = index.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(index + 1).copied();
        if matches!(before, Some(b'=' | b'!' | b'<' | b'>')) || after == Some(b'=') {
            continue;
        }
        positions.push(index);
    }

    positions
}

/// Locates the first body-level `else:` outside string literals.
///
/// Returns the byte range covering the keyword and its colon. The keyword
/// must stand alone as a word; whitespace may sit between it and the colon.
fn find_body_else(body: &str) -> Option<(usize, usize)> {
    let bytes = body.as_bytes();

    for (index, _) in unquoted_bytes(body) {
        if !bytes[index..].starts_with(b"else") {
            continue;
        }
        let word_start = index == 0 || !is_word_byte(bytes[index - 1]);
        if !word_start {
            continue;
        }
        let after_keyword = &body[index + 4..];
        let colon = after_keyword.len() - after_keyword.trim_start().len();
        if after_keyword[colon..].starts_with(':') {
            return Some((index, index + 4 + colon + 1));
        }
    }

    None
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Yields `(offset, byte)` for every byte that is not inside a quoted string.
///
/// Quotes follow the lexer: `'` and `"` open a literal that runs to the
/// matching quote, and a backslash escapes the next byte.
fn unquoted_bytes(text: &str) -> impl Iterator<Item = (usize, u8)> + '_ {
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    text.bytes().enumerate().filter(move |&(_, byte)| {
                                match quote {
                                    Some(open) => {
                                        if escaped {
                                            escaped = false;
                                        } else if byte == b'\\' {
                                            escaped = true;
                                        } else if byte == open {
                                            quote = None;
                                        }
                                        false
                                    },
                                    None => {
                                        if byte == b'"' || byte == b'\'' {
                                            quote = Some(byte);
                                            false
                                        } else {
                                            true
                                        }
                                    },
                                }
                            })
}
