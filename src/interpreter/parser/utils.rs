use std::iter::Peekable;

use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<&'a TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().map(|token| &token.kind)
}

/// Returns the line of the next token, or `0` once the stream is exhausted.
pub(in crate::interpreter::parser) fn current_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map_or(0, |token| token.line)
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: &TokenKind)
                                                        -> bool
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == Some(kind) {
        tokens.next();
        return true;
    }
    false
}

/// Consumes a required token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The kind the next token must have. Only payload-free kinds
///   are meaningful here.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `SyntaxError::Expected` naming both the required and the actual
/// token. Nothing is consumed in that case.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(token) if token.kind == *expected => {
            tokens.next();
            Ok(token)
        },
        Some(token) => Err(SyntaxError::Expected { expected: expected.to_string(),
                                                   found:    token.kind.to_string(),
                                                   line:     token.line, }),
        None => Err(SyntaxError::Expected { expected: expected.to_string(),
                                            found:    TokenKind::Eof.to_string(),
                                            line:     0, }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns `SyntaxError::Expected` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek().copied() {
        Some(Token { kind: TokenKind::Identifier(name),
                     .. }) => {
            tokens.next();
            Ok(name.clone())
        },
        Some(token) => Err(SyntaxError::Expected { expected: "identifier".to_string(),
                                                   found:    token.kind.to_string(),
                                                   line:     token.line, }),
        None => Err(SyntaxError::Expected { expected: "identifier".to_string(),
                                            found:    TokenKind::Eof.to_string(),
                                            line:     0, }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call arguments and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, continuing
/// while a comma follows, and then requires the closing token. An
/// immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if an item fails to parse or the closing token is
/// missing.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if consume_if(tokens, closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if !consume_if(tokens, &TokenKind::Comma) {
            break;
        }
    }
    expect(tokens, closing)?;
    Ok(items)
}
