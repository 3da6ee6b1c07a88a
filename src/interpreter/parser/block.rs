use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, peek_kind},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token or the end of input, which is reported as a missing
/// `}`.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A [`Block`] carrying the line of its opening brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, &TokenKind::LBrace)?.line;
    let mut statements = Vec::new();

    while !matches!(peek_kind(tokens), Some(TokenKind::RBrace | TokenKind::Eof) | None) {
        statements.push(parse_statement(tokens)?);
    }
    expect(tokens, &TokenKind::RBrace)?;

    Ok(Block { statements, line })
}
