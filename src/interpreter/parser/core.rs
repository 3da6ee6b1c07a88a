use std::iter::Peekable;

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{current_line, peek_kind},
        },
    },
    util::stack::grow,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole program.
///
/// A program is `ও কাকা`, any number of statements, then `আসি কাকা`.
/// Tokens after the end marker are ignored.
///
/// Grammar: `program := "ও কাকা" statement* "আসি কাকা"`
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The [`Program`] root node.
///
/// # Errors
/// - `MissingProgramStart` if the first token is not the start marker.
/// - `MissingProgramEnd` if the input ends before the end marker.
/// - Any error raised while parsing the statements.
///
/// # Example
/// ```
/// use kaka::interpreter::{lexer::tokenize, parser::parse_program};
///
/// let tokens = tokenize("ও কাকা কাকা বলো ১; আসি কাকা").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 1);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();

    if peek_kind(&mut tokens) == Some(&TokenKind::ProgramStart) {
        tokens.next();
    } else {
        return Err(SyntaxError::MissingProgramStart { line: current_line(&mut tokens).max(1) });
    }

    let mut statements = Vec::new();
    loop {
        match peek_kind(&mut tokens) {
            Some(TokenKind::ProgramEnd) => break,
            Some(TokenKind::Eof) | None => {
                return Err(SyntaxError::MissingProgramEnd { line: current_line(&mut tokens) });
            },
            Some(_) => statements.push(parse_statement(&mut tokens)?),
        }
    }

    debug!("parsed {} top-level statements", statements.len());
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy. Parenthesised and bracketed
/// subexpressions re-enter here, so the stack is grown on demand.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    grow(|| parse_assignment(tokens))
}

/// Parses a right-associative assignment.
///
/// The left side is parsed as an ordinary expression first; only a plain
/// identifier is accepted as the target once `=` is seen.
///
/// Grammar: `assignment := logical_or ("=" assignment)?`
///
/// # Errors
/// `InvalidAssignmentTarget` when the left side is not an identifier.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let target = parse_logical_or(tokens)?;

    if let Some(token) = tokens.peek().copied()
       && token.kind == TokenKind::Equals
    {
        tokens.next();
        let value = parse_expression(tokens)?;

        return match &target {
            Expr::Identifier { name, line } => Ok(Expr::Assignment { name:  name.clone(),
                                                                     value: Box::new(value),
                                                                     line:  *line, }),
            _ => Err(SyntaxError::InvalidAssignmentTarget { line: token.line }),
        };
    }

    Ok(target)
}
