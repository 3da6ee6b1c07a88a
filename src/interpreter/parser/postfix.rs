use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated},
        },
    },
    util::num::{normalize_digits, parse_js_number},
};

/// Parses a primary expression followed by any chain of calls and index
/// accesses.
///
/// `f(1)(2)` and `a[0][1]` and `xs["push"](3)` all fold left.
///
/// Grammar: `postfix := primary ( "(" arguments ")" | "[" expression "]" )*`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// The primary expression wrapped in `Expr::Call` / `Expr::Member` nodes.
pub fn parse_postfix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut node = parse_primary(tokens)?;

    loop {
        match tokens.peek().copied() {
            Some(token) if token.kind == TokenKind::LParen => {
                tokens.next();
                let arguments = parse_comma_separated(tokens, parse_expression, &TokenKind::RParen)?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line: token.line };
            },
            Some(token) if token.kind == TokenKind::LBracket => {
                tokens.next();
                let property = parse_expression(tokens)?;
                expect(tokens, &TokenKind::RBracket)?;
                node = Expr::Member { object:   Box::new(node),
                                      property: Box::new(property),
                                      line:     token.line, };
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Parses a primary expression.
///
/// Primaries are literals, `কাকা শোনো`, array literals, identifiers and
/// parenthesised expressions. Numerals are normalised to ASCII digits and
/// converted with JavaScript `Number()` rules, so `1.2.3` becomes NaN.
///
/// # Errors
/// `UnexpectedToken` for any token that cannot start an expression. The
/// token is not consumed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek().copied() else {
        return Err(SyntaxError::UnexpectedToken { token: TokenKind::Eof.to_string(),
                                                  line:  0, });
    };
    let line = token.line;

    let literal = |value: LiteralValue| Expr::Literal { value, line };

    let expr = match &token.kind {
        TokenKind::True => literal(LiteralValue::Bool(true)),
        TokenKind::False => literal(LiteralValue::Bool(false)),
        TokenKind::Null => literal(LiteralValue::Null),
        TokenKind::Input => Expr::Input { line },
        TokenKind::Number(raw) => {
            let value = parse_js_number(&normalize_digits(raw)).unwrap_or(f64::NAN);
            literal(LiteralValue::Number(value))
        },
        TokenKind::Str(text) => literal(LiteralValue::Str(text.clone())),
        TokenKind::Identifier(name) => Expr::Identifier { name: name.clone(),
                                                          line },
        TokenKind::LBracket => {
            tokens.next();
            let elements = parse_comma_separated(tokens, parse_expression, &TokenKind::RBracket)?;
            return Ok(Expr::ArrayLiteral { elements, line });
        },
        TokenKind::LParen => {
            tokens.next();
            let inner = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen)?;
            return Ok(inner);
        },
        other => {
            return Err(SyntaxError::UnexpectedToken { token: other.to_string(),
                                                      line });
        },
    };

    tokens.next();
    Ok(expr)
}

