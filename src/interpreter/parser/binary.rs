use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, postfix::parse_postfix},
    },
};

/// Parses logical OR expressions.
///
/// Grammar: `or := and ("অথবা" and)*`
///
/// # Parameters
/// - `tokens`: Token iterator.
///
/// # Returns
/// A left-folded tree of `Expr::Logical` nodes.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_level(tokens, &TokenKind::Or, LogicalOperator::Or, parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Precedence is higher than OR.
///
/// Grammar: `and := equality ("এবং" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical_level(tokens, &TokenKind::And, LogicalOperator::And, parse_equality)
}

/// Parses `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                       parse_comparison)
}

/// Parses the relational operators `>`, `>=`, `<` and `<=`.
///
/// Grammar: `comparison := additive ((">" | ">=" | "<" | "<=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       &[BinaryOperator::Greater,
                         BinaryOperator::GreaterEqual,
                         BinaryOperator::Less,
                         BinaryOperator::LessEqual],
                       parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       &[BinaryOperator::Add, BinaryOperator::Sub],
                       parse_multiplicative)
}

/// Parses multiplication-level expressions: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := postfix (("*" | "/" | "%") postfix)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_binary_level(tokens,
                       &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod],
                       parse_postfix)
}

/// Folds one left-associative precedence level.
///
/// Parses an operand with `next_level`, then keeps consuming any operator in
/// `operators` followed by another operand. Each new node takes the line of
/// its operator token.
fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                             operators: &[BinaryOperator],
                             next_level: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = next_level(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && operators.contains(&op)
    {
        tokens.next();
        let right = next_level(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line: token.line };
    }

    Ok(left)
}

fn parse_logical_level<'a, I>(tokens: &mut Peekable<I>,
                              keyword: &TokenKind,
                              op: LogicalOperator,
                              next_level: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = next_level(tokens)?;

    while let Some(token) = tokens.peek().copied()
          && token.kind == *keyword
    {
        tokens.next();
        let right = next_level(tokens)?;
        left = Expr::Logical { left: Box::new(left),
                               op,
                               right: Box::new(right),
                               line: token.line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including the
/// logical keywords, which build `Expr::Logical` nodes instead.
///
/// # Example
/// ```
/// use kaka::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
