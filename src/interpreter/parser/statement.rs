use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDecl, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{consume_if, current_line, expect, parse_comma_separated, parse_identifier,
                    peek_kind},
        },
    },
    util::stack::grow,
};

/// Parses a single statement.
///
/// The leading token decides the form:
/// - `কাকা রাখো`: a variable declaration.
/// - `কাকা বলো`: a print statement.
/// - `যদি কাকা` / `যতক্ষণ কাকা`: conditionals and loops.
/// - `{`: a bare block.
/// - `ব্যাস কাকা` / `পরেরটা কাকা`: break and continue.
/// - `ফাংশন কাকা` / `ফেরত নাও`: function declarations and returns.
///
/// Anything else is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    grow(|| parse_statement_inner(tokens))
}

fn parse_statement_inner<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = current_line(tokens);

    match peek_kind(tokens) {
        Some(TokenKind::Var) => parse_variable_declaration(tokens, line),
        Some(TokenKind::Print) => parse_print(tokens, line),
        Some(TokenKind::If) => parse_if(tokens, line),
        Some(TokenKind::While) => parse_while(tokens, line),
        Some(TokenKind::LBrace) => Ok(Statement::Block(parse_block(tokens)?)),
        Some(TokenKind::Break) => {
            tokens.next();
            expect(tokens, &TokenKind::Semicolon)?;
            Ok(Statement::Break { line })
        },
        Some(TokenKind::Continue) => {
            tokens.next();
            expect(tokens, &TokenKind::Semicolon)?;
            Ok(Statement::Continue { line })
        },
        Some(TokenKind::Function) => parse_function_declaration(tokens, line),
        Some(TokenKind::Return) => parse_return(tokens, line),
        _ => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &TokenKind::Semicolon)?;
            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses `কাকা রাখো <identifier> = <expression>;`.
///
/// # Errors
/// Returns a `SyntaxError` if the name, `=`, the initializer or `;` is
/// missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Equals)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::VariableDeclaration { name, value, line })
}

/// Parses `কাকা বলো <expression>;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::Print { expr, line })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     যদি কাকা (<condition>) { ... }
///     নাহলে কাকা { ... }
/// ```
/// There is no `else if`; nest another `যদি কাকা` inside the else block.
///
/// # Errors
/// Returns a `SyntaxError` if the parentheses or either block are malformed.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let condition = parse_condition(tokens)?;
    let then_branch = parse_block(tokens)?;
    let else_branch = if consume_if(tokens, &TokenKind::Else) {
        Some(parse_block(tokens)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses `যতক্ষণ কাকা (<condition>) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses a parenthesised condition.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &TokenKind::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::RParen)?;
    Ok(condition)
}

/// Parses a function declaration of the form
/// `ফাংশন কাকা <name>(param1, param2, ...) { ... }`.
///
/// The declaration is wrapped in an [`Rc`] so runtime function values can
/// share it.
///
/// # Errors
/// Returns a `SyntaxError` if the name, the parameter list or the body is
/// malformed.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &TokenKind::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Statement::Function(Rc::new(FunctionDecl { name,
                                                  params,
                                                  body,
                                                  line })))
}

/// Parses `ফেরত নাও [<expression>];`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();

    let value = if peek_kind(tokens) == Some(&TokenKind::Semicolon) {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Statement::Return { value, line })
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::{
        ast::{BinaryOperator, Block, Expr, LiteralValue, LogicalOperator, Program, Statement},
        error::SyntaxError,
        interpreter::{lexer::tokenize, parser::parse_program},
    };

    fn parse(source: &str) -> Result<Program, SyntaxError> {
        parse_program(&tokenize(source).unwrap())
    }

    fn parse_body(body: &str) -> Vec<Statement> {
        parse(&format!("ও কাকা\n{body}\nআসি কাকা")).unwrap().statements
    }

    fn number(value: f64, line: usize) -> Expr {
        Expr::Literal { value: LiteralValue::Number(value),
                        line }
    }

    fn ident(name: &str, line: usize) -> Expr {
        Expr::Identifier { name: name.to_string(),
                           line }
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(parse("ও কাকা আসি কাকা").unwrap(), Program::default());
    }

    #[test]
    fn test_tokens_after_end_are_ignored() {
        assert!(parse("ও কাকা আসি কাকা কাকা বলো ;;; ((").is_ok());
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(parse("কাকা বলো ১; আসি কাকা"),
                   Err(SyntaxError::MissingProgramStart { line: 1 }));
        assert_eq!(parse("ও কাকা\nকাকা বলো ১;\n"),
                   Err(SyntaxError::MissingProgramEnd { line: 3 }));
        assert_eq!(parse(""), Err(SyntaxError::MissingProgramStart { line: 1 }));
    }

    #[test]
    fn test_unterminated_string_is_a_syntax_error() {
        let result = parse("ও কাকা কাকা বলো \"oops; আসি কাকা");
        assert!(matches!(result, Err(SyntaxError::Expected { .. })));
    }

    #[test]
    fn test_scenario_shape() {
        let statements = parse_body("কাকা রাখো x = 5; কাকা রাখো y = 3; কাকা বলো x + y;");

        assert_eq!(statements,
                   vec![Statement::VariableDeclaration { name:  "x".to_string(),
                                                         value: number(5.0, 2),
                                                         line:  2, },
                        Statement::VariableDeclaration { name:  "y".to_string(),
                                                         value: number(3.0, 2),
                                                         line:  2, },
                        Statement::Print { expr: Expr::Binary { left:  Box::new(ident("x", 2)),
                                                                op:    BinaryOperator::Add,
                                                                right: Box::new(ident("y", 2)),
                                                                line:  2, },
                                           line: 2, }]);
    }

    #[test]
    fn test_precedence_and_associativity() {
        let statements = parse_body("1 - 2 - 3 * 4;");
        let Statement::Expression { expr, .. } = &statements[0] else {
            panic!("expected expression statement");
        };
        let Expr::Binary { left, op, right, .. } = expr else {
            panic!("expected binary");
        };

        assert_eq!(*op, BinaryOperator::Sub);
        assert!(matches!(**left, Expr::Binary { op: BinaryOperator::Sub, .. }));
        assert!(matches!(**right, Expr::Binary { op: BinaryOperator::Mul, .. }));
    }

    #[test]
    fn test_logical_binds_looser_than_equality() {
        let statements = parse_body("a == 1 অথবা b এবং c;");
        let Statement::Expression { expr: Expr::Logical { op, left, right, .. },
                                    .. } = &statements[0]
        else {
            panic!("expected logical");
        };

        assert_eq!(*op, LogicalOperator::Or);
        assert!(matches!(**left, Expr::Binary { op: BinaryOperator::Equal, .. }));
        assert!(matches!(**right, Expr::Logical { op: LogicalOperator::And, .. }));
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let statements = parse_body("a = b = ১;");
        let Statement::Expression { expr: Expr::Assignment { name, value, .. },
                                    .. } = &statements[0]
        else {
            panic!("expected assignment");
        };

        assert_eq!(name, "a");
        assert!(matches!(**value, Expr::Assignment { ref name, .. } if name == "b"));
    }

    #[test]
    fn test_invalid_assignment_target() {
        let result = parse("ও কাকা\nxs[0] = 1;\nআসি কাকা");
        assert_eq!(result, Err(SyntaxError::InvalidAssignmentTarget { line: 2 }));
    }

    #[test]
    fn test_postfix_chain() {
        let statements = parse_body("xs[\"push\"](1, 2);");
        let Statement::Expression { expr: Expr::Call { callee, arguments, .. },
                                    .. } = &statements[0]
        else {
            panic!("expected call");
        };

        assert_eq!(arguments.len(), 2);
        assert!(matches!(**callee, Expr::Member { .. }));
    }

    #[test]
    fn test_numbers_are_normalised() {
        let statements = parse_body("কাকা বলো ১২.৫; কাকা বলো 1.2.3;");
        assert_eq!(statements[0],
                   Statement::Print { expr: number(12.5, 2),
                                      line: 2, });
        let Statement::Print { expr: Expr::Literal { value: LiteralValue::Number(n), .. },
                               .. } = statements[1]
        else {
            panic!("expected number literal");
        };
        assert!(n.is_nan());
    }

    #[test]
    fn test_control_flow_statements() {
        let source = indoc! {"
            ফাংশন কাকা যোগ(a, b) {
              ফেরত নাও a + b;
            }
            যতক্ষণ কাকা (ঠিক) {
              যদি কাকা (x) { ব্যাস কাকা; } নাহলে কাকা { পরেরটা কাকা; }
            }
            ফেরত নাও;
        "};
        let statements = parse_body(source);

        let kinds: Vec<_> = statements.iter().map(Statement::kind_name).collect();
        assert_eq!(kinds, vec!["function declaration", "while", "return"]);

        let Statement::Function(decl) = &statements[0] else {
            panic!("expected function");
        };
        assert_eq!(decl.name, "যোগ");
        assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(decl.body.statements.len(), 1);

        let Statement::While { body: Block { statements: inner, .. },
                               .. } = &statements[1]
        else {
            panic!("expected while");
        };
        assert!(matches!(inner[0], Statement::If { else_branch: Some(_), .. }));
        assert_eq!(statements[2], Statement::Return { value: None, line: 8 });
    }

    #[test]
    fn test_missing_semicolon() {
        let result = parse("ও কাকা\nকাকা বলো ১\nআসি কাকা");
        assert_eq!(result,
                   Err(SyntaxError::Expected { expected: "';'".to_string(),
                                               found:    "'আসি কাকা'".to_string(),
                                               line:     3, }));
    }

    #[test]
    fn test_unexpected_token() {
        let result = parse("ও কাকা\nকাকা বলো ;\nআসি কাকা");
        assert_eq!(result,
                   Err(SyntaxError::UnexpectedToken { token: "';'".to_string(),
                                                      line:  2, }));
    }

    #[test]
    fn test_unclosed_block() {
        let result = parse("ও কাকা { কাকা বলো ১;");
        assert!(matches!(result, Err(SyntaxError::Expected { ref expected, .. }) if expected == "'}'"));
    }
}
