use crate::{
    ast::{BinaryOperator, Block, Expr, LiteralValue, LogicalOperator, Program, Statement},
    interpreter::lexer::{TokenKind, keyword_text},
    util::stack::grow,
};

/// Number of spaces per nesting level.
const INDENT: usize = 2;

/// Renders a program as canonical Kaka source.
///
/// The start and end keywords stand on their own lines and every statement
/// gets its own line, indented two spaces per block level. Operands are
/// parenthesised only where the tree would otherwise parse differently, so
/// parsing the result gives back the same program apart from line numbers.
///
/// # Parameters
/// - `program`: The parsed program.
///
/// # Returns
/// The source text, ending with a newline.
///
/// # Example
/// ```
/// use kaka::{
///     interpreter::{lexer::tokenize, parser::parse_program},
///     printer::to_source,
/// };
///
/// let tokens = tokenize("ও কাকা কাকা রাখো x=(১+২)*৩; আসি কাকা").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(to_source(&program), "ও কাকা\n  কাকা রাখো x = (1 + 2) * 3;\nআসি কাকা\n");
/// ```
#[must_use]
pub fn to_source(program: &Program) -> String {
    let mut printer = Printer::default();

    printer.line(keyword(&TokenKind::ProgramStart));
    printer.depth += 1;
    for statement in &program.statements {
        printer.statement(statement);
    }
    printer.depth -= 1;
    printer.line(keyword(&TokenKind::ProgramEnd));

    printer.out
}

/// Binding strength of each expression form, loosest first.
mod precedence {
    pub const ASSIGNMENT: u8 = 1;
    pub const OR: u8 = 2;
    pub const AND: u8 = 3;
    pub const EQUALITY: u8 = 4;
    pub const COMPARISON: u8 = 5;
    pub const ADDITIVE: u8 = 6;
    pub const MULTIPLICATIVE: u8 = 7;
    pub const POSTFIX: u8 = 8;
}

#[derive(Default)]
struct Printer {
    out:   String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        self.out.push_str(&" ".repeat(self.depth * INDENT));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::VariableDeclaration { name, value, .. } => {
                let text = format!("{} {name} = {};",
                                   keyword(&TokenKind::Var),
                                   expression(value, precedence::ASSIGNMENT));
                self.line(&text);
            },
            Statement::Print { expr, .. } => {
                let text = format!("{} {};",
                                   keyword(&TokenKind::Print),
                                   expression(expr, precedence::ASSIGNMENT));
                self.line(&text);
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let header = format!("{} ({}) {{",
                                     keyword(&TokenKind::If),
                                     expression(condition, precedence::ASSIGNMENT));
                self.line(&header);
                self.block_body(then_branch);

                match else_branch {
                    Some(else_branch) => {
                        self.line(&format!("}} {} {{", keyword(&TokenKind::Else)));
                        self.block_body(else_branch);
                        self.line("}");
                    },
                    None => self.line("}"),
                }
            },
            Statement::While { condition, body, .. } => {
                let header = format!("{} ({}) {{",
                                     keyword(&TokenKind::While),
                                     expression(condition, precedence::ASSIGNMENT));
                self.line(&header);
                self.block_body(body);
                self.line("}");
            },
            Statement::Block(block) => {
                self.line("{");
                self.block_body(block);
                self.line("}");
            },
            Statement::Expression { expr, .. } => {
                self.line(&format!("{};", expression(expr, precedence::ASSIGNMENT)));
            },
            Statement::Break { .. } => self.line(&format!("{};", keyword(&TokenKind::Break))),
            Statement::Continue { .. } => {
                self.line(&format!("{};", keyword(&TokenKind::Continue)));
            },
            Statement::Function(decl) => {
                let header = format!("{} {}({}) {{",
                                     keyword(&TokenKind::Function),
                                     decl.name,
                                     decl.params.join(", "));
                self.line(&header);
                self.block_body(&decl.body);
                self.line("}");
            },
            Statement::Return { value, .. } => {
                let text = match value {
                    Some(value) => format!("{} {};",
                                           keyword(&TokenKind::Return),
                                           expression(value, precedence::ASSIGNMENT)),
                    None => format!("{};", keyword(&TokenKind::Return)),
                };
                self.line(&text);
            },
        }
    }

    fn block_body(&mut self, block: &Block) {
        self.depth += 1;
        grow(|| {
            for statement in &block.statements {
                self.statement(statement);
            }
        });
        self.depth -= 1;
    }
}

/// Renders an expression, parenthesised if it binds more loosely than
/// `min_precedence`.
fn expression(expr: &Expr, min_precedence: u8) -> String {
    let text = grow(|| match expr {
        Expr::Literal { value, .. } => literal(value),
        Expr::Identifier { name, .. } => name.clone(),
        Expr::Binary { left, op, right, .. } => {
            let level = binary_precedence(*op);
            format!("{} {op} {}", expression(left, level), expression(right, level + 1))
        },
        Expr::Logical { left, op, right, .. } => {
            let level = logical_precedence(*op);
            format!("{} {op} {}", expression(left, level), expression(right, level + 1))
        },
        Expr::Assignment { name, value, .. } => {
            format!("{name} = {}", expression(value, precedence::ASSIGNMENT))
        },
        Expr::Input { .. } => keyword(&TokenKind::Input).to_string(),
        Expr::Call { callee, arguments, .. } => {
            format!("{}({})",
                    expression(callee, precedence::POSTFIX),
                    list(arguments))
        },
        Expr::ArrayLiteral { elements, .. } => format!("[{}]", list(elements)),
        Expr::Member { object, property, .. } => {
            format!("{}[{}]",
                    expression(object, precedence::POSTFIX),
                    expression(property, precedence::ASSIGNMENT))
        },
    });

    if expression_precedence(expr) < min_precedence {
        format!("({text})")
    } else {
        text
    }
}

fn list(items: &[Expr]) -> String {
    items.iter()
         .map(|item| expression(item, precedence::ASSIGNMENT))
         .collect::<Vec<_>>()
         .join(", ")
}

fn literal(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Number(n) => number(*n),
        LiteralValue::Str(text) if text.contains('"') => format!("'{text}'"),
        LiteralValue::Str(text) => format!("\"{text}\""),
        LiteralValue::Bool(true) => keyword(&TokenKind::True).to_string(),
        LiteralValue::Bool(false) => keyword(&TokenKind::False).to_string(),
        LiteralValue::Null => keyword(&TokenKind::Null).to_string(),
    }
}

/// Renders a number so that the lexer reads it back as the same value.
///
/// Numerals cannot carry a sign or an exponent, so finite values are written
/// out in full decimal form. NaN becomes a malformed numeral and infinity a
/// numeral too large for `f64`.
fn number(value: f64) -> String {
    if value.is_nan() {
        return "0.0.0".to_string();
    }
    if value.is_sign_negative() && value != 0.0 {
        return format!("(0 - {})", number(-value));
    }
    if value.is_infinite() {
        return format!("1{}", "0".repeat(309));
    }
    format!("{}", value.abs())
}

const fn binary_precedence(op: BinaryOperator) -> u8 {
    match op {
        BinaryOperator::Equal | BinaryOperator::NotEqual => precedence::EQUALITY,
        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => precedence::COMPARISON,
        BinaryOperator::Add | BinaryOperator::Sub => precedence::ADDITIVE,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => {
            precedence::MULTIPLICATIVE
        },
    }
}

const fn logical_precedence(op: LogicalOperator) -> u8 {
    match op {
        LogicalOperator::Or => precedence::OR,
        LogicalOperator::And => precedence::AND,
    }
}

const fn expression_precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Assignment { .. } => precedence::ASSIGNMENT,
        Expr::Logical { op, .. } => logical_precedence(*op),
        Expr::Binary { op, .. } => binary_precedence(*op),
        Expr::Literal { .. }
        | Expr::Identifier { .. }
        | Expr::Input { .. }
        | Expr::Call { .. }
        | Expr::ArrayLiteral { .. }
        | Expr::Member { .. } => precedence::POSTFIX,
    }
}

fn keyword(kind: &TokenKind) -> &'static str {
    keyword_text(kind).unwrap_or_default()
}
