use std::{mem, rc::Rc};

use crate::util::stack::grow;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, strings, the two booleans and null.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal. Malformed numerals such as `1.2.3`
    /// are stored as NaN.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal: `ঠিক` or `ভুল`.
    Bool(bool),
    /// The null literal `ফালতু`.
    Null,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models one syntactic construct and records the source line
/// where it starts (for operators, the line of the operator token).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Arithmetic or comparison operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Short-circuiting `এবং` / `অথবা`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment to an existing variable: `name = value`.
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A line of user input: `কাকা শোনো`.
    Input {
        /// Line number in the source code.
        line: usize,
    },
    /// A call: `callee(arg1, arg2)`.
    Call {
        /// The expression producing the called value.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal: `[a, b, c]`.
    ArrayLiteral {
        /// Element expressions.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Computed member access: `object[property]`.
    Member {
        /// The accessed value.
        object:   Box<Self>,
        /// The property expression.
        property: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kaka::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. }
            | Self::Assignment { line, .. }
            | Self::Input { line }
            | Self::Call { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Member { line, .. } => *line,
        }
    }

    /// Moves the direct subexpressions of `self` into `out`, leaving
    /// childless placeholders in their place.
    fn take_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Binary { left, right, .. }
            | Self::Logical { left, right, .. }
            | Self::Member { object: left,
                             property: right,
                             .. } => {
                out.push(mem::replace(&mut **left, Self::Input { line: 0 }));
                out.push(mem::replace(&mut **right, Self::Input { line: 0 }));
            },
            Self::Assignment { value, .. } => {
                out.push(mem::replace(&mut **value, Self::Input { line: 0 }));
            },
            Self::Call { callee, arguments, .. } => {
                out.push(mem::replace(&mut **callee, Self::Input { line: 0 }));
                out.append(arguments);
            },
            Self::ArrayLiteral { elements, .. } => out.append(elements),
            Self::Literal { .. } | Self::Identifier { .. } | Self::Input { .. } => {},
        }
    }
}

/// Left-folded chains such as `1 + 1 + ... + 1` nest as deep as they are
/// long, so subtrees are flattened onto a heap stack instead of being dropped
/// recursively.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

/// A braced sequence of statements, executed in its own scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements in source order.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

impl Drop for Block {
    fn drop(&mut self) {
        let statements = mem::take(&mut self.statements);
        grow(move || drop(statements));
    }
}

/// Represents a user-defined function declaration.
///
/// Runtime function values hold this node behind an [`Rc`], so calling a
/// function never copies its body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally on each call.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `কাকা রাখো name = value;`
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `কাকা বলো expr;`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `যদি কাকা (condition) { ... } নাহলে কাকা { ... }`
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Block,
        /// Executed when the condition is falsy, if present.
        else_branch: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `যতক্ষণ কাকা (condition) { ... }`
    While {
        /// The loop condition, re-tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A bare block.
    Block(Block),
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `ব্যাস কাকা;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `পরেরটা কাকা;`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `ফাংশন কাকা name(params) { ... }`
    Function(Rc<FunctionDecl>),
    /// `ফেরত নাও value;`
    Return {
        /// The returned expression; `None` returns null.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Block(Block { line, .. })
            | Self::Expression { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Return { line, .. } => *line,
            Self::Function(decl) => decl.line,
        }
    }

    /// A short name for the kind of statement, used in diagnostics.
    ///
    /// ## Example
    /// ```
    /// use kaka::ast::Statement;
    ///
    /// assert_eq!(Statement::Break { line: 1 }.kind_name(), "break");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::VariableDeclaration { .. } => "variable declaration",
            Self::Print { .. } => "print",
            Self::If { .. } => "if",
            Self::While { .. } => "while",
            Self::Block(_) => "block",
            Self::Expression { .. } => "expression",
            Self::Break { .. } => "break",
            Self::Continue { .. } => "continue",
            Self::Function(_) => "function declaration",
            Self::Return { .. } => "return",
        }
    }
}

/// The root of a parsed program: the statements between `ও কাকা` and
/// `আসি কাকা`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Strictly equal to (`==`)
    Equal,
    /// Strictly not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{symbol}")
    }
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `এবং`
    And,
    /// `অথবা`
    Or,
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "এবং"),
            Self::Or => write!(f, "অথবা"),
        }
    }
}
