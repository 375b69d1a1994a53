use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers and quoted strings. Booleans are ordinary global bindings
/// (`true`, `false`) rather than literals.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42` or `3.5`.
    Number(f64),
    /// A string literal, without its surrounding quotes.
    Str(Rc<str>),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

/// The root of a parsed program: an ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub body: Vec<Statement>,
}

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// Represents a user-defined function declaration.
///
/// Declarations are reference counted so that every closure created from
/// them shares the same body instead of copying the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally on each call.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// An `je` statement together with its `hor_je` / `fer` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition.
    pub test:       Expr,
    /// Block executed when the condition is truthy.
    pub consequent: Block,
    /// What runs when the condition is falsy, if anything.
    pub alternate:  Option<ElseBranch>,
    /// Line number in the source code.
    pub line:       usize,
}

/// The alternative of an [`IfStatement`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// A chained `hor_je (...) { ... }` clause.
    ElseIf(Box<IfStatement>),
    /// A final `fer { ... }` clause.
    Else(Block),
}

/// The initializer slot of a `jadd_vi` loop header.
#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    /// `mannle name = value` scoped to the loop.
    Declaration {
        /// The loop variable name.
        name:  String,
        /// Its initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// Any expression evaluated once before the first test.
    Expression(Expr),
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `mannle`.
    VarDecl {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function declaration using `kamm`.
    FunctionDecl(Rc<FunctionDef>),
    /// `je` / `hor_je` / `fer` chain.
    If(IfStatement),
    /// `jado (test) { body }`
    While {
        /// Loop condition, checked before every iteration.
        test: Expr,
        /// Loop body.
        body: Block,
        /// Line number in the source code.
        line: usize,
    },
    /// `eh_kro { body } jado (test);`
    DoWhile {
        /// Loop body, run at least once.
        body: Block,
        /// Loop condition, checked after every iteration.
        test: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `jadd_vi (init; test; update) { body }`
    For {
        /// Optional initializer.
        init:   Option<ForInit>,
        /// Optional condition; a missing condition never stops the loop.
        test:   Option<Expr>,
        /// Optional update, evaluated after each iteration.
        update: Option<Expr>,
        /// Loop body.
        body:   Block,
        /// Line number in the source code.
        line:   usize,
    },
    /// `bhajo;` or `bhajo value;`
    Return {
        /// The returned expression, if any.
        argument: Option<Expr>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `chaddo;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `langh_jaa;`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `vikha(expr);`
    Print {
        /// The expression whose rendering is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A nested braced block.
    Block(Block),
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::VarDecl { line, .. }
            | Self::While { line, .. }
            | Self::DoWhile { line, .. }
            | Self::For { line, .. }
            | Self::Return { line, .. }
            | Self::Break { line }
            | Self::Continue { line }
            | Self::Print { line, .. }
            | Self::Expression { line, .. } => *line,
            Self::FunctionDecl(def) => def.line,
            Self::If(statement) => statement.line,
            Self::Block(block) => block.line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
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
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Indexing expression (e.g., `arr[2]`).
    Member {
        /// The array or string to index into.
        object: Box<Self>,
        /// The index to access.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Index assignment (e.g., `arr[2] = x` or `arr[2] += x`).
    MemberAssignment {
        /// The array being written.
        object:   Box<Self>,
        /// The index being written.
        index:    Box<Self>,
        /// Combining operator for compound assignment, `None` for `=`.
        operator: Option<BinaryOperator>,
        /// The assigned value.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Function call expression (e.g. `f(x)` or `f()[0](y)`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A unary operation (e.g. negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `++x`, `x++`, `--x` or `x--`.
    Update {
        /// Increment or decrement.
        op:     UpdateOperator,
        /// The variable or index expression being updated.
        target: Box<Self>,
        /// `true` for the prefix form, which yields the updated value.
        prefix: bool,
        /// Line number in the source code.
        line:   usize,
    },
    /// A binary operation (addition, comparison, logical, etc.).
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
    /// Variable assignment (e.g., `x = 1` or `x += 1`).
    Assignment {
        /// The name of the variable.
        name:     String,
        /// Combining operator for compound assignment, `None` for `=`.
        operator: Option<BinaryOperator>,
        /// The assigned value.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use pindscript::ast::Expr;
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
            | Self::ArrayLiteral { line, .. }
            | Self::Member { line, .. }
            | Self::MemberAssignment { line, .. }
            | Self::Call { line, .. }
            | Self::Unary { line, .. }
            | Self::Update { line, .. }
            | Self::Binary { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
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
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Strictly equal to (`===`)
    StrictEqual,
    /// Strictly not equal to (`!==`)
    StrictNotEqual,
    /// Short-circuit and (`&&`)
    And,
    /// Short-circuit or (`||`)
    Or,
}

/// Represents a prefix unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Numeric identity (e.g. `+x`).
    Plus,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents an increment or decrement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            StrictEqual, StrictNotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            StrictEqual => "===",
            StrictNotEqual => "!==",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}
