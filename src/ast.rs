use itertools::Itertools;

use crate::token::Token;

/// Root of the tree: an ordered sequence of statements.
#[derive(Debug)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }

    pub fn token_literal(&self) -> String {
        if let Some(statement) = self.statements.first() {
            statement.token_literal()
        } else {
            "".to_string()
        }
    }

    pub fn string(&self) -> String {
        self.statements.iter().map(|s| s.string()).collect()
    }
}

impl Default for Program {
    fn default() -> Self {
        Program::new()
    }
}

#[derive(Debug)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Let(statement) => statement.token_literal(),
            Statement::Return(statement) => statement.token_literal(),
            Statement::Expression(statement) => statement.token_literal(),
            Statement::Block(statement) => statement.token_literal(),
        }
    }

    pub fn string(&self) -> String {
        match self {
            Statement::Let(statement) => statement.string(),
            Statement::Return(statement) => statement.string(),
            Statement::Expression(statement) => statement.string(),
            Statement::Block(statement) => statement.string(),
        }
    }
}

#[derive(Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Expression {
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Boolean(expr) => expr.token_literal(),
            Expression::String(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
            Expression::If(expr) => expr.token_literal(),
            Expression::Function(expr) => expr.token_literal(),
            Expression::Call(expr) => expr.token_literal(),
            Expression::Array(expr) => expr.token_literal(),
            Expression::Index(expr) => expr.token_literal(),
            Expression::Hash(expr) => expr.token_literal(),
        }
    }

    pub fn string(&self) -> String {
        match self {
            Expression::Identifier(expr) => expr.string(),
            Expression::Integer(expr) => expr.string(),
            Expression::Boolean(expr) => expr.string(),
            Expression::String(expr) => expr.string(),
            Expression::Prefix(expr) => expr.string(),
            Expression::Infix(expr) => expr.string(),
            Expression::If(expr) => expr.string(),
            Expression::Function(expr) => expr.string(),
            Expression::Call(expr) => expr.string(),
            Expression::Array(expr) => expr.string(),
            Expression::Index(expr) => expr.string(),
            Expression::Hash(expr) => expr.string(),
        }
    }
}

/// `let <name> = <value>;`. The value slot is empty when the parser bailed
/// out of the right-hand side.
#[derive(Debug)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl LetStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        let mut buffer = format!("{} {} = ", self.token_literal(), self.name.string());
        if let Some(value) = &self.value {
            buffer.push_str(&value.string());
        }
        buffer.push(';');

        buffer
    }
}

#[derive(Debug)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Option<Expression>,
}

impl ReturnStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        let mut buffer = format!("{} ", self.token_literal());
        if let Some(value) = &self.value {
            buffer.push_str(&value.string());
        }
        buffer.push(';');

        buffer
    }
}

/// A bare expression in statement position, e.g. `x + 10;`.
#[derive(Debug)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        match &self.expression {
            Some(expression) => expression.string(),
            None => "".to_string(),
        }
    }
}

#[derive(Debug)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        self.statements.iter().map(|s| s.string()).collect()
    }
}

#[derive(Debug)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        self.token.literal.clone()
    }
}

#[derive(Debug)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl BooleanLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        self.token.literal.clone()
    }
}

/// Renders as the inner text, without the quotes the lexer stripped.
#[derive(Debug)]
pub struct StringLiteral {
    pub token: Token,
    pub value: String,
}

impl StringLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        self.token.literal.clone()
    }
}

/// `!x` or `-x`. The right slot is empty when the operand failed to parse.
#[derive(Debug)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl PrefixExpression {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        let mut buffer = format!("({}", self.operator);
        if let Some(right) = &self.right {
            buffer.push_str(&right.string());
        }
        buffer.push(')');

        buffer
    }
}

#[derive(Debug)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

impl InfixExpression {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        let mut buffer = format!("({} {} ", self.left.string(), self.operator);
        if let Some(right) = &self.right {
            buffer.push_str(&right.string());
        }
        buffer.push(')');

        buffer
    }
}

#[derive(Debug)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl IfExpression {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        let mut buffer = format!(
            "if{} {}",
            self.condition.string(),
            self.consequence.string()
        );

        if let Some(alternative) = &self.alternative {
            buffer.push_str(&format!(" else {}", alternative.string()));
        }

        buffer
    }
}

#[derive(Debug)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl FunctionLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        format!(
            "{}({}) {}",
            self.token_literal(),
            self.parameters.iter().map(|p| p.string()).join(", "),
            self.body.string()
        )
    }
}

#[derive(Debug)]
pub struct CallExpression {
    pub token: Token,
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl CallExpression {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        format!(
            "({}({}))",
            self.function.string(),
            self.arguments.iter().map(|a| a.string()).join(", ")
        )
    }
}

#[derive(Debug)]
pub struct ArrayLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl ArrayLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        format!(
            "[{}]",
            self.elements.iter().map(|e| e.string()).join(", ")
        )
    }
}

#[derive(Debug)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl IndexExpression {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        format!("({}[{}])", self.left.string(), self.index.string())
    }
}

/// Key/value pairs in source order, so rendering is deterministic.
#[derive(Debug)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl HashLiteral {
    pub fn token_literal(&self) -> String {
        self.token.literal.clone()
    }

    pub fn string(&self) -> String {
        format!(
            "{{{}}}",
            self.pairs
                .iter()
                .map(|(key, value)| format!("{}:{}", key.string(), value.string()))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {

    use crate::token::TokenType;

    use super::*;
    #[test]
    fn test_string() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: Token {
                    token_type: TokenType::Let,
                    literal: "let".to_string(),
                },
                name: Identifier {
                    token: Token {
                        token_type: TokenType::Ident,
                        literal: "myVar".to_string(),
                    },
                    value: "myVar".to_string(),
                },
                value: Some(Expression::Identifier(Identifier {
                    token: Token {
                        token_type: TokenType::Ident,
                        literal: "anotherVar".to_string(),
                    },
                    value: "anotherVar".to_string(),
                })),
            })],
        };

        assert_eq!("let myVar = anotherVar;".to_string(), program.string());
    }

    #[test]
    fn test_string_with_missing_value() {
        let statement = Statement::Let(LetStatement {
            token: Token {
                token_type: TokenType::Let,
                literal: "let".to_string(),
            },
            name: Identifier {
                token: Token {
                    token_type: TokenType::Ident,
                    literal: "myVar".to_string(),
                },
                value: "myVar".to_string(),
            },
            value: None,
        });

        assert_eq!("let myVar = ;".to_string(), statement.string());
    }

    #[test]
    fn test_empty_program_token_literal() {
        let program = Program::new();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.string(), "");
    }
}
