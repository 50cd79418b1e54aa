use thiserror::Error;

/// Closed set of lexical token classes.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
    // Literal classes
    Int,
    Float,
    Str,
    Bool,
    Identifier,
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    EqualEqual,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    // Punctuation
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    Comma,
    Semicolon,
    // Keywords
    If,
    Else,
    While,
    For,
    Function,
    Return,
    Var,
    Print,
    // End of input
    Eof,
}

/// A classified lexical unit. Immutable once produced by the lexer;
/// `line` and `column` are 1-based and point at the first character.
#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token { kind, text: text.into(), line, column }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    VarDeclaration {
        name: String,
        value: Expr,
    },
    Assignment {
        name: String,
        value: Expr,
    },
    If {
        condition: Expr,
        then_branch: Block,
        else_branch: Option<Block>,
    },
    While {
        condition: Expr,
        body: Block,
    },
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Block,
    },
    Return(Expr),
    Print(Expr),
    Expr(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Literal(Value),
    Identifier(String),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    EqualEqual,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

/// Parse tree for the regex engine. Every node exclusively owns its
/// children; the tree is finite even though `Repeat` can expand to
/// arbitrarily long strings at evaluation time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RegexNode {
    /// Matches and generates exactly this string (may be empty).
    Literal(String),
    /// Concatenation, left to right.
    Sequence(Vec<RegexNode>),
    /// Left-to-right trial over alternatives.
    Alternation(Vec<RegexNode>),
    /// Inner repeated between `min` and `max` (inclusive) times.
    /// Invariant: `min <= max`.
    Repeat {
        inner: Box<RegexNode>,
        min: usize,
        max: usize,
    },
}

/// Fatal tokenization failure. Aborts lexing; never recovered internally.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LexError {
    #[error("unrecognized character '{ch}' at line {line}, column {column}")]
    UnrecognizedCharacter { ch: char, line: usize, column: usize },
    #[error("unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
}

/// Fatal structural parse failure, for both the token-stream parser
/// (line/column positions) and the regex parser (byte offsets).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("unbalanced parenthesis: missing ')' for group opened at offset {open_offset}")]
    UnbalancedParenthesis { open_offset: usize },
    #[error("expected repeat count after '^' at offset {offset}")]
    MissingRepeatCount { offset: usize },
    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("expected {expected}, got '{found}' at line {line}, column {column}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
        column: usize,
    },
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_construction() {
        let tok = Token::new(TokenKind::Identifier, "x", 1, 5);
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "x");
        assert_eq!((tok.line, tok.column), (1, 5));
    }

    #[test]
    fn regex_nodes_compare_structurally() {
        let a = RegexNode::Sequence(vec![
            RegexNode::Literal("ab".to_string()),
            RegexNode::Repeat {
                inner: Box::new(RegexNode::Literal("c".to_string())),
                min: 0,
                max: 5,
            },
        ]);
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn errors_format_with_positions() {
        let err = ParseError::UnexpectedToken {
            expected: "';'".to_string(),
            found: ")".to_string(),
            line: 3,
            column: 7,
        };
        assert_eq!(err.to_string(), "expected ';', got ')' at line 3, column 7");

        let err = LexError::UnrecognizedCharacter { ch: '@', line: 1, column: 2 };
        assert!(err.to_string().contains("'@'"));
    }
}
