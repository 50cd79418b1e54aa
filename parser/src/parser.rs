use model::{ParseError, Program, Token, TokenKind};

use crate::statements::StatementParser;

/// Core parser state: a token cursor with explicit lookahead. Tokens
/// are only ever read through `peek`/`peek_at`, never un-consumed.
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parse the whole token stream into a program. A trailing
    /// semicolon after any top-level statement is optional.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.at_eof() {
            statements.push(self.parse_statement()?);
            self.match_kind(TokenKind::Semicolon);
        }
        Ok(Program { statements })
    }

    // ─── Cursor helpers ─────────────────────────────────────────

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Lookahead without consuming: `peek_at(0)` is the current token.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn check_at(&self, offset: usize, kind: TokenKind) -> bool {
        self.peek_at(offset).is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len() || self.check(TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail with the offending
    /// token's position.
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            Ok(token)
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) if token.kind != TokenKind::Eof => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.text.clone(),
                line: token.line,
                column: token.column,
            },
            _ => ParseError::UnexpectedEof { expected: expected.to_string() },
        }
    }
}
