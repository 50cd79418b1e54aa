use model::{Block, ParseError, Stmt, TokenKind};

use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing. Dispatch is on the leading token; identifier-led
/// statements need one extra token of lookahead to tell an assignment
/// from a call from a bare expression.
pub(crate) trait StatementParser {
    fn parse_statement(&mut self) -> Result<Stmt, ParseError>;
}

impl StatementParser for Parser<'_> {
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected("a statement"));
        };
        match token.kind {
            TokenKind::Var => self.parse_var_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_loop(),
            TokenKind::Function => self.parse_function_definition(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Print => self.parse_print_statement(),
            TokenKind::Identifier if self.check_at(1, TokenKind::Equal) => {
                self.parse_assignment()
            }
            // `name(...)` as a statement is a call expression statement;
            // `print(...)` never lands here because print is a keyword.
            _ => Ok(Stmt::Expr(self.parse_expr()?)),
        }
    }
}

impl Parser<'_> {
    fn parse_var_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Var, "'var'")?;
        let name = self.expect(TokenKind::Identifier, "a variable name")?.text;
        self.expect(TokenKind::Equal, "'='")?;
        let value = self.parse_expr()?;
        Ok(Stmt::VarDeclaration { name, value })
    }

    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Identifier, "an identifier")?.text;
        self.expect(TokenKind::Equal, "'='")?;
        let value = self.parse_expr()?;
        Ok(Stmt::Assignment { name, value })
    }

    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::If, "'if'")?;
        self.expect(TokenKind::OpenParenthesis, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis, "')'")?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.match_kind(TokenKind::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If { condition, then_branch, else_branch })
    }

    fn parse_while_loop(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::While, "'while'")?;
        self.expect(TokenKind::OpenParenthesis, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis, "')'")?;
        let body = self.parse_block()?;
        Ok(Stmt::While { condition, body })
    }

    fn parse_function_definition(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Function, "'function'")?;
        let name = self.expect(TokenKind::Identifier, "a function name")?.text;
        self.expect(TokenKind::OpenParenthesis, "'('")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::CloseParenthesis) {
            params.push(self.expect(TokenKind::Identifier, "a parameter name")?.text);
            while self.match_kind(TokenKind::Comma) {
                params.push(self.expect(TokenKind::Identifier, "a parameter name")?.text);
            }
        }

        self.expect(TokenKind::CloseParenthesis, "')'")?;
        let body = self.parse_block()?;
        Ok(Stmt::FunctionDef { name, params, body })
    }

    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Return, "'return'")?;
        Ok(Stmt::Return(self.parse_expr()?))
    }

    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::Print, "'print'")?;
        self.expect(TokenKind::OpenParenthesis, "'('")?;
        let value = self.parse_expr()?;
        self.expect(TokenKind::CloseParenthesis, "')'")?;
        Ok(Stmt::Print(value))
    }

    /// Brace-delimited statement list; trailing semicolons optional.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::OpenBrace, "'{'")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::CloseBrace) {
            if self.at_eof() {
                return Err(self.unexpected("'}'"));
            }
            statements.push(self.parse_statement()?);
            self.match_kind(TokenKind::Semicolon);
        }
        self.expect(TokenKind::CloseBrace, "'}'")?;
        Ok(Block { statements })
    }
}
