use model::{BinaryOp, Expr, ParseError, TokenKind, Value};

use crate::parser::Parser;

/// Expression parsing with precedence climbing: comparisons bind
/// loosest, then additive, then multiplicative. All tiers are
/// left-associative.
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, ParseError>;
}

impl ExpressionParser for Parser<'_> {
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_comparison()
    }
}

impl Parser<'_> {
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_additive()?;
        while let Some(op) = self.match_operator(&[
            (TokenKind::EqualEqual, BinaryOp::EqualEqual),
            (TokenKind::NotEqual, BinaryOp::NotEqual),
            (TokenKind::Less, BinaryOp::Less),
            (TokenKind::Greater, BinaryOp::Greater),
            (TokenKind::LessEqual, BinaryOp::LessEqual),
            (TokenKind::GreaterEqual, BinaryOp::GreaterEqual),
        ]) {
            let right = self.parse_additive()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;
        while let Some(op) = self.match_operator(&[
            (TokenKind::Plus, BinaryOp::Add),
            (TokenKind::Minus, BinaryOp::Sub),
        ]) {
            let right = self.parse_term()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while let Some(op) = self.match_operator(&[
            (TokenKind::Star, BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
        ]) {
            let right = self.parse_primary()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.unexpected("an expression"));
        };
        match token.kind {
            TokenKind::Int => {
                let token = self.advance().unwrap();
                let value = token
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::UnexpectedToken {
                        expected: "an integer literal in range".to_string(),
                        found: token.text.clone(),
                        line: token.line,
                        column: token.column,
                    })?;
                Ok(Expr::Literal(Value::Int(value)))
            }
            TokenKind::Float => {
                let token = self.advance().unwrap();
                let value = token
                    .text
                    .parse::<f64>()
                    .map_err(|_| ParseError::UnexpectedToken {
                        expected: "a float literal".to_string(),
                        found: token.text.clone(),
                        line: token.line,
                        column: token.column,
                    })?;
                Ok(Expr::Literal(Value::Float(value)))
            }
            TokenKind::Str => {
                let text = self.advance().unwrap().text.clone();
                // Lexer keeps the quotes in the token text.
                let inner = text[1..text.len() - 1].to_string();
                Ok(Expr::Literal(Value::Str(inner)))
            }
            TokenKind::Bool => {
                let text = self.advance().unwrap().text.clone();
                Ok(Expr::Literal(Value::Bool(text == "true")))
            }
            TokenKind::OpenParenthesis => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::CloseParenthesis, "')'")?;
                Ok(expr)
            }
            TokenKind::Identifier => {
                if self.check_at(1, TokenKind::OpenParenthesis) {
                    self.parse_call()
                } else {
                    let name = self.advance().unwrap().text.clone();
                    Ok(Expr::Identifier(name))
                }
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    pub(crate) fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let name = self.expect(TokenKind::Identifier, "a function name")?.text;
        self.expect(TokenKind::OpenParenthesis, "'('")?;

        let mut args = Vec::new();
        if !self.check(TokenKind::CloseParenthesis) {
            args.push(self.parse_expr()?);
            while self.match_kind(TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }

        self.expect(TokenKind::CloseParenthesis, "')'")?;
        Ok(Expr::Call { name, args })
    }

    /// Consume the current token if it is one of the listed operator
    /// kinds, mapping it to the AST operator.
    fn match_operator(&mut self, table: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let kind = self.peek()?.kind;
        for (token_kind, op) in table {
            if kind == *token_kind {
                self.pos += 1;
                return Some(*op);
            }
        }
        None
    }
}
