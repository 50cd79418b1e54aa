use model::{LexError, Token, TokenKind};
use regex_lite::Regex;

use crate::keywords::keyword_or_identifier;

/// Which classifier to run on a rule's matched text.
#[derive(Clone, Copy)]
enum RuleClass {
    Float,
    Int,
    Str,
    Operator,
    Word,
}

/// Rule-list lexer over a fixed, ordered set of patterns. At each
/// position the first rule whose pattern matches wins; there is no
/// longest-match competition across rules, so rule order is load-bearing
/// (float before int, `==` before `=`).
pub(crate) struct RuleLexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    rules: Vec<(RuleClass, Regex)>,
}

impl<'a> RuleLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let rules = vec![
            (RuleClass::Float, Regex::new(r"^\d+\.\d+").unwrap()),
            (RuleClass::Int, Regex::new(r"^\d+").unwrap()),
            (RuleClass::Str, Regex::new(r#"^"[^"]*""#).unwrap()),
            (RuleClass::Operator, Regex::new(r"^(==|!=|<=|>=)").unwrap()),
            (
                RuleClass::Operator,
                Regex::new(r"^[+\-*/=<>(){},;]").unwrap(),
            ),
            (RuleClass::Word, Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap()),
        ];
        RuleLexer { input, pos: 0, line: 1, column: 1, rules }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            if self.pos >= self.input.len() {
                break;
            }
            tokens.push(self.lex_next_token()?);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line, self.column));
        Ok(tokens)
    }

    fn lex_next_token(&mut self) -> Result<Token, LexError> {
        let rest = &self.input[self.pos..];
        let (line, column) = (self.line, self.column);

        for (class, pattern) in &self.rules {
            let Some(found) = pattern.find(rest) else {
                continue;
            };
            let text = found.as_str();
            let kind = classify(*class, text);
            self.advance_over(text.len());
            return Ok(Token::new(kind, text, line, column));
        }

        // No rule matched. A lone '"' means the string rule failed only
        // because the closing quote is missing.
        let ch = rest.chars().next().unwrap_or('\0');
        if ch == '"' {
            return Err(LexError::UnterminatedString { line, column });
        }
        Err(LexError::UnrecognizedCharacter { ch, line, column })
    }

    /// Whitespace separates tokens; `#` comments run to end of line.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let rest = &self.input[self.pos..];
            let Some(ch) = rest.chars().next() else {
                return;
            };
            if ch.is_whitespace() {
                self.advance_over(ch.len_utf8());
            } else if ch == '#' {
                let len = rest.find('\n').unwrap_or(rest.len());
                self.advance_over(len);
            } else {
                return;
            }
        }
    }

    /// Consume `len` bytes, keeping line/column accounting in step.
    fn advance_over(&mut self, len: usize) {
        for ch in self.input[self.pos..self.pos + len].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += len;
    }
}

fn classify(class: RuleClass, text: &str) -> TokenKind {
    match class {
        RuleClass::Float => TokenKind::Float,
        RuleClass::Int => TokenKind::Int,
        RuleClass::Str => TokenKind::Str,
        RuleClass::Word => keyword_or_identifier(text),
        RuleClass::Operator => match text {
            "==" => TokenKind::EqualEqual,
            "!=" => TokenKind::NotEqual,
            "<=" => TokenKind::LessEqual,
            ">=" => TokenKind::GreaterEqual,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Star,
            "/" => TokenKind::Slash,
            "=" => TokenKind::Equal,
            "<" => TokenKind::Less,
            ">" => TokenKind::Greater,
            "(" => TokenKind::OpenParenthesis,
            ")" => TokenKind::CloseParenthesis,
            "{" => TokenKind::OpenBrace,
            "}" => TokenKind::CloseBrace,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            other => unreachable!("operator rule matched unknown text {other:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins_float_over_int() {
        let tokens = RuleLexer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Float);
        assert_eq!(tokens[0].text, "3.14");
    }

    #[test]
    fn two_char_operators_beat_single_char() {
        let tokens = RuleLexer::new("<= == !=").tokenize().unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LessEqual,
                TokenKind::EqualEqual,
                TokenKind::NotEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let tokens = RuleLexer::new("var x\n  = 1").tokenize().unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1)); // var
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5)); // x
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3)); // =
        assert_eq!((tokens[3].line, tokens[3].column), (2, 5)); // 1
    }

    #[test]
    fn unterminated_string_is_reported() {
        let err = RuleLexer::new("\"abc").tokenize().unwrap_err();
        assert_eq!(err, LexError::UnterminatedString { line: 1, column: 1 });
    }
}
