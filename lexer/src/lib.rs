mod keywords;
mod rules;

use model::{LexError, Token};
use rules::RuleLexer;

/// Tokenize source text. Pure function of the input: every call runs a
/// fresh rule lexer, so concurrent calls on different inputs are safe.
/// The returned sequence always ends with a single `Eof` token.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RuleLexer::new(input);
    lexer.tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).expect("lexing should succeed").iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_simple_identifier_and_constant() {
        let tokens = lex("foo 123").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[1].kind, TokenKind::Int);
        assert_eq!(tokens[1].text, "123");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn lex_keywords_and_operators() {
        assert_eq!(
            kinds("var x = 1; if (x == 1) return x;"),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::If,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::EqualEqual,
                TokenKind::Int,
                TokenKind::CloseParenthesis,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_ignores_comments_and_whitespace() {
        let src = "
            # full-line comment
            var x = 2; # trailing comment
        ";
        assert_eq!(
            kinds(src),
            vec![
                TokenKind::Var,
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_string_literal_keeps_quotes_in_text() {
        let tokens = lex(r#""hello world""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, r#""hello world""#);
    }

    #[test]
    fn lex_empty_string_literal() {
        let tokens = lex(r#""""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, r#""""#);
    }

    #[test]
    fn lex_float_literal() {
        let tokens = lex("x = 3.14").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Float);
        assert_eq!(tokens[2].text, "3.14");
    }

    #[test]
    fn lex_bool_literals() {
        let tokens = lex("true false").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Bool);
        assert_eq!(tokens[0].text, "true");
        assert_eq!(tokens[1].kind, TokenKind::Bool);
        assert_eq!(tokens[1].text, "false");
    }

    #[test]
    fn lex_empty_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn lex_whitespace_only() {
        assert_eq!(kinds("   \t\n  \r\n  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        assert_eq!(
            kinds("(x+1)"),
            vec![
                TokenKind::OpenParenthesis,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Int,
                TokenKind::CloseParenthesis,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_unrecognized_character_fails_with_position() {
        let err = lex("var x = @;").unwrap_err();
        assert_eq!(
            err,
            model::LexError::UnrecognizedCharacter { ch: '@', line: 1, column: 9 }
        );
    }

    #[test]
    fn lex_control_flow_keywords() {
        assert_eq!(
            kinds("if else while for function return var print"),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::For,
                TokenKind::Function,
                TokenKind::Return,
                TokenKind::Var,
                TokenKind::Print,
                TokenKind::Eof,
            ]
        );
    }
}
