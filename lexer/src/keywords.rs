use model::TokenKind;

/// Classify a matched word as a keyword, a boolean literal, or an
/// identifier. Keywords are reserved: `print` never lexes as an
/// identifier, which is what lets the parser treat `print(x)` as a
/// print statement rather than a generic call.
pub(crate) fn keyword_or_identifier(word: &str) -> TokenKind {
    match word {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "function" => TokenKind::Function,
        "return" => TokenKind::Return,
        "var" => TokenKind::Var,
        "print" => TokenKind::Print,
        "true" | "false" => TokenKind::Bool,
        _ => TokenKind::Identifier,
    }
}
