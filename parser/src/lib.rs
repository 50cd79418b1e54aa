// Parser module: converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: core Parser struct, token cursor, top-level program loop
// - statements.rs: statement dispatch (var, if, while, function, return, print, assignment)
// - expressions.rs: expression parsing with precedence climbing

mod expressions;
mod parser;
mod statements;

use model::{ParseError, Program, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer
///
/// # Returns
/// * `Ok(Program)` - Successfully parsed program
/// * `Err(ParseError)` - Fatal parse error carrying the offending token's position
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
