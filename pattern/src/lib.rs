// Pattern engine: a small regex dialect parsed by recursive descent
// into a model::RegexNode tree, plus the two tree evaluators.
//
// Module organization:
// - parser.rs: single-pass character parser (lexing and parsing fused)
// - generator.rs: exhaustive enumeration of every matching string
// - matcher.rs: step-by-step greedy prefix matcher with decision trace
//
// Dialect: literals, grouping, '|' alternation, and the quantifiers
// '*', '+', '^N'. No backreferences, lazy quantifiers, or character
// classes. '*' and '+' are capped at a configurable repeat bound so
// enumeration stays finite.

mod generator;
mod matcher;
mod parser;

pub use generator::generate;
pub use matcher::{MatchReport, dynamic_sequence_processing, match_tree};
pub use parser::{DEFAULT_REPEAT_BOUND, RegexParser, parse_regex};

use model::ParseError;

/// Parse a pattern and enumerate every string it can match.
pub fn generate_valid_from_regex(pattern: &str) -> Result<Vec<String>, ParseError> {
    let tree = parse_regex(pattern)?;
    Ok(generate(&tree))
}
