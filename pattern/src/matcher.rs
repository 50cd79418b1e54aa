use model::RegexNode;

use crate::parser::parse_regex;

/// Result of matching a tree against an input string: the ordered
/// decision trace, the position reached, and whether the whole input
/// was consumed. A failed match is ordinary data, not an error.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MatchReport {
    pub trace: Vec<String>,
    pub end: usize,
    pub matched: bool,
}

/// Outcome of one node attempt, folded upward by the parent combinator.
struct Step {
    trace: Vec<String>,
    end: usize,
    ok: bool,
}

/// Match the entire tree against a prefix of `input` starting at
/// position 0. Single depth-first attempt per node: alternation tries
/// options left to right and keeps every attempted trace, repeats are
/// greedy only, and no choice is revisited once a sibling has consumed
/// input. Positions in the trace are character offsets.
pub fn match_tree(tree: &RegexNode, input: &str) -> MatchReport {
    let chars: Vec<char> = input.chars().collect();
    let step = process_node(tree, &chars, 0);

    let mut trace = step.trace;
    let matched = step.ok && step.end == chars.len();
    if !step.ok {
        trace.push("Matching failed.".to_string());
    } else if step.end < chars.len() {
        trace.push(format!("Extra characters remain after position {}.", step.end));
    } else {
        trace.push("String fully matched the pattern!".to_string());
    }

    MatchReport { trace, end: step.end, matched }
}

/// Parse and match in one call, reporting everything as a printable
/// trace. Never fails: a malformed pattern becomes an error line in the
/// returned string.
pub fn dynamic_sequence_processing(pattern: &str, input: &str) -> String {
    match parse_regex(pattern) {
        Ok(tree) => match_tree(&tree, input).trace.join("\n"),
        Err(err) => format!("Regex parsing error: {err}"),
    }
}

fn process_node(node: &RegexNode, chars: &[char], pos: usize) -> Step {
    match node {
        RegexNode::Literal(value) => {
            let literal: Vec<char> = value.chars().collect();
            if chars[pos.min(chars.len())..].starts_with(&literal) {
                Step {
                    trace: vec![format!("Matched literal '{value}' at position {pos}")],
                    end: pos + literal.len(),
                    ok: true,
                }
            } else {
                Step {
                    trace: vec![format!("Failed to match literal '{value}' at position {pos}")],
                    end: pos,
                    ok: false,
                }
            }
        }

        RegexNode::Sequence(elements) => {
            let mut trace = Vec::new();
            let mut current = pos;
            for element in elements {
                let step = process_node(element, chars, current);
                trace.extend(step.trace);
                if !step.ok {
                    // First failing element aborts the sequence.
                    return Step { trace, end: step.end, ok: false };
                }
                current = step.end;
            }
            Step { trace, end: current, ok: true }
        }

        RegexNode::Alternation(options) => {
            let mut trace = Vec::new();
            for option in options {
                let step = process_node(option, chars, pos);
                if step.ok {
                    trace.push(format!("Matched alternation option at position {pos}"));
                    trace.extend(step.trace);
                    return Step { trace, end: step.end, ok: true };
                }
                // Record the failed attempt before trying the next option.
                trace.extend(step.trace);
            }
            trace.push(format!("Failed to match any alternation option at position {pos}"));
            Step { trace, end: pos, ok: false }
        }

        RegexNode::Repeat { inner, min, max } => {
            let mut trace = Vec::new();
            let mut count = 0;
            let mut current = pos;

            // Greedy: keep consuming while the inner node both succeeds
            // and advances. A success without progress would loop
            // forever on a nullable inner, so it ends the repeat.
            while count < *max {
                let step = process_node(inner, chars, current);
                if step.ok && step.end > current {
                    trace.extend(step.trace);
                    count += 1;
                    current = step.end;
                } else {
                    break;
                }
            }

            if count < *min {
                trace.push(format!(
                    "Repeat failed: expected at least {min} matches but got {count} at position {pos}"
                ));
                // The repeat as a whole fails where it started, even
                // though partial progress stays in the trace.
                return Step { trace, end: pos, ok: false };
            }
            trace.push(format!(
                "Matched repeat node {count} times from position {pos} to {current}"
            ));
            Step { trace, end: current, ok: true }
        }
    }
}
