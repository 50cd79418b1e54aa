use model::RegexNode;

/// Enumerate every string the tree can match, in grammar order (not
/// sorted). Duplicates arising from overlapping alternation branches
/// are preserved.
///
/// Output size is the product of per-node branching factors, so nested
/// quantifiers make it explode: `((A|B)*)*` with the default bound of 5
/// is already in the millions. Callers enumerating untrusted patterns
/// should lower the repeat bound at parse time.
pub fn generate(node: &RegexNode) -> Vec<String> {
    match node {
        RegexNode::Literal(value) => vec![value.clone()],
        RegexNode::Sequence(elements) => {
            let mut result = vec![String::new()];
            for element in elements {
                result = cross_concat(&result, &generate(element));
            }
            result
        }
        RegexNode::Alternation(options) => {
            options.iter().flat_map(generate).collect()
        }
        RegexNode::Repeat { inner, min, max } => {
            let subs = generate(inner);
            let mut result = Vec::new();
            for count in *min..=*max {
                if count == 0 {
                    result.push(String::new());
                } else {
                    let mut fold = vec![String::new()];
                    for _ in 0..count {
                        fold = cross_concat(&fold, &subs);
                    }
                    result.extend(fold);
                }
            }
            result
        }
    }
}

/// Cartesian concatenation: every prefix followed by every suffix,
/// prefix-major order.
fn cross_concat(prefixes: &[String], suffixes: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(prefixes.len() * suffixes.len());
    for prefix in prefixes {
        for suffix in suffixes {
            out.push(format!("{prefix}{suffix}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_regex;

    #[test]
    fn generate_literal_is_singleton() {
        let tree = RegexNode::Literal("AB".to_string());
        assert_eq!(generate(&tree), vec!["AB".to_string()]);
    }

    #[test]
    fn generate_sequence_is_product_of_sizes() {
        let tree = parse_regex("(A|B)(C|D|E)").unwrap();
        let strings = generate(&tree);
        assert_eq!(strings.len(), 2 * 3);
        assert_eq!(strings, vec!["AC", "AD", "AE", "BC", "BD", "BE"]);
    }

    #[test]
    fn generate_alternation_preserves_order_and_duplicates() {
        let tree = parse_regex("A|B|A").unwrap();
        assert_eq!(generate(&tree), vec!["A", "B", "A"]);
    }

    #[test]
    fn generate_star_includes_empty_string() {
        let tree = parse_regex("W*").unwrap();
        let strings = generate(&tree);
        assert_eq!(strings[0], "");
        assert_eq!(strings.len(), 6); // counts 0 through 5
        assert_eq!(strings[5], "WWWWW");
    }

    #[test]
    fn generate_exact_zero_is_empty_string() {
        let tree = parse_regex("A^0").unwrap();
        assert_eq!(generate(&tree), vec!["".to_string()]);
    }

    #[test]
    fn generate_exact_repetition() {
        let tree = parse_regex("O^3").unwrap();
        assert_eq!(generate(&tree), vec!["OOO".to_string()]);
    }

    #[test]
    fn generate_repeat_of_alternation_folds_each_count() {
        let tree = parse_regex("(A|B)^2").unwrap();
        assert_eq!(generate(&tree), vec!["AA", "AB", "BA", "BB"]);
    }

    #[test]
    fn generate_variant_expression_has_expected_count() {
        // (S|T)(U|V)W*Y+24: 2 * 2 * 6 W-counts * 5 Y-counts.
        let tree = parse_regex("(S|T)(U|V)W*Y+24").unwrap();
        let strings = generate(&tree);
        assert_eq!(strings.len(), 120);
        assert_eq!(strings[0], "SUY24");
        assert!(strings.contains(&"TVWWWWWYYYYY24".to_string()));
        assert!(strings.iter().all(|s| s.ends_with("24")));
    }
}
