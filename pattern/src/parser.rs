use model::{ParseError, RegexNode};

/// Upper bound applied to the open-ended `*` and `+` quantifiers.
///
/// The enumeration in [`crate::generate`] must be finite, so "zero or
/// more" is read as "zero to bound". Tune per parser with
/// [`RegexParser::with_repeat_bound`].
pub const DEFAULT_REPEAT_BOUND: usize = 5;

/// Characters that terminate a literal run.
const SPECIAL: [char; 6] = ['(', ')', '*', '+', '|', '^'];

/// Recursive-descent parser over the pattern characters. Lexing and
/// parsing happen in one pass; positions in errors are character
/// offsets into the pattern text.
pub struct RegexParser {
    chars: Vec<char>,
    pos: usize,
    repeat_bound: usize,
}

/// Parse a pattern with the default repeat bound.
pub fn parse_regex(text: &str) -> Result<RegexNode, ParseError> {
    RegexParser::new(text).parse()
}

impl RegexParser {
    pub fn new(text: &str) -> Self {
        RegexParser {
            chars: text.chars().collect(),
            pos: 0,
            repeat_bound: DEFAULT_REPEAT_BOUND,
        }
    }

    /// Replace the default `*`/`+` upper bound. The bound directly
    /// controls how fast generated sets grow under nesting.
    pub fn with_repeat_bound(mut self, bound: usize) -> Self {
        self.repeat_bound = bound;
        self
    }

    /// Parse the whole pattern. Fails on structural errors and on
    /// trailing characters after the top-level expression.
    pub fn parse(mut self) -> Result<RegexNode, ParseError> {
        let tree = self.parse_expression(false)?;
        if self.pos != self.chars.len() {
            return Err(ParseError::TrailingInput { offset: self.pos });
        }
        Ok(tree)
    }

    /// expression := sequence ('|' sequence)*
    ///
    /// When `in_group` is set, a `)` stops the expression instead of
    /// being consumed as input.
    fn parse_expression(&mut self, in_group: bool) -> Result<RegexNode, ParseError> {
        let mut alternatives = Vec::new();
        let mut sequence = Vec::new();

        while let Some(ch) = self.peek() {
            if in_group && ch == ')' {
                break;
            }
            if ch == '|' {
                self.pos += 1;
                alternatives.push(sequence_to_node(std::mem::take(&mut sequence)));
            } else {
                let start = self.pos;
                let atom = self.parse_atom()?;
                if self.pos == start {
                    // A stray ')' cannot start an atom and consumes
                    // nothing; leave it for the trailing-input check.
                    break;
                }
                sequence.push(atom);
            }
        }
        alternatives.push(sequence_to_node(sequence));

        // A single branch is not an alternation.
        if alternatives.len() == 1 {
            Ok(alternatives.pop().unwrap())
        } else {
            Ok(RegexNode::Alternation(alternatives))
        }
    }

    /// atom := (literal-run | '(' expression ')') quantifier?
    fn parse_atom(&mut self) -> Result<RegexNode, ParseError> {
        let node = if self.peek() == Some('(') {
            let open_offset = self.pos;
            self.pos += 1;
            let inner = self.parse_expression(true)?;
            if self.peek() != Some(')') {
                return Err(ParseError::UnbalancedParenthesis { open_offset });
            }
            self.pos += 1;
            inner
        } else {
            // Maximal run of ordinary characters. The run may be empty
            // when a quantifier appears with nothing to repeat; it then
            // applies to the empty literal.
            let start = self.pos;
            while let Some(ch) = self.peek() {
                if SPECIAL.contains(&ch) {
                    break;
                }
                self.pos += 1;
            }
            RegexNode::Literal(self.chars[start..self.pos].iter().collect())
        };

        self.parse_quantifier(node)
    }

    /// quantifier := '*' | '+' | '^' integer
    fn parse_quantifier(&mut self, node: RegexNode) -> Result<RegexNode, ParseError> {
        match self.peek() {
            Some('*') => {
                self.pos += 1;
                Ok(repeat(node, 0, self.repeat_bound))
            }
            Some('+') => {
                self.pos += 1;
                Ok(repeat(node, 1, self.repeat_bound))
            }
            Some('^') => {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos += 1;
                }
                if self.pos == start {
                    return Err(ParseError::MissingRepeatCount { offset: start });
                }
                let digits: String = self.chars[start..self.pos].iter().collect();
                let count: usize = digits
                    .parse()
                    .map_err(|_| ParseError::MissingRepeatCount { offset: start })?;
                Ok(repeat(node, count, count))
            }
            _ => Ok(node),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }
}

/// Collapse a parsed sequence: zero atoms is the empty literal, one
/// atom needs no wrapper.
fn sequence_to_node(mut sequence: Vec<RegexNode>) -> RegexNode {
    match sequence.len() {
        0 => RegexNode::Literal(String::new()),
        1 => sequence.pop().unwrap(),
        _ => RegexNode::Sequence(sequence),
    }
}

fn repeat(inner: RegexNode, min: usize, max: usize) -> RegexNode {
    RegexNode::Repeat { inner: Box::new(inner), min, max }
}
