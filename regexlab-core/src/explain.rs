//! Human-readable explanations of regex patterns
//!
//! The scanner cuts a pattern into tokens; this module turns each token into
//! a [`Component`] with a description from fixed lookup tables. Group
//! components carry the components of their body, so nested structure is
//! explained recursively.
//!
//! Examples and warnings are shallow heuristics over the raw pattern. They
//! illustrate; they are not generated from the pattern's language.

use serde::{Deserialize, Serialize};

use crate::engine::CompiledPattern;
use crate::error::{Result, Span};
use crate::flags::Flags;
use crate::lexer::{Anchor, Escape, GroupKind, Quantifier, Repetition, Scanner, Token, TokenKind};
use crate::validation;

/// Most examples returned by [`generate_examples`]
pub const MAX_EXAMPLES: usize = 3;

/// Groups nested deeper than this are described without children
pub const MAX_NESTING: usize = 64;

/// The display category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// A character matched as itself
    Literal,
    /// A bracket class or the dot
    CharacterClass,
    /// A repetition count
    Quantifier,
    /// A parenthesized group
    Group,
    /// `^` or `$`
    Anchor,
    /// A backslash escape
    Escape,
    /// Inline flags such as `(?i)`
    Modifier,
    /// `|`
    Alternation,
}

/// One explained piece of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// The display category
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// The source text of the piece
    pub value: String,
    /// What the piece means
    pub description: String,
    /// Character offsets in the pattern
    pub position: Span,
    /// Components of a group's body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

/// Full explanation of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// The pattern as submitted
    pub pattern: String,
    /// The canonical flag string
    pub flags: String,
    /// Top-level component descriptions, comma separated
    pub description: String,
    /// The top-level components
    pub components: Vec<Component>,
    /// Illustrative sample strings
    pub examples: Vec<String>,
    /// Style warnings
    pub warnings: Vec<String>,
}

/// Explain `pattern` after checking that the native engine accepts it
pub fn explain_regex(pattern: &str, flags: &str) -> Result<Explanation> {
    validation::pattern(pattern)?;
    let parsed_flags = Flags::parse(flags)?;
    CompiledPattern::compile(pattern, &parsed_flags)?;

    let components = Describer::new(pattern, parsed_flags).describe_all();
    let description = generate_description(&components);
    let examples = generate_examples(pattern);
    let warnings = generate_warnings(pattern, &components);

    Ok(Explanation {
        pattern: pattern.to_string(),
        flags: parsed_flags.to_string(),
        description,
        components,
        examples,
        warnings,
    })
}

/// Split any string into explained components.
///
/// Never fails: malformed input still yields components.
pub fn parse_components(pattern: &str) -> Vec<Component> {
    Describer::new(pattern, Flags::default()).describe_all()
}

/// Join the descriptions of top-level components
pub fn generate_description(components: &[Component]) -> String {
    components
        .iter()
        .map(|c| c.description.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sample strings suggested by shorthand pieces in the pattern
pub fn generate_examples(pattern: &str) -> Vec<String> {
    let mut examples = Vec::new();
    if pattern.contains(r"\d") {
        examples.extend(["123", "456", "789"]);
    }
    if pattern.contains("[a-z]") {
        examples.extend(["abc", "def", "xyz"]);
    }
    if pattern.contains(r"\w") {
        examples.extend(["hello", "world", "test123"]);
    }
    examples
        .into_iter()
        .take(MAX_EXAMPLES)
        .map(String::from)
        .collect()
}

/// Style warnings for the pattern
pub fn generate_warnings(pattern: &str, components: &[Component]) -> Vec<String> {
    let mut warnings = Vec::new();

    if pattern.contains(".*") && !pattern.contains('^') && !pattern.contains('$') {
        warnings.push("Consider using anchors (^, $) to avoid partial matches".to_string());
    }

    if pattern.contains(r"\d{4}") && !pattern.contains(r"\b") {
        warnings.push("Consider using word boundaries for number matching".to_string());
    }

    if has_nested_quantifier(components) {
        warnings.push(
            "Nested quantifiers such as (a+)+ can cause catastrophic backtracking".to_string(),
        );
    }

    warnings
}

/// A group with an unbounded quantifier inside, itself repeated without bound
fn has_nested_quantifier(components: &[Component]) -> bool {
    components.windows(2).any(|pair| {
        pair[0].kind == ComponentKind::Group
            && is_unbounded_quantifier(&pair[1])
            && contains_unbounded_quantifier(&pair[0].children)
    }) || components
        .iter()
        .any(|c| has_nested_quantifier(&c.children))
}

fn contains_unbounded_quantifier(components: &[Component]) -> bool {
    components
        .iter()
        .any(|c| is_unbounded_quantifier(c) || contains_unbounded_quantifier(&c.children))
}

fn is_unbounded_quantifier(component: &Component) -> bool {
    component.kind == ComponentKind::Quantifier
        && (component.value.starts_with('*')
            || component.value.starts_with('+')
            || component.value.trim_end_matches('?').ends_with(",}"))
}

/// Walks a pattern, numbering capturing groups as it goes
struct Describer {
    chars: Vec<char>,
    flags: Flags,
    groups_seen: u32,
}

impl Describer {
    fn new(pattern: &str, flags: Flags) -> Self {
        Describer {
            chars: pattern.chars().collect(),
            flags,
            groups_seen: 0,
        }
    }

    fn describe_all(&mut self) -> Vec<Component> {
        self.describe_span(Span::new(0, self.chars.len()), 0)
    }

    fn describe_span(&mut self, span: Span, depth: usize) -> Vec<Component> {
        let tokens: Vec<Token> = Scanner::within(&self.chars, span).collect();
        tokens
            .into_iter()
            .map(|token| self.describe(token, depth))
            .collect()
    }

    /// Count the capturing groups inside `body` without describing them
    fn skip_groups(&mut self, body: Span) {
        let mut pending = vec![body];
        while let Some(span) = pending.pop() {
            for token in Scanner::within(&self.chars, span) {
                if let TokenKind::Group { kind, body, .. } = token.kind {
                    if kind.is_capturing() {
                        self.groups_seen += 1;
                    }
                    pending.push(body);
                }
            }
        }
    }

    fn describe(&mut self, token: Token, depth: usize) -> Component {
        let mut children = Vec::new();

        let (kind, description) = match &token.kind {
            TokenKind::Escape(escape) => (ComponentKind::Escape, escape_description(escape)),
            TokenKind::CharClass { negated, closed } => (
                ComponentKind::CharacterClass,
                class_description(&token.text, *negated, *closed),
            ),
            TokenKind::Group { kind, body, closed } => {
                let number = if kind.is_capturing() {
                    self.groups_seen += 1;
                    Some(self.groups_seen)
                } else {
                    None
                };
                let mut description = group_description(kind, number);
                if depth < MAX_NESTING {
                    children = self.describe_span(*body, depth + 1);
                } else {
                    self.skip_groups(*body);
                    if !body.is_empty() {
                        description.push_str(" (contents not expanded)");
                    }
                }
                if !closed {
                    description.push_str(" (unclosed)");
                }
                (ComponentKind::Group, description)
            }
            TokenKind::InlineFlags(letters) => (
                ComponentKind::Modifier,
                format!("Inline flags: {}", flag_names(letters)),
            ),
            TokenKind::Anchor(Anchor::Start) => {
                (ComponentKind::Anchor, "Start of line".to_string())
            }
            TokenKind::Anchor(Anchor::End) => (ComponentKind::Anchor, "End of line".to_string()),
            TokenKind::Quantifier(quantifier) => (
                ComponentKind::Quantifier,
                quantifier_description(quantifier),
            ),
            TokenKind::Dot => (
                ComponentKind::CharacterClass,
                if self.flags.dot_all {
                    "Any character".to_string()
                } else {
                    "Any character except newline".to_string()
                },
            ),
            TokenKind::Alternation => (
                ComponentKind::Alternation,
                "Alternation: either the expression before or after".to_string(),
            ),
            TokenKind::Literal(c) => (ComponentKind::Literal, format!("Literal character '{c}'")),
        };

        Component {
            kind,
            value: token.text,
            description,
            position: token.span,
            children,
        }
    }
}

fn escape_description(escape: &Escape) -> String {
    match escape {
        Escape::Char(c) => match c {
            'd' => "Any digit (0-9)".to_string(),
            'D' => "Any non-digit".to_string(),
            'w' => "Word character (a-z, A-Z, 0-9, _)".to_string(),
            'W' => "Non-word character".to_string(),
            's' => "Whitespace character".to_string(),
            'S' => "Non-whitespace character".to_string(),
            'b' => "Word boundary".to_string(),
            'B' => "Non-word boundary".to_string(),
            'n' => "Newline character".to_string(),
            't' => "Tab character".to_string(),
            'r' => "Carriage return".to_string(),
            'f' => "Form feed character".to_string(),
            'v' => "Vertical tab character".to_string(),
            '0' => "Null character".to_string(),
            'A' => "Start of input".to_string(),
            'z' => "End of input".to_string(),
            c => format!("Escaped character '{c}'"),
        },
        Escape::CodePoint(value) => match char::from_u32(*value) {
            Some(c) => format!("Character U+{value:04X} ('{c}')"),
            None => format!("Invalid code point U+{value:04X}"),
        },
        Escape::Backref(n) => format!("Backreference to group #{n}"),
        Escape::NamedBackref(name) => format!("Backreference to group '{name}'"),
        Escape::Property { negated: false, name } => {
            format!("Character with Unicode property '{name}'")
        }
        Escape::Property { negated: true, name } => {
            format!("Character without Unicode property '{name}'")
        }
        Escape::Trailing => "Trailing backslash".to_string(),
    }
}

fn class_description(text: &str, negated: bool, closed: bool) -> String {
    let shape = match text {
        "[a-z]" => Some("Lowercase letters"),
        "[A-Z]" => Some("Uppercase letters"),
        "[0-9]" => Some("Digits"),
        "[a-zA-Z]" => Some("Letters"),
        "[a-zA-Z0-9]" => Some("Alphanumeric characters"),
        _ => None,
    };
    if let Some(shape) = shape {
        return format!("Character class: {shape}");
    }

    let inner = text.strip_prefix('[').unwrap_or(text);
    let inner = if negated {
        inner.strip_prefix('^').unwrap_or(inner)
    } else {
        inner
    };
    let inner = if closed {
        inner.strip_suffix(']').unwrap_or(inner)
    } else {
        inner
    };

    if negated {
        format!("Character class: Any character except: {inner}")
    } else {
        format!("Character class: Characters: {inner}")
    }
}

fn quantifier_description(quantifier: &Quantifier) -> String {
    let base = match quantifier.repetition {
        Repetition::ZeroOrMore => "Zero or more times".to_string(),
        Repetition::OneOrMore => "One or more times".to_string(),
        Repetition::ZeroOrOne => "Zero or one time (optional)".to_string(),
        Repetition::Exactly(n) => format!("Exactly {n} times"),
        Repetition::AtLeast(n) => format!("At least {n} times"),
        Repetition::Between(n, m) => format!("Between {n} and {m} times"),
    };
    if quantifier.lazy {
        format!("{base} (lazy)")
    } else {
        base
    }
}

fn group_description(kind: &GroupKind, number: Option<u32>) -> String {
    match kind {
        GroupKind::Capturing => match number {
            Some(n) => format!("Capturing group #{n}"),
            None => "Capturing group".to_string(),
        },
        GroupKind::NonCapturing => "Non-capturing group".to_string(),
        GroupKind::Named(name) => format!("Named capturing group '{name}'"),
        GroupKind::Lookahead => "Positive lookahead".to_string(),
        GroupKind::NegativeLookahead => "Negative lookahead".to_string(),
        GroupKind::Lookbehind => "Positive lookbehind".to_string(),
        GroupKind::NegativeLookbehind => "Negative lookbehind".to_string(),
        GroupKind::Atomic => "Atomic group".to_string(),
        GroupKind::Flags(letters) => format!("Group with flags: {}", flag_names(letters)),
    }
}

/// `"i-m"` reads "case-insensitive; disabled: multi-line"
fn flag_names(letters: &str) -> String {
    let name = |c: char| match c {
        'i' => "case-insensitive".to_string(),
        'm' => "multi-line".to_string(),
        's' => "dot matches newline".to_string(),
        'x' => "ignore whitespace".to_string(),
        'u' => "unicode".to_string(),
        'U' => "swap greed".to_string(),
        c => format!("'{c}'"),
    };
    let list = |part: &str| part.chars().map(name).collect::<Vec<_>>().join(", ");

    match letters.split_once('-') {
        Some((on, off)) if on.is_empty() => format!("disabled: {}", list(off)),
        Some((on, off)) => format!("{}; disabled: {}", list(on), list(off)),
        None => list(letters),
    }
}
