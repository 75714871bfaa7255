//! Scanner for splitting regex patterns into display tokens
//!
//! This module walks a pattern left to right and cuts it into tokens:
//! escapes, bracket classes, whole groups, anchors, quantifiers, dots,
//! alternation bars and literals. It does not validate the pattern; any
//! string scans, and the token spans always tile the input exactly.
//!
//! Groups are returned as a single token covering the parentheses, with the
//! span of their body so callers can scan it again for nested structure.

use std::fmt;

use crate::error::Span;

/// An escape sequence after a backslash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escape {
    /// A single escaped character: `\d`, `\n`, `\.` and so on
    Char(char),
    /// `\xHH`, `\uHHHH` or `\u{H...}`
    CodePoint(u32),
    /// `\1`, `\12`
    Backref(u32),
    /// `\k<name>`
    NamedBackref(String),
    /// `\p{Name}` or `\P{Name}`
    Property {
        /// `\P` rather than `\p`
        negated: bool,
        /// The property name
        name: String,
    },
    /// A lone backslash at the end of the pattern
    Trailing,
}

/// How many times the preceding item may repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
    /// `{n}`
    Exactly(u32),
    /// `{n,}`
    AtLeast(u32),
    /// `{n,m}`
    Between(u32, u32),
}

impl Repetition {
    /// Whether there is no upper bound on the count
    pub fn is_unbounded(&self) -> bool {
        matches!(
            self,
            Repetition::ZeroOrMore | Repetition::OneOrMore | Repetition::AtLeast(_)
        )
    }
}

/// A quantifier token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    /// The repetition count
    pub repetition: Repetition,
    /// Followed by `?`
    pub lazy: bool,
}

/// Which kind of group an opening parenthesis starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    /// `(...)`
    Capturing,
    /// `(?:...)`
    NonCapturing,
    /// `(?<name>...)` or `(?P<name>...)`
    Named(String),
    /// `(?=...)`
    Lookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?<=...)`
    Lookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
    /// `(?>...)`
    Atomic,
    /// `(?i:...)`, flags scoped to the group
    Flags(String),
}

impl GroupKind {
    /// Whether the group records a capture
    pub fn is_capturing(&self) -> bool {
        matches!(self, GroupKind::Capturing | GroupKind::Named(_))
    }
}

/// `^` or `$`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `^`
    Start,
    /// `$`
    End,
}

/// What a token is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A backslash escape
    Escape(Escape),
    /// A bracket class `[...]`
    CharClass {
        /// Starts with `[^`
        negated: bool,
        /// Whether the closing `]` was found
        closed: bool,
    },
    /// A parenthesized group, parentheses included
    Group {
        /// The group kind, from its opening prefix
        kind: GroupKind,
        /// The span between the prefix and the closing parenthesis
        body: Span,
        /// Whether the closing `)` was found
        closed: bool,
    },
    /// `(?i)`, flags for the rest of the enclosing group
    InlineFlags(String),
    /// `^` or `$`
    Anchor(Anchor),
    /// `*`, `+`, `?`, `{n,m}` with an optional lazy `?`
    Quantifier(Quantifier),
    /// `.`
    Dot,
    /// `|`
    Alternation,
    /// Any other character
    Literal(char),
}

impl TokenKind {
    /// A short human-readable name for the token kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Escape(_) => "escape",
            TokenKind::CharClass { .. } => "character class",
            TokenKind::Group { .. } => "group",
            TokenKind::InlineFlags(_) => "inline flags",
            TokenKind::Anchor(_) => "anchor",
            TokenKind::Quantifier(_) => "quantifier",
            TokenKind::Dot => "dot",
            TokenKind::Alternation => "alternation",
            TokenKind::Literal(_) => "literal",
        }
    }
}

/// A token and where it sits in the pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// Character offsets of the token in the pattern
    pub span: Span,
    /// The source text of the token
    pub text: String,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` at {}..{}",
            self.kind.name(),
            self.text,
            self.span.start,
            self.span.end
        )
    }
}

enum GroupPrefix {
    Group(GroupKind),
    InlineFlags(String),
}

/// Scanner over a slice of pattern characters
pub struct Scanner<'a> {
    chars: &'a [char],
    position: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over the whole of `chars`
    pub fn new(chars: &'a [char]) -> Self {
        Scanner {
            chars,
            position: 0,
            end: chars.len(),
        }
    }

    /// Create a scanner restricted to `span` of `chars`.
    ///
    /// Token spans stay relative to the full slice.
    pub fn within(chars: &'a [char], span: Span) -> Self {
        let end = span.end.min(chars.len());
        Scanner {
            chars,
            position: span.start.min(end),
            end,
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        if index < self.end {
            self.chars.get(index).copied()
        } else {
            None
        }
    }

    fn current_char(&self) -> Option<char> {
        self.char_at(self.position)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.char_at(self.position + offset)
    }

    fn advance(&mut self) {
        if self.position < self.end {
            self.position += 1;
        }
    }

    /// Get the next token, or `None` at the end of input
    pub fn next_token(&mut self) -> Option<Token> {
        let start = self.position;
        let c = self.current_char()?;

        let kind = match c {
            '\\' => {
                self.advance();
                TokenKind::Escape(self.read_escape())
            }
            '[' => self.read_char_class(),
            '(' => self.read_group(),
            '^' => {
                self.advance();
                TokenKind::Anchor(Anchor::Start)
            }
            '$' => {
                self.advance();
                TokenKind::Anchor(Anchor::End)
            }
            '*' | '+' | '?' => {
                self.advance();
                let repetition = match c {
                    '*' => Repetition::ZeroOrMore,
                    '+' => Repetition::OneOrMore,
                    _ => Repetition::ZeroOrOne,
                };
                TokenKind::Quantifier(self.read_lazy(repetition))
            }
            '{' => match self.read_counted() {
                Some(repetition) => TokenKind::Quantifier(self.read_lazy(repetition)),
                None => {
                    self.advance();
                    TokenKind::Literal('{')
                }
            },
            '.' => {
                self.advance();
                TokenKind::Dot
            }
            '|' => {
                self.advance();
                TokenKind::Alternation
            }
            c => {
                self.advance();
                TokenKind::Literal(c)
            }
        };

        let span = Span::new(start, self.position);
        Some(Token {
            kind,
            span,
            text: self.chars[span.start..span.end].iter().collect(),
        })
    }

    /// Tokenize the remaining input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn read_lazy(&mut self, repetition: Repetition) -> Quantifier {
        let lazy = self.current_char() == Some('?');
        if lazy {
            self.advance();
        }
        Quantifier { repetition, lazy }
    }

    /// Read a decimal number starting at `cursor`, moving the cursor past it
    fn digits_at(&self, cursor: &mut usize) -> Option<u32> {
        let start = *cursor;
        while self.char_at(*cursor).is_some_and(|c| c.is_ascii_digit()) {
            *cursor += 1;
        }
        if *cursor == start {
            return None;
        }
        let digits: String = self.chars[start..*cursor].iter().collect();
        digits.parse().ok()
    }

    /// Read `{n}`, `{n,}` or `{n,m}`; leaves the position alone on failure
    fn read_counted(&mut self) -> Option<Repetition> {
        let mut cursor = self.position + 1;
        let min = self.digits_at(&mut cursor)?;

        let repetition = match self.char_at(cursor) {
            Some('}') => Repetition::Exactly(min),
            Some(',') => {
                cursor += 1;
                match self.digits_at(&mut cursor) {
                    Some(max) => Repetition::Between(min, max),
                    None => Repetition::AtLeast(min),
                }
            }
            _ => return None,
        };

        if self.char_at(cursor) != Some('}') {
            return None;
        }
        self.position = cursor + 1;
        Some(repetition)
    }

    /// Read an escape sequence (assumes the backslash was already consumed)
    fn read_escape(&mut self) -> Escape {
        let Some(c) = self.current_char() else {
            return Escape::Trailing;
        };
        self.advance();

        match c {
            '1'..='9' => {
                let mut number = c.to_digit(10).unwrap_or(0);
                while let Some(digit) = self.current_char().and_then(|d| d.to_digit(10)) {
                    number = number.saturating_mul(10).saturating_add(digit);
                    self.advance();
                }
                Escape::Backref(number)
            }
            'x' => self
                .read_hex(2)
                .map(Escape::CodePoint)
                .unwrap_or(Escape::Char('x')),
            'u' => self.read_unicode().unwrap_or(Escape::Char('u')),
            'k' => self.read_named_backref().unwrap_or(Escape::Char('k')),
            'p' | 'P' => self
                .read_property(c == 'P')
                .unwrap_or(Escape::Char(c)),
            _ => Escape::Char(c),
        }
    }

    /// Read exactly `count` hex digits
    fn read_hex(&mut self, count: usize) -> Option<u32> {
        let digits: String = (0..count).map_while(|i| self.peek(i)).collect();
        if digits.chars().count() != count || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(&digits, 16).ok()?;
        for _ in 0..count {
            self.advance();
        }
        Some(value)
    }

    /// `\uHHHH` or `\u{H...}` (assumes `\u` was consumed)
    fn read_unicode(&mut self) -> Option<Escape> {
        if self.current_char() != Some('{') {
            return self.read_hex(4).map(Escape::CodePoint);
        }

        let mut cursor = self.position + 1;
        while self.char_at(cursor).is_some_and(|c| c.is_ascii_hexdigit()) {
            cursor += 1;
        }
        let len = cursor - (self.position + 1);
        if len == 0 || len > 6 || self.char_at(cursor) != Some('}') {
            return None;
        }
        let digits: String = self.chars[self.position + 1..cursor].iter().collect();
        let value = u32::from_str_radix(&digits, 16).ok()?;
        self.position = cursor + 1;
        Some(Escape::CodePoint(value))
    }

    /// `\k<name>` (assumes `\k` was consumed)
    fn read_named_backref(&mut self) -> Option<Escape> {
        if self.current_char() != Some('<') {
            return None;
        }
        let save = self.position;
        self.advance();
        match self.read_group_name() {
            Some(name) => Some(Escape::NamedBackref(name)),
            None => {
                self.position = save;
                None
            }
        }
    }

    /// `\p{Name}`, `\pL` (assumes `\p` or `\P` was consumed)
    fn read_property(&mut self, negated: bool) -> Option<Escape> {
        match self.current_char()? {
            '{' => {
                let mut cursor = self.position + 1;
                while self.char_at(cursor).is_some_and(|c| c != '}') {
                    cursor += 1;
                }
                if cursor == self.position + 1 || self.char_at(cursor) != Some('}') {
                    return None;
                }
                let name = self.chars[self.position + 1..cursor].iter().collect();
                self.position = cursor + 1;
                Some(Escape::Property { negated, name })
            }
            c if c.is_ascii_alphabetic() => {
                self.advance();
                Some(Escape::Property {
                    negated,
                    name: c.to_string(),
                })
            }
            _ => None,
        }
    }

    /// Skip to just past the closing `]` of a class whose `[` is consumed.
    ///
    /// Returns whether the class was closed.
    fn skip_class_body(&mut self) -> bool {
        while let Some(c) = self.current_char() {
            self.advance();
            match c {
                '\\' => self.advance(),
                ']' => return true,
                _ => {}
            }
        }
        false
    }

    fn read_char_class(&mut self) -> TokenKind {
        self.advance(); // consume '['
        let negated = self.current_char() == Some('^');
        if negated {
            self.advance();
        }
        let closed = self.skip_class_body();
        TokenKind::CharClass { negated, closed }
    }

    fn read_group(&mut self) -> TokenKind {
        self.advance(); // consume '('

        let kind = match self.read_group_prefix() {
            GroupPrefix::Group(kind) => kind,
            GroupPrefix::InlineFlags(flags) => return TokenKind::InlineFlags(flags),
        };

        let body_start = self.position;
        let mut depth = 1usize;
        while let Some(c) = self.current_char() {
            match c {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '[' => {
                    self.advance();
                    self.skip_class_body();
                }
                '(' => {
                    depth += 1;
                    self.advance();
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = Span::new(body_start, self.position);
                        self.advance(); // consume ')'
                        return TokenKind::Group {
                            kind,
                            body,
                            closed: true,
                        };
                    }
                    self.advance();
                }
                _ => self.advance(),
            }
        }

        TokenKind::Group {
            kind,
            body: Span::new(body_start, self.position),
            closed: false,
        }
    }

    /// Read what follows `(`; falls back to a plain capturing group
    fn read_group_prefix(&mut self) -> GroupPrefix {
        if self.current_char() != Some('?') {
            return GroupPrefix::Group(GroupKind::Capturing);
        }

        let save = self.position;
        self.advance(); // consume '?'
        match self.group_extension() {
            Some(prefix) => prefix,
            None => {
                self.position = save;
                GroupPrefix::Group(GroupKind::Capturing)
            }
        }
    }

    fn group_extension(&mut self) -> Option<GroupPrefix> {
        let kind = match self.current_char()? {
            ':' => {
                self.advance();
                GroupKind::NonCapturing
            }
            '=' => {
                self.advance();
                GroupKind::Lookahead
            }
            '!' => {
                self.advance();
                GroupKind::NegativeLookahead
            }
            '>' => {
                self.advance();
                GroupKind::Atomic
            }
            '<' => {
                self.advance();
                match self.current_char()? {
                    '=' => {
                        self.advance();
                        GroupKind::Lookbehind
                    }
                    '!' => {
                        self.advance();
                        GroupKind::NegativeLookbehind
                    }
                    _ => GroupKind::Named(self.read_group_name()?),
                }
            }
            'P' if self.peek(1) == Some('<') => {
                self.advance();
                self.advance();
                GroupKind::Named(self.read_group_name()?)
            }
            c if c.is_ascii_alphabetic() || c == '-' => {
                let start = self.position;
                while self
                    .current_char()
                    .is_some_and(|c| c.is_ascii_alphabetic() || c == '-')
                {
                    self.advance();
                }
                let flags: String = self.chars[start..self.position].iter().collect();
                match self.current_char()? {
                    ':' => {
                        self.advance();
                        GroupKind::Flags(flags)
                    }
                    ')' => {
                        self.advance();
                        return Some(GroupPrefix::InlineFlags(flags));
                    }
                    _ => return None,
                }
            }
            _ => return None,
        };
        Some(GroupPrefix::Group(kind))
    }

    /// Read `name>` and return the name
    fn read_group_name(&mut self) -> Option<String> {
        let start = self.position;
        while self
            .current_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.advance();
        }
        if self.position == start || self.current_char() != Some('>') {
            return None;
        }
        let name = self.chars[start..self.position].iter().collect();
        self.advance(); // consume '>'
        Some(name)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize a whole pattern
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    Scanner::new(&chars).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(pattern: &str) -> Vec<TokenKind> {
        tokenize(pattern).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_literal_sequence() {
        assert_eq!(
            kinds("abc"),
            vec![
                TokenKind::Literal('a'),
                TokenKind::Literal('b'),
                TokenKind::Literal('c'),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_anchors_and_dot() {
        assert_eq!(
            kinds("^a.$"),
            vec![
                TokenKind::Anchor(Anchor::Start),
                TokenKind::Literal('a'),
                TokenKind::Dot,
                TokenKind::Anchor(Anchor::End),
            ]
        );
    }

    #[test]
    fn test_quantifiers() {
        let q = |repetition, lazy| TokenKind::Quantifier(Quantifier { repetition, lazy });
        assert_eq!(
            kinds("a*b+?c?d{3}e{2,}f{1,4}?"),
            vec![
                TokenKind::Literal('a'),
                q(Repetition::ZeroOrMore, false),
                TokenKind::Literal('b'),
                q(Repetition::OneOrMore, true),
                TokenKind::Literal('c'),
                q(Repetition::ZeroOrOne, false),
                TokenKind::Literal('d'),
                q(Repetition::Exactly(3), false),
                TokenKind::Literal('e'),
                q(Repetition::AtLeast(2), false),
                TokenKind::Literal('f'),
                q(Repetition::Between(1, 4), true),
            ]
        );
    }

    #[test]
    fn test_malformed_braces_are_literals() {
        assert_eq!(
            kinds("a{x}"),
            vec![
                TokenKind::Literal('a'),
                TokenKind::Literal('{'),
                TokenKind::Literal('x'),
                TokenKind::Literal('}'),
            ]
        );
        assert_eq!(
            kinds("{2"),
            vec![TokenKind::Literal('{'), TokenKind::Literal('2')]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            kinds(r"\d\.\12\x41\u00e9\u{1F600}\k<year>\p{L}\PN"),
            vec![
                TokenKind::Escape(Escape::Char('d')),
                TokenKind::Escape(Escape::Char('.')),
                TokenKind::Escape(Escape::Backref(12)),
                TokenKind::Escape(Escape::CodePoint(0x41)),
                TokenKind::Escape(Escape::CodePoint(0xe9)),
                TokenKind::Escape(Escape::CodePoint(0x1F600)),
                TokenKind::Escape(Escape::NamedBackref("year".to_string())),
                TokenKind::Escape(Escape::Property {
                    negated: false,
                    name: "L".to_string()
                }),
                TokenKind::Escape(Escape::Property {
                    negated: true,
                    name: "N".to_string()
                }),
            ]
        );
    }

    #[test]
    fn test_short_hex_falls_back() {
        let tokens = tokenize(r"\xZ");
        assert_eq!(tokens[0].kind, TokenKind::Escape(Escape::Char('x')));
        assert_eq!(tokens[0].text, r"\x");
        assert_eq!(tokens[1].kind, TokenKind::Literal('Z'));
    }

    #[test]
    fn test_trailing_backslash() {
        let tokens = tokenize("a\\");
        assert_eq!(tokens[1].kind, TokenKind::Escape(Escape::Trailing));
        assert_eq!(tokens[1].span, Span::new(1, 2));
    }

    #[test]
    fn test_character_class() {
        let tokens = tokenize("[a-z]+");
        assert_eq!(
            tokens[0].kind,
            TokenKind::CharClass {
                negated: false,
                closed: true
            }
        );
        assert_eq!(tokens[0].text, "[a-z]");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_character_class_with_escaped_bracket() {
        let tokens = tokenize(r"[^\]a]b");
        assert_eq!(
            tokens[0].kind,
            TokenKind::CharClass {
                negated: true,
                closed: true
            }
        );
        assert_eq!(tokens[0].text, r"[^\]a]");
        assert_eq!(tokens[1].kind, TokenKind::Literal('b'));
    }

    #[test]
    fn test_unclosed_class_runs_to_end() {
        let tokens = tokenize("[abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::CharClass {
                negated: false,
                closed: false
            }
        );
    }

    #[test]
    fn test_group_body_span() {
        let tokens = tokenize("(ab)c");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Group {
                kind: GroupKind::Capturing,
                body: Span::new(1, 3),
                closed: true
            }
        );
        assert_eq!(tokens[0].text, "(ab)");
        assert_eq!(tokens[1].kind, TokenKind::Literal('c'));
    }

    #[test]
    fn test_nested_groups_are_one_token() {
        let tokens = tokenize("(a(b)c)d");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "(a(b)c)");
    }

    #[test]
    fn test_group_depth_ignores_escapes_and_classes() {
        let tokens = tokenize(r"(\)[(])x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, r"(\)[(])");
    }

    #[test]
    fn test_group_kinds() {
        let group_kind = |pattern: &str| match &tokenize(pattern)[0].kind {
            TokenKind::Group { kind, .. } => kind.clone(),
            other => panic!("not a group: {other:?}"),
        };
        assert_eq!(group_kind("(?:a)"), GroupKind::NonCapturing);
        assert_eq!(group_kind("(?=a)"), GroupKind::Lookahead);
        assert_eq!(group_kind("(?!a)"), GroupKind::NegativeLookahead);
        assert_eq!(group_kind("(?<=a)"), GroupKind::Lookbehind);
        assert_eq!(group_kind("(?<!a)"), GroupKind::NegativeLookbehind);
        assert_eq!(group_kind("(?>a)"), GroupKind::Atomic);
        assert_eq!(group_kind("(?<year>a)"), GroupKind::Named("year".to_string()));
        assert_eq!(group_kind("(?P<day>a)"), GroupKind::Named("day".to_string()));
        assert_eq!(group_kind("(?i:a)"), GroupKind::Flags("i".to_string()));
    }

    #[test]
    fn test_named_group_body_skips_prefix() {
        let tokens = tokenize("(?<y>\\d)");
        match &tokens[0].kind {
            TokenKind::Group { body, .. } => assert_eq!(*body, Span::new(5, 7)),
            other => panic!("not a group: {other:?}"),
        }
    }

    #[test]
    fn test_inline_flags() {
        assert_eq!(
            kinds("(?i)a"),
            vec![
                TokenKind::InlineFlags("i".to_string()),
                TokenKind::Literal('a')
            ]
        );
    }

    #[test]
    fn test_unclosed_group_runs_to_end() {
        let tokens = tokenize("(ab");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::Group {
                kind: GroupKind::Capturing,
                body: Span::new(1, 3),
                closed: false
            }
        );
    }

    #[test]
    fn test_stray_close_paren_is_literal() {
        assert_eq!(
            kinds("a)"),
            vec![TokenKind::Literal('a'), TokenKind::Literal(')')]
        );
    }

    #[test]
    fn test_alternation() {
        assert_eq!(
            kinds("a|b"),
            vec![
                TokenKind::Literal('a'),
                TokenKind::Alternation,
                TokenKind::Literal('b'),
            ]
        );
    }

    #[test]
    fn test_within_keeps_absolute_spans() {
        let chars: Vec<char> = "(ab)".chars().collect();
        let tokens = Scanner::within(&chars, Span::new(1, 3)).tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, Span::new(1, 2));
        assert_eq!(tokens[1].span, Span::new(2, 3));
    }

    #[test]
    fn test_positions_are_char_offsets() {
        let tokens = tokenize("é+");
        assert_eq!(tokens[0].span, Span::new(0, 1));
        assert_eq!(tokens[1].span, Span::new(1, 2));
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("[0-9]");
        assert_eq!(tokens[0].to_string(), "character class `[0-9]` at 0..5");
    }
}
