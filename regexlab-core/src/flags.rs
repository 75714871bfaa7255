//! Match flags in the familiar `gimsu` letter form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RegexLabError, Result};
use crate::validation;

/// Flags controlling how a pattern is compiled and searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Report every match (g)
    pub global: bool,
    /// Case insensitive matching (i)
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries (m)
    pub multi_line: bool,
    /// Dot matches newline (s)
    pub dot_all: bool,
    /// Unicode mode (u); the engines are always Unicode-aware
    pub unicode: bool,
}

impl Flags {
    /// Parse a flag string such as `"gi"`.
    ///
    /// Unknown letters and repeated letters are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        validation::max_len("flags", input, validation::MAX_FLAGS_LEN)?;

        let mut flags = Flags::default();
        for c in input.chars() {
            let slot = match c {
                'g' => &mut flags.global,
                'i' => &mut flags.case_insensitive,
                'm' => &mut flags.multi_line,
                's' => &mut flags.dot_all,
                'u' => &mut flags.unicode,
                _ => return Err(RegexLabError::InvalidFlag(c)),
            };
            if *slot {
                return Err(RegexLabError::DuplicateFlag(c));
            }
            *slot = true;
        }
        Ok(flags)
    }

    /// The inline group (e.g. `(?im)`) that applies these flags to a pattern.
    ///
    /// Empty when no compile-relevant flag is set.
    pub fn inline_prefix(&self) -> String {
        let mut letters = String::new();
        if self.case_insensitive {
            letters.push('i');
        }
        if self.multi_line {
            letters.push('m');
        }
        if self.dot_all {
            letters.push('s');
        }
        if letters.is_empty() {
            letters
        } else {
            format!("(?{letters})")
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, c) in [
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
        ] {
            if set {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
