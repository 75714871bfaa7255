//! Pattern compilation and matching
//!
//! Matching is delegated to native engines. Patterns compile with the
//! [`regex`] crate when they can; lookaround and backreferences need the
//! backtracking [`fancy_regex`] crate, which is tried second.

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RegexLabError, Result, Span};
use crate::flags::Flags;
use crate::validation;

/// A pattern compiled by one of the native engines
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Compiled by `regex`
    Basic(regex::Regex),
    /// Compiled by `fancy_regex`
    Fancy(fancy_regex::Regex),
}

/// One match in byte offsets, with its capture groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// The whole match
    pub range: Range<usize>,
    /// Groups 1.., `None` when the group did not participate
    pub groups: Vec<Option<Range<usize>>>,
}

impl CompiledPattern {
    /// Compile `pattern` with `flags` applied
    pub fn compile(pattern: &str, flags: &Flags) -> Result<Self> {
        let source = format!("{}{}", flags.inline_prefix(), pattern);

        match regex::Regex::new(&source) {
            Ok(regex) => {
                debug!("compiled {source:?} with regex");
                Ok(CompiledPattern::Basic(regex))
            }
            Err(basic) => {
                debug!("regex rejected {source:?} ({basic}); trying fancy-regex");
                fancy_regex::Regex::new(&source)
                    .map(CompiledPattern::Fancy)
                    .map_err(|err| RegexLabError::InvalidPattern {
                        pattern: pattern.to_string(),
                        message: err.to_string(),
                    })
            }
        }
    }

    /// Is this compiled by `fancy_regex`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, CompiledPattern::Fancy(_))
    }

    /// The source handed to the engine, flag prefix included
    pub fn as_str(&self) -> &str {
        match self {
            CompiledPattern::Basic(regex) => regex.as_str(),
            CompiledPattern::Fancy(regex) => regex.as_str(),
        }
    }

    /// Every non-overlapping match, left to right
    pub fn captures_all(&self, text: &str) -> Result<Vec<RawMatch>> {
        match self {
            CompiledPattern::Basic(regex) => Ok(regex
                .captures_iter(text)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let groups = (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.range()))
                        .collect();
                    Some(RawMatch {
                        range: whole.range(),
                        groups,
                    })
                })
                .collect()),
            CompiledPattern::Fancy(regex) => {
                let mut found = Vec::new();
                for caps in regex.captures_iter(text) {
                    let caps = caps.map_err(|err| RegexLabError::Match(err.to_string()))?;
                    let Some(whole) = caps.get(0) else {
                        continue;
                    };
                    let groups = (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                        .collect();
                    found.push(RawMatch {
                        range: whole.start()..whole.end(),
                        groups,
                    });
                }
                Ok(found)
            }
        }
    }
}

/// Maps byte offsets of a text to character offsets
struct CharOffsets {
    starts: Vec<usize>,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        CharOffsets {
            starts: text.char_indices().map(|(i, _)| i).collect(),
        }
    }

    fn to_char(&self, byte: usize) -> usize {
        self.starts.partition_point(|&start| start < byte)
    }
}

/// Result of running a pattern over a text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestReport {
    /// Whether anything matched
    pub has_matches: bool,
    /// The matched text of every match
    pub matches: Vec<String>,
    /// Capture groups of every match
    pub groups: Vec<Vec<Option<String>>>,
    /// Character offsets of every match
    pub positions: Vec<Span>,
}

/// Run `pattern` over `text` and report every match.
///
/// All matches are reported whether or not the `g` flag is set.
pub fn test_regex(pattern: &str, text: &str, flags: &str) -> Result<TestReport> {
    validation::pattern(pattern)?;
    validation::non_empty("text", text)?;
    validation::max_len("text", text, validation::MAX_TEXT_LEN)?;
    let flags = Flags::parse(flags)?;

    let compiled = CompiledPattern::compile(pattern, &flags)?;
    let found = compiled.captures_all(text)?;
    let offsets = CharOffsets::new(text);

    let mut report = TestReport {
        has_matches: !found.is_empty(),
        ..TestReport::default()
    };
    for raw in found {
        report.matches.push(text[raw.range.clone()].to_string());
        report.groups.push(
            raw.groups
                .into_iter()
                .map(|group| group.map(|range| text[range].to_string()))
                .collect(),
        );
        report.positions.push(Span::new(
            offsets.to_char(raw.range.start),
            offsets.to_char(raw.range.end),
        ));
    }
    Ok(report)
}
