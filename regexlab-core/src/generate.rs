//! Build patterns from a description or from example strings.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{RegexLabError, Result};
use crate::flags::Flags;
use crate::patterns;
use crate::validation;

/// A request to generate a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free text such as "match an email address"
    pub description: String,
    /// Strings the pattern should match
    #[serde(default)]
    pub examples: Vec<String>,
    /// Flags the pattern will be used with
    #[serde(default)]
    pub flags: String,
}

/// A pattern picked for a description keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DescribedPattern {
    /// The pattern source
    pub pattern: &'static str,
    /// Why it was picked
    pub description: &'static str,
}

impl GenerationRequest {
    /// Check field presence and limits
    pub fn validate(&self) -> Result<()> {
        validation::non_empty("description", &self.description)?;
        validation::max_len(
            "description",
            &self.description,
            validation::MAX_DESCRIPTION_LEN,
        )?;
        let examples_len: usize = self.examples.iter().map(|e| e.chars().count()).sum();
        if examples_len > validation::MAX_EXAMPLES_LEN {
            return Err(RegexLabError::Validation {
                field: "examples",
                message: format!(
                    "must be at most {} characters in total, got {examples_len}",
                    validation::MAX_EXAMPLES_LEN
                ),
            });
        }
        Flags::parse(&self.flags)?;
        Ok(())
    }
}

/// Generate a pattern: keyword lookup first, then the examples
pub fn generate_regex(request: &GenerationRequest) -> Result<String> {
    request.validate()?;

    let candidates = match_description_to_patterns(&request.description.to_lowercase());
    if let Some(first) = candidates.first() {
        debug!("description matched: {}", first.description);
        return Ok(first.pattern.to_string());
    }

    if !request.examples.is_empty() {
        return Ok(build_regex_from_examples(&request.examples));
    }

    Err(RegexLabError::Generation)
}

/// Patterns whose keyword appears in `description`.
///
/// Expects an already lowercased description.
pub fn match_description_to_patterns(description: &str) -> Vec<DescribedPattern> {
    let mut found = Vec::new();

    if description.contains("email") {
        found.push(DescribedPattern {
            pattern: patterns::EMAIL,
            description: "Email validation pattern",
        });
    }
    if description.contains("phone") || description.contains("number") {
        found.push(DescribedPattern {
            pattern: patterns::PHONE,
            description: "Phone number pattern",
        });
    }
    if description.contains("date") {
        found.push(DescribedPattern {
            pattern: patterns::DATE_DMY,
            description: "Date pattern (DD/MM/YYYY)",
        });
    }
    if description.contains("url") {
        found.push(DescribedPattern {
            pattern: patterns::URL,
            description: "URL validation pattern",
        });
    }

    found
}

/// Build a pattern column by column over the examples.
///
/// Columns come from the first example. A column where every example has
/// the same character becomes that literal; all digits become `\d`; all
/// ASCII letters become `[a-zA-Z]`; anything else becomes a class of the
/// characters seen. Columns some example is too short for are optional.
pub fn build_regex_from_examples(examples: &[String]) -> String {
    let Some(first) = examples.first() else {
        return String::new();
    };
    let rows: Vec<Vec<char>> = examples.iter().map(|e| e.chars().collect()).collect();
    let width = first.chars().count();

    let mut pattern = String::new();
    for column in 0..width {
        let mut distinct: Vec<char> = Vec::new();
        let mut optional = false;
        for row in &rows {
            match row.get(column) {
                Some(c) if !distinct.contains(c) => distinct.push(*c),
                Some(_) => {}
                None => optional = true,
            }
        }

        if distinct.len() == 1 {
            pattern.push_str(&regex::escape(&distinct[0].to_string()));
        } else if distinct.iter().all(|c| c.is_ascii_digit()) {
            pattern.push_str(r"\d");
        } else if distinct.iter().all(|c| c.is_ascii_alphabetic()) {
            pattern.push_str("[a-zA-Z]");
        } else {
            let members: String = distinct.iter().collect();
            pattern.push('[');
            pattern.push_str(&regex::escape(&members));
            pattern.push(']');
        }

        if optional {
            pattern.push('?');
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keyword_lookup() {
        let found = match_description_to_patterns("an email or a phone number");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].pattern, patterns::EMAIL);
        assert_eq!(found[1].pattern, patterns::PHONE);
        assert!(match_description_to_patterns("zip code").is_empty());
    }

    #[test]
    fn test_generate_from_description_ignores_case() {
        let request = GenerationRequest {
            description: "Match a URL".to_string(),
            ..Default::default()
        };
        assert_eq!(generate_regex(&request).unwrap(), patterns::URL);
    }

    #[test]
    fn test_generate_from_examples() {
        let request = GenerationRequest {
            description: "product codes".to_string(),
            examples: strings(&["AB-12", "CD-34"]),
            ..Default::default()
        };
        assert_eq!(generate_regex(&request).unwrap(), r"[a-zA-Z][a-zA-Z]\-\d\d");
    }

    #[test]
    fn test_generate_without_anything() {
        let request = GenerationRequest {
            description: "something odd".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            generate_regex(&request),
            Err(RegexLabError::Generation)
        ));
    }

    #[test]
    fn test_generate_validates_description() {
        let request = GenerationRequest::default();
        assert!(matches!(
            generate_regex(&request),
            Err(RegexLabError::Validation {
                field: "description",
                ..
            })
        ));
    }

    #[test]
    fn test_generate_validates_flags() {
        let request = GenerationRequest {
            description: "email".to_string(),
            flags: "q".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            generate_regex(&request),
            Err(RegexLabError::InvalidFlag('q'))
        ));
    }

    #[test]
    fn test_build_literal_columns_are_escaped() {
        assert_eq!(build_regex_from_examples(&strings(&["a.b", "a.b"])), r"a\.b");
    }

    #[test]
    fn test_build_mixed_column_class() {
        assert_eq!(build_regex_from_examples(&strings(&["x1", "x-"])), r"x[1\-]");
    }

    #[test]
    fn test_build_short_examples_make_columns_optional() {
        assert_eq!(
            build_regex_from_examples(&strings(&["abc", "ab"])),
            "abc?"
        );
        assert_eq!(
            build_regex_from_examples(&strings(&["123", "45"])),
            r"\d\d3?"
        );
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(build_regex_from_examples(&[]), "");
    }
}
