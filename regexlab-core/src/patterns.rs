//! Catalogue of common named patterns.

use serde::Serialize;

/// A named, described pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonPattern {
    /// Display name
    pub name: &'static str,
    /// The pattern source
    pub pattern: &'static str,
    /// What the pattern validates
    pub description: &'static str,
}

pub(crate) const EMAIL: &str = r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$";
pub(crate) const PHONE: &str = r"^\+?[1-9]\d{1,14}$";
pub(crate) const DATE_DMY: &str = r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/\d{4}$";
pub(crate) const URL: &str = r"^https?://[\w.-]+\.[A-Za-z]{2,}(/\S*)?$";
pub(crate) const CREDIT_CARD: &str = r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12}|(?:2131|1800|35\d{3})\d{11})$";

static COMMON_PATTERNS: [CommonPattern; 5] = [
    CommonPattern {
        name: "Email",
        pattern: EMAIL,
        description: "Validates email addresses",
    },
    CommonPattern {
        name: "Phone Number",
        pattern: PHONE,
        description: "Validates international phone numbers",
    },
    CommonPattern {
        name: "Date (DD/MM/YYYY)",
        pattern: DATE_DMY,
        description: "Validates dates in DD/MM/YYYY format",
    },
    CommonPattern {
        name: "URL",
        pattern: URL,
        description: "Validates URLs",
    },
    CommonPattern {
        name: "Credit Card",
        pattern: CREDIT_CARD,
        description: "Validates major credit card numbers",
    },
];

/// All catalogued patterns
pub fn common_patterns() -> &'static [CommonPattern] {
    &COMMON_PATTERNS
}

/// Look a pattern up by name, ignoring case
pub fn find_pattern(name: &str) -> Option<&'static CommonPattern> {
    COMMON_PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompiledPattern;
    use crate::flags::Flags;

    #[test]
    fn test_catalogue_compiles() {
        for pattern in common_patterns() {
            assert!(
                CompiledPattern::compile(pattern.pattern, &Flags::default()).is_ok(),
                "{} does not compile",
                pattern.name
            );
        }
    }

    #[test]
    fn test_catalogue_matches_samples() {
        let samples = [
            ("Email", "user@example.com"),
            ("Phone Number", "+14155552671"),
            ("Date (DD/MM/YYYY)", "31/12/2024"),
            ("URL", "https://example.com/path"),
            ("Credit Card", "4111111111111111"),
        ];
        for (name, sample) in samples {
            let pattern = find_pattern(name).unwrap();
            let compiled = CompiledPattern::compile(pattern.pattern, &Flags::default()).unwrap();
            assert_eq!(
                compiled.captures_all(sample).unwrap().len(),
                1,
                "{name} should match {sample}"
            );
        }
    }

    #[test]
    fn test_find_pattern() {
        assert_eq!(find_pattern("email").map(|p| p.pattern), Some(EMAIL));
        assert_eq!(find_pattern(" URL ").map(|p| p.name), Some("URL"));
        assert!(find_pattern("zip code").is_none());
    }
}
