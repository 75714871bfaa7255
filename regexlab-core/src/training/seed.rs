use super::{NewExercise, TrainingLevel};

struct SeedExercise {
    level: TrainingLevel,
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

const SEED: [SeedExercise; 15] = [
    SeedExercise {
        level: TrainingLevel::Basic,
        input: "cat, dog, bird, fish",
        expected: "cat",
        description: "Find the word \"cat\" in the given text.",
    },
    SeedExercise {
        level: TrainingLevel::Basic,
        input: "apple, banana, orange, grape",
        expected: "banana",
        description: "Find the word \"banana\" in the given text.",
    },
    SeedExercise {
        level: TrainingLevel::Basic,
        input: "hello world, hello there, goodbye",
        expected: "hello",
        description: "Find all occurrences of \"hello\" in the text.",
    },
    SeedExercise {
        level: TrainingLevel::Basic,
        input: "red car, blue car, green car",
        expected: "car",
        description: "Find all occurrences of \"car\" in the text.",
    },
    SeedExercise {
        level: TrainingLevel::Basic,
        input: "123, 456, 789, 012",
        expected: "123",
        description: "Find the number \"123\" in the given text.",
    },
    SeedExercise {
        level: TrainingLevel::Intermediate,
        input: "user@example.com, admin@test.org, guest@demo.net",
        expected: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
        description: "Find all email addresses in the text.",
    },
    SeedExercise {
        level: TrainingLevel::Intermediate,
        input: "Phone: +1-555-123-4567, Mobile: 555-987-6543",
        expected: r"\+?[1-9]\d{0,14}",
        description: "Find all phone numbers in the text.",
    },
    SeedExercise {
        level: TrainingLevel::Intermediate,
        input: "Date: 2024-01-15, Event: 2024-12-25",
        expected: r"\d{4}-\d{2}-\d{2}",
        description: "Find all dates in YYYY-MM-DD format.",
    },
    SeedExercise {
        level: TrainingLevel::Intermediate,
        input: "https://example.com, http://test.org, ftp://demo.net",
        expected: r"https?:\/\/[\w\-\.]+\.[a-zA-Z]{2,}",
        description: "Find all HTTP and HTTPS URLs.",
    },
    SeedExercise {
        level: TrainingLevel::Intermediate,
        input: "Word1, word2, Word3, WORD4",
        expected: "[A-Z][a-z]+",
        description: "Find all words that start with a capital letter followed by lowercase letters.",
    },
    SeedExercise {
        level: TrainingLevel::Advanced,
        input: "password123, securePass456, weakPass",
        expected: r"(?=.*[a-z])(?=.*[A-Z])(?=.*\d)[a-zA-Z\d]{8,}",
        description: "Find passwords that contain at least one lowercase letter, one uppercase letter, one digit, and are at least 8 characters long.",
    },
    SeedExercise {
        level: TrainingLevel::Advanced,
        input: "IPv4: 192.168.1.1, 10.0.0.1, 172.16.0.1",
        expected: r"\b(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
        description: "Find all valid IPv4 addresses.",
    },
    SeedExercise {
        level: TrainingLevel::Advanced,
        input: "Credit: 4111111111111111, 5555555555554444, 378282246310005",
        expected: r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12}|(?:2131|1800|35\d{3})\d{11})$",
        description: "Find all valid credit card numbers (Visa, MasterCard, American Express, Discover).",
    },
    SeedExercise {
        level: TrainingLevel::Advanced,
        input: "HTML: <div>content</div>, <span>text</span>, <p>paragraph</p>",
        expected: r"<([a-z]+)(?:[^<]+)*(?:>(?:<\/[a-z]+>)*<\/\1>|\/>)",
        description: "Find all properly closed HTML tags.",
    },
    SeedExercise {
        level: TrainingLevel::Advanced,
        input: "Time: 09:30, 14:45, 23:15, 00:00",
        expected: "([01]?[0-9]|2[0-3]):[0-5][0-9]",
        description: "Find all valid 24-hour time formats (HH:MM).",
    },
];

/// The built-in exercise set, five per level
pub fn seed_exercises() -> Vec<NewExercise> {
    SEED.iter()
        .map(|seed| NewExercise {
            level: seed.level,
            input_string: seed.input.to_string(),
            expected_regex: seed.expected.to_string(),
            description: seed.description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompiledPattern;
    use crate::flags::Flags;

    #[test]
    fn test_five_per_level() {
        let exercises = seed_exercises();
        assert_eq!(exercises.len(), 15);
        for level in TrainingLevel::ALL {
            assert_eq!(exercises.iter().filter(|e| e.level == level).count(), 5);
        }
    }

    #[test]
    fn test_expected_patterns_compile() {
        for exercise in seed_exercises() {
            assert!(
                CompiledPattern::compile(&exercise.expected_regex, &Flags::default()).is_ok(),
                "{} does not compile",
                exercise.expected_regex
            );
        }
    }
}
