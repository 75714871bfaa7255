//! RegexLab Core Library
//!
//! Explain, test and practice regular expressions. Patterns are explained by
//! a display-oriented scanner and matched by native engines; exercises and
//! answers live in a [`TrainingStore`].

pub mod engine;
pub mod error;
pub mod explain;
pub mod flags;
pub mod generate;
pub mod lexer;
pub mod patterns;
pub mod stats;
pub mod training;
pub mod validation;

pub use engine::{CompiledPattern, RawMatch, TestReport, test_regex};
pub use error::{ErrorCategory, RegexLabError, Result, Span, StoreError};
pub use explain::{
    Component, ComponentKind, Explanation, explain_regex, generate_description,
    generate_examples, generate_warnings, parse_components,
};
pub use flags::Flags;
pub use generate::{
    DescribedPattern, GenerationRequest, build_regex_from_examples, generate_regex,
    match_description_to_patterns,
};
pub use lexer::{Scanner, Token, TokenKind, tokenize};
pub use patterns::{CommonPattern, common_patterns, find_pattern};
pub use stats::{UserStats, user_stats};
pub use training::{
    JsonStore, MemoryStore, NewExercise, NewResult, TrainingExercise, TrainingLevel,
    TrainingResult, TrainingService, TrainingStore, seed_exercises,
};
