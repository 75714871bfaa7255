mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;
use regexlab_core::{
    Component, ErrorCategory, GenerationRequest, JsonStore, RegexLabError, TrainingLevel,
    TrainingService, TrainingStore, common_patterns, explain_regex, find_pattern,
    generate_regex, match_description_to_patterns, test_regex, tokenize, validation,
};
use serde::Serialize;

use crate::logging::LogArgs;

#[derive(Parser)]
#[command(name = "regexlab")]
#[command(about = "RegexLab - explain, test and practice regular expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Training store file
    #[arg(
        long,
        global = true,
        env = "REGEXLAB_STORE",
        default_value = "regexlab-store.json"
    )]
    store: PathBuf,

    #[command(flatten)]
    logging: LogArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a pattern piece by piece
    Explain {
        /// The regex pattern
        pattern: String,
        /// Flags such as "gi"
        #[arg(short, long, default_value = "")]
        flags: String,
        /// Also print the raw token stream
        #[arg(long)]
        tokens: bool,
    },
    /// Run a pattern over a text and list every match
    Test {
        /// The regex pattern
        pattern: String,
        /// The text to search
        text: String,
        /// Flags such as "gi"
        #[arg(short, long, default_value = "")]
        flags: String,
        /// Show capture groups
        #[arg(short, long)]
        groups: bool,
    },
    /// Suggest a pattern from a description or examples
    Generate {
        /// What the pattern should match
        description: String,
        /// A string the pattern should match (repeatable)
        #[arg(short, long = "example")]
        examples: Vec<String>,
        /// Flags such as "gi"
        #[arg(short, long, default_value = "")]
        flags: String,
    },
    /// List the common pattern catalogue
    Patterns {
        /// Show only the pattern with this name
        name: Option<String>,
    },
    /// Load the built-in training exercises into the store
    Seed,
    /// Pick a random exercise of a level
    Train {
        /// basic, intermediate or advanced
        level: String,
    },
    /// Submit an answer to an exercise
    Validate {
        /// Who is answering
        user_id: u32,
        /// The exercise id
        exercise_id: u32,
        /// The proposed pattern
        regex: String,
    },
    /// Show a user's training statistics
    Stats {
        /// The user id
        user_id: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.logging.setup_logging() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    let json = cli.json;
    let result = match cli.command {
        Commands::Explain {
            pattern,
            flags,
            tokens,
        } => cmd_explain(&pattern, &flags, tokens, json),
        Commands::Test {
            pattern,
            text,
            flags,
            groups,
        } => cmd_test(&pattern, &text, &flags, groups, json),
        Commands::Generate {
            description,
            examples,
            flags,
        } => cmd_generate(description, examples, flags, json),
        Commands::Patterns { name } => cmd_patterns(name.as_deref(), json),
        Commands::Seed => cmd_seed(&cli.store, json),
        Commands::Train { level } => cmd_train(&cli.store, &level, json),
        Commands::Validate {
            user_id,
            exercise_id,
            regex,
        } => cmd_validate(&cli.store, user_id, exercise_id, &regex, json),
        Commands::Stats { user_id } => cmd_stats(&cli.store, user_id, json),
    };

    if let Err(e) = result {
        fail(&e.to_string(), e.category());
    }
}

/// Process exit status for an error category
fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::BadRequest => 2,
        ErrorCategory::NotFound => 3,
        ErrorCategory::Internal => 1,
    }
}

/// Print an error and exit with a code for its category
fn fail(message: &str, category: ErrorCategory) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(exit_code(category));
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RegexLabError> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

fn open_service(path: &Path) -> Result<TrainingService<JsonStore>, RegexLabError> {
    debug!("opening store {}", path.display());
    Ok(TrainingService::new(JsonStore::open(path)?))
}

fn cmd_explain(pattern: &str, flags: &str, tokens: bool, json: bool) -> Result<(), RegexLabError> {
    let explanation = explain_regex(pattern, flags)?;

    if json {
        if tokens {
            let stream: Vec<String> = tokenize(pattern).iter().map(|t| t.to_string()).collect();
            return print_json(&serde_json::json!({
                "explanation": explanation,
                "tokens": stream,
            }));
        }
        return print_json(&explanation);
    }

    println!("{}", "Explaining pattern...".bold());
    println!("  Pattern: {}", explanation.pattern.cyan());
    if !explanation.flags.is_empty() {
        println!("  Flags:   {}", explanation.flags.cyan());
    }
    println!();

    if tokens {
        println!("{}", "Tokens:".bold());
        for token in tokenize(pattern) {
            println!("  {token}");
        }
        println!();
    }

    println!("{}", "Components:".bold());
    for component in &explanation.components {
        print_component(component, 1);
    }

    if !explanation.examples.is_empty() {
        println!();
        println!("{}", "Examples:".bold());
        for example in &explanation.examples {
            println!("  {}", example.green());
        }
    }

    if !explanation.warnings.is_empty() {
        println!();
        println!("{}", "Warnings:".yellow().bold());
        for warning in &explanation.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }
    Ok(())
}

fn print_component(component: &Component, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{indent}{} {} {}",
        format!("{:>3}..{:<3}", component.position.start, component.position.end).dimmed(),
        component.value.cyan(),
        component.description
    );
    for child in &component.children {
        print_component(child, depth + 1);
    }
}

fn cmd_test(
    pattern: &str,
    text: &str,
    flags: &str,
    groups: bool,
    json: bool,
) -> Result<(), RegexLabError> {
    let report = test_regex(pattern, text, flags)?;

    if json {
        return print_json(&report);
    }

    println!("{}", "Testing pattern...".bold());
    println!("  Pattern: {}", pattern.cyan());
    println!("  Input:   {}", text.yellow());
    println!();

    if !report.has_matches {
        println!("{}", "✗ No match".red());
        return Ok(());
    }

    println!(
        "{} {}",
        "Found".bold(),
        format!("{} match(es)", report.matches.len()).green()
    );
    for (i, (matched, position)) in report.matches.iter().zip(&report.positions).enumerate() {
        println!(
            "  {}. {}..{}: {}",
            i + 1,
            position.start,
            position.end,
            matched.green()
        );
        if groups {
            for (idx, group) in report.groups[i].iter().enumerate() {
                match group {
                    Some(value) => println!("       Group {}: {}", idx + 1, value.green()),
                    None => println!("       Group {}: {}", idx + 1, "unmatched".dimmed()),
                }
            }
        }
    }
    Ok(())
}

fn cmd_generate(
    description: String,
    examples: Vec<String>,
    flags: String,
    json: bool,
) -> Result<(), RegexLabError> {
    let request = GenerationRequest {
        description,
        examples,
        flags,
    };
    let pattern = generate_regex(&request)?;

    if json {
        return print_json(&serde_json::json!({ "pattern": pattern }));
    }

    println!("{}", "Generated pattern:".bold());
    println!("  {}", pattern.green());

    let candidates = match_description_to_patterns(&request.description.to_lowercase());
    if candidates.len() > 1 {
        println!();
        println!("{}", "Other candidates:".bold());
        for candidate in &candidates[1..] {
            println!("  {} {}", candidate.pattern.cyan(), candidate.description);
        }
    }
    Ok(())
}

fn cmd_patterns(name: Option<&str>, json: bool) -> Result<(), RegexLabError> {
    let selected = match name {
        Some(name) => match find_pattern(name) {
            Some(pattern) => vec![*pattern],
            None => fail(
                &format!("No common pattern named '{name}'"),
                ErrorCategory::NotFound,
            ),
        },
        None => common_patterns().to_vec(),
    };

    if json {
        return print_json(&selected);
    }

    for pattern in &selected {
        println!("{}", pattern.name.bold());
        println!("  {}", pattern.pattern.cyan());
        println!("  {}", pattern.description);
    }
    Ok(())
}

fn cmd_seed(store: &Path, json: bool) -> Result<(), RegexLabError> {
    let mut service = open_service(store)?;
    let inserted = service.seed()?;

    if json {
        return print_json(&serde_json::json!({ "inserted": inserted }));
    }

    if inserted == 0 {
        println!(
            "{} store already has {} exercises",
            "Skipped:".yellow().bold(),
            service.store().exercise_count()
        );
    } else {
        println!(
            "{} {} exercises into {}",
            "Seeded".green().bold(),
            inserted,
            store.display()
        );
    }
    Ok(())
}

fn cmd_train(store: &Path, level: &str, json: bool) -> Result<(), RegexLabError> {
    let level: TrainingLevel = level.parse()?;
    let service = open_service(store)?;

    let Some(exercise) = service.random_by_level(level, &mut rand::rng()) else {
        fail(
            &format!("No {level} exercises in {}; run `regexlab seed` first", store.display()),
            ErrorCategory::NotFound,
        );
    };

    if json {
        return print_json(exercise);
    }

    println!(
        "{} #{} ({})",
        "Exercise".bold(),
        exercise.id,
        exercise.level.to_string().cyan()
    );
    println!("  Task:  {}", exercise.description);
    println!("  Input: {}", exercise.input_string.yellow());
    Ok(())
}

fn cmd_validate(
    store: &Path,
    user_id: u32,
    exercise_id: u32,
    regex: &str,
    json: bool,
) -> Result<(), RegexLabError> {
    let mut service = open_service(store)?;
    let correct = service.validate_regex(user_id, exercise_id, regex)?;

    let exercise = service.store().find_exercise(exercise_id);
    // what the answer picks out of the exercise input, when it compiles
    let preview = exercise.and_then(|e| test_regex(regex, &e.input_string, "g").ok());

    if json {
        return print_json(&serde_json::json!({
            "correct": correct,
            "matches": preview,
        }));
    }

    let Some(exercise) = exercise else {
        println!("{} no exercise #{}", "✗".red(), exercise_id);
        return Ok(());
    };

    if correct {
        println!("{}", "✓ Correct!".green().bold());
    } else {
        println!("{}", "✗ Not quite".red().bold());
    }
    println!("  Input: {}", exercise.input_string.yellow());
    match preview {
        Some(report) if report.has_matches => {
            println!("  Your pattern matches: {}", report.matches.join(", ").green());
        }
        Some(_) => println!("  Your pattern matches nothing"),
        None => println!("  Your pattern does not compile"),
    }
    Ok(())
}

fn cmd_stats(store: &Path, user_id: u32, json: bool) -> Result<(), RegexLabError> {
    validation::positive_id("userId", user_id)?;
    let stats = open_service(store)?.stats(user_id);

    if json {
        return print_json(&stats);
    }

    println!("{} {}", "Statistics for user".bold(), user_id);
    println!("  Completed:    {}", stats.total_completed);
    println!(
        "  Success rate: {}",
        format!("{:.1}%", stats.success_rate * 100.0).green()
    );
    for level in TrainingLevel::ALL {
        let correct = stats.correct_by_level.get(&level).copied().unwrap_or(0);
        println!("  {:<13} {}", format!("{level}:"), correct);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explain() {
        let cli = Cli::parse_from(["regexlab", "explain", r"\d+", "-f", "gi", "--tokens"]);
        match cli.command {
            Commands::Explain {
                pattern,
                flags,
                tokens,
            } => {
                assert_eq!(pattern, r"\d+");
                assert_eq!(flags, "gi");
                assert!(tokens);
            }
            _ => panic!("expected explain"),
        }
    }

    #[test]
    fn test_parse_generate_examples() {
        let cli = Cli::parse_from([
            "regexlab", "generate", "codes", "-e", "AB-12", "-e", "CD-34", "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Generate { examples, .. } => assert_eq!(examples, vec!["AB-12", "CD-34"]),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_store_flag() {
        let cli = Cli::parse_from(["regexlab", "stats", "4", "--store", "/tmp/s.json"]);
        assert_eq!(cli.store, PathBuf::from("/tmp/s.json"));
        assert!(matches!(cli.command, Commands::Stats { user_id: 4 }));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(ErrorCategory::BadRequest), 2);
        assert_eq!(exit_code(ErrorCategory::NotFound), 3);
        assert_eq!(exit_code(ErrorCategory::Internal), 1);
    }

    #[test]
    fn test_exit_code_for_errors() {
        let invalid = explain_regex("a(", "").unwrap_err();
        assert_eq!(exit_code(invalid.category()), 2);
        assert_eq!(exit_code(RegexLabError::ExerciseNotFound(9).category()), 3);
    }

    #[test]
    fn test_parse_rejects_negative_id() {
        assert!(Cli::try_parse_from(["regexlab", "validate", "-1", "1", "cat"]).is_err());
    }
}
