use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{NewResult, TrainingExercise, TrainingLevel, TrainingStore, seed_exercises};
use crate::error::Result;
use crate::stats::{UserStats, user_stats};
use crate::validation;

/// Exercise selection, answer checking and seeding over a store
pub struct TrainingService<S> {
    store: S,
}

impl<S: TrainingStore> TrainingService<S> {
    /// Wrap a store
    pub fn new(store: S) -> Self {
        TrainingService { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back
    pub fn into_store(self) -> S {
        self.store
    }

    /// Insert the built-in exercises unless the store already has some.
    ///
    /// Returns how many were inserted.
    pub fn seed(&mut self) -> Result<usize> {
        let existing = self.store.exercise_count();
        if existing > 0 {
            info!("Store already contains {existing} training exercises. Skipping seed.");
            return Ok(0);
        }

        let inserted = self.store.insert_exercises(seed_exercises())?.len();
        info!("Seeded {inserted} training exercises.");
        Ok(inserted)
    }

    /// A uniformly random exercise of `level`
    pub fn random_by_level<R: Rng + ?Sized>(
        &self,
        level: TrainingLevel,
        rng: &mut R,
    ) -> Option<&TrainingExercise> {
        self.store.exercises_by_level(level).choose(rng).copied()
    }

    /// Check an answer and record it.
    ///
    /// The answer is correct when its text equals the expected pattern
    /// exactly. An unknown exercise yields `false` and records nothing.
    pub fn validate_regex(&mut self, user_id: u32, exercise_id: u32, regex: &str) -> Result<bool> {
        validation::positive_id("userId", user_id)?;
        validation::positive_id("id", exercise_id)?;
        validation::non_empty("regex", regex)?;
        validation::max_len("regex", regex, validation::MAX_ANSWER_LEN)?;

        let Some(exercise) = self.store.find_exercise(exercise_id) else {
            return Ok(false);
        };
        let is_correct = regex == exercise.expected_regex;

        let saved = self.store.save_result(NewResult {
            user_id,
            exercise_id,
            user_regex: regex.to_string(),
            is_correct,
        })?;
        info!(
            "user {user_id} answered exercise {exercise_id}: {} (result {})",
            if is_correct { "correct" } else { "incorrect" },
            saved.id
        );
        Ok(is_correct)
    }

    /// Progress statistics for a user
    pub fn stats(&self, user_id: u32) -> UserStats {
        user_stats(&self.store, user_id)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::error::RegexLabError;
    use crate::training::{MemoryStore, NewExercise};

    fn seeded() -> TrainingService<MemoryStore> {
        let mut service = TrainingService::new(MemoryStore::new());
        service.seed().unwrap();
        service
    }

    #[test]
    fn test_seed_once() {
        let mut service = TrainingService::new(MemoryStore::new());
        assert_eq!(service.seed().unwrap(), 15);
        assert_eq!(service.seed().unwrap(), 0);
        assert_eq!(service.store().exercise_count(), 15);
    }

    #[test]
    fn test_random_by_level() {
        let service = seeded();
        let mut rng = StdRng::seed_from_u64(7);
        for level in TrainingLevel::ALL {
            let exercise = service.random_by_level(level, &mut rng).unwrap();
            assert_eq!(exercise.level, level);
        }
    }

    #[test]
    fn test_random_by_level_empty() {
        let mut store = MemoryStore::new();
        store
            .insert_exercises(vec![NewExercise {
                level: TrainingLevel::Basic,
                input_string: "x".to_string(),
                expected_regex: "x".to_string(),
                description: "x".to_string(),
            }])
            .unwrap();
        let service = TrainingService::new(store);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(
            service
                .random_by_level(TrainingLevel::Advanced, &mut rng)
                .is_none()
        );
    }

    #[test]
    fn test_random_covers_level() {
        let service = seeded();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let exercise = service
                .random_by_level(TrainingLevel::Basic, &mut rng)
                .unwrap();
            seen.insert(exercise.id);
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_validate_missing_exercise() {
        let mut service = seeded();
        assert!(!service.validate_regex(1, 99, "abc").unwrap());
        assert!(service.store().results_for_user(1).is_empty());
    }

    #[test]
    fn test_validate_records_result() {
        let mut service = seeded();
        assert!(service.validate_regex(1, 1, "cat").unwrap());

        let results = service.store().results_for_user(1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].exercise_id, 1);
        assert_eq!(results[0].user_regex, "cat");
        assert!(results[0].is_correct);
    }

    #[test]
    fn test_validate_is_literal() {
        let mut service = seeded();
        // matches the same strings, but the text differs
        assert!(!service.validate_regex(1, 1, "(cat)").unwrap());
        assert!(!service.store().results_for_user(1)[0].is_correct);
    }

    #[test]
    fn test_validate_accepts_whitespace_answer() {
        let mut service = seeded();
        assert!(!service.validate_regex(1, 1, " ").unwrap());
        assert_eq!(service.store().results_for_user(1)[0].user_regex, " ");
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        let mut service = seeded();
        assert!(matches!(
            service.validate_regex(0, 1, "cat"),
            Err(RegexLabError::Validation { field: "userId", .. })
        ));
        assert!(matches!(
            service.validate_regex(1, 0, "cat"),
            Err(RegexLabError::Validation { field: "id", .. })
        ));
        assert!(matches!(
            service.validate_regex(1, 1, ""),
            Err(RegexLabError::Validation { field: "regex", .. })
        ));
    }
}
