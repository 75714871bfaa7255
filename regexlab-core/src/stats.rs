//! Per-user progress statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::training::{TrainingLevel, TrainingStore};

/// Aggregated answers of one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Every recorded answer
    pub total_completed: usize,
    /// Correct answers, grouped by exercise level
    pub correct_by_level: BTreeMap<TrainingLevel, usize>,
    /// Correct answers over all answers; 0 when there are none
    pub success_rate: f64,
}

/// Compute a user's statistics from the store.
///
/// Correct answers to exercises no longer in the store count toward the
/// success rate but are not grouped by level.
pub fn user_stats<S: TrainingStore + ?Sized>(store: &S, user_id: u32) -> UserStats {
    let results = store.results_for_user(user_id);
    let total_completed = results.len();

    let mut successes = 0usize;
    let mut correct_by_level = BTreeMap::new();
    for result in results.iter().filter(|r| r.is_correct) {
        successes += 1;
        if let Some(exercise) = store.find_exercise(result.exercise_id) {
            *correct_by_level.entry(exercise.level).or_insert(0) += 1;
        }
    }

    let success_rate = if total_completed == 0 {
        0.0
    } else {
        successes as f64 / total_completed as f64
    };

    UserStats {
        total_completed,
        correct_by_level,
        success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::{MemoryStore, NewExercise, NewResult};

    fn store_with_answers() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .insert_exercises(vec![
                NewExercise {
                    level: TrainingLevel::Basic,
                    input_string: "cat".to_string(),
                    expected_regex: "cat".to_string(),
                    description: "Find cat".to_string(),
                },
                NewExercise {
                    level: TrainingLevel::Advanced,
                    input_string: "x".to_string(),
                    expected_regex: "x".to_string(),
                    description: "Find x".to_string(),
                },
            ])
            .unwrap();

        for (exercise_id, is_correct) in [(1, true), (1, true), (2, false), (99, true)] {
            store
                .save_result(NewResult {
                    user_id: 1,
                    exercise_id,
                    user_regex: "r".to_string(),
                    is_correct,
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_stats() {
        let stats = user_stats(&store_with_answers(), 1);
        assert_eq!(stats.total_completed, 4);
        assert_eq!(
            stats.correct_by_level,
            BTreeMap::from([(TrainingLevel::Basic, 2)])
        );
        assert_eq!(stats.success_rate, 0.75);
    }

    #[test]
    fn test_stats_without_answers() {
        let stats = user_stats(&store_with_answers(), 2);
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_stats_json() {
        let json = serde_json::to_value(user_stats(&store_with_answers(), 1)).unwrap();
        assert_eq!(json["totalCompleted"], 4);
        assert_eq!(json["correctByLevel"]["basic"], 2);
        assert_eq!(json["successRate"], 0.75);
    }
}
