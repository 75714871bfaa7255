use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{NewExercise, NewResult, TrainingExercise, TrainingLevel, TrainingResult};
use crate::error::Result;

/// Storage for exercises and recorded answers
pub trait TrainingStore {
    /// Number of stored exercises
    fn exercise_count(&self) -> usize;

    /// Exercises of one level, in id order
    fn exercises_by_level(&self, level: TrainingLevel) -> Vec<&TrainingExercise>;

    /// Look an exercise up by id
    fn find_exercise(&self, id: u32) -> Option<&TrainingExercise>;

    /// Store exercises, returning their new ids
    fn insert_exercises(&mut self, exercises: Vec<NewExercise>) -> Result<Vec<u32>>;

    /// Record an answer
    fn save_result(&mut self, result: NewResult) -> Result<TrainingResult>;

    /// Every answer recorded for a user
    fn results_for_user(&self, user_id: u32) -> Vec<&TrainingResult>;
}

/// In-memory store; ids are sequential from 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    exercises: Vec<TrainingExercise>,
    #[serde(default)]
    results: Vec<TrainingResult>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn next_exercise_id(&self) -> u32 {
        self.exercises.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    fn next_result_id(&self) -> u32 {
        self.results.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl TrainingStore for MemoryStore {
    fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    fn exercises_by_level(&self, level: TrainingLevel) -> Vec<&TrainingExercise> {
        self.exercises.iter().filter(|e| e.level == level).collect()
    }

    fn find_exercise(&self, id: u32) -> Option<&TrainingExercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    fn insert_exercises(&mut self, exercises: Vec<NewExercise>) -> Result<Vec<u32>> {
        let mut ids = Vec::with_capacity(exercises.len());
        for exercise in exercises {
            let id = self.next_exercise_id();
            self.exercises.push(TrainingExercise {
                id,
                level: exercise.level,
                input_string: exercise.input_string,
                expected_regex: exercise.expected_regex,
                description: exercise.description,
            });
            ids.push(id);
        }
        Ok(ids)
    }

    fn save_result(&mut self, result: NewResult) -> Result<TrainingResult> {
        let saved = TrainingResult {
            id: self.next_result_id(),
            user_id: result.user_id,
            exercise_id: result.exercise_id,
            user_regex: result.user_regex,
            is_correct: result.is_correct,
            timestamp: unix_now(),
        };
        self.results.push(saved.clone());
        Ok(saved)
    }

    fn results_for_user(&self, user_id: u32) -> Vec<&TrainingResult> {
        self.results.iter().filter(|r| r.user_id == user_id).collect()
    }
}

/// A store kept in a JSON file.
///
/// The file is read once on open and replaced after every change. A change
/// that cannot be written is not kept in memory either.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    data: MemoryStore,
}

impl JsonStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => {
                warn!("store file {} is empty; starting fresh", path.display());
                MemoryStore::default()
            }
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no store at {}; starting empty", path.display());
                MemoryStore::default()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(JsonStore { path, data })
    }

    /// Where the store lives
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the next state is written to before it replaces the store
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write `data` to disk, replacing the store file in one rename
    fn persist(&self, data: &MemoryStore) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        let staging = self.staging_path();
        fs::write(&staging, json)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        debug!("wrote store to {}", self.path.display());
        Ok(())
    }

    /// Apply `change` to a copy, persist it, then keep it
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.data.clone();
        let out = change(&mut next)?;
        self.persist(&next)?;
        self.data = next;
        Ok(out)
    }
}

impl TrainingStore for JsonStore {
    fn exercise_count(&self) -> usize {
        self.data.exercise_count()
    }

    fn exercises_by_level(&self, level: TrainingLevel) -> Vec<&TrainingExercise> {
        self.data.exercises_by_level(level)
    }

    fn find_exercise(&self, id: u32) -> Option<&TrainingExercise> {
        self.data.find_exercise(id)
    }

    fn insert_exercises(&mut self, exercises: Vec<NewExercise>) -> Result<Vec<u32>> {
        self.commit(|data| data.insert_exercises(exercises))
    }

    fn save_result(&mut self, result: NewResult) -> Result<TrainingResult> {
        self.commit(|data| data.save_result(result))
    }

    fn results_for_user(&self, user_id: u32) -> Vec<&TrainingResult> {
        self.data.results_for_user(user_id)
    }
}
