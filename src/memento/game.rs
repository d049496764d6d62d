use super::history::{History, Originator};
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    level: String,
    score: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Game {
    level: String,
    score: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, level: impl Into<String>, score: u32) {
        self.level = level.into();
        self.score = score;
        tracing::debug!(level = %self.level, score, "game state set");
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn save(&self) -> GameSnapshot {
        self.capture()
    }
}

impl Originator for Game {
    type Snapshot = GameSnapshot;

    fn capture(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level.clone(),
            score: self.score,
        }
    }

    fn restore(&mut self, snapshot: &GameSnapshot) {
        self.level.clone_from(&snapshot.level);
        self.score = snapshot.score;
        tracing::debug!(level = %self.level, score = self.score, "game state restored");
    }
}

/// Saved games, addressed by the order they were taken in.
#[derive(Debug, Default)]
pub struct Checkpoints {
    saves: History<GameSnapshot>,
}

impl Checkpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_limit(limit: Option<usize>) -> Self {
        Checkpoints {
            saves: History::from_limit(limit),
        }
    }

    pub fn add(&mut self, snapshot: GameSnapshot) {
        self.saves.push(snapshot);
    }

    pub fn get(&self, index: usize) -> Result<&GameSnapshot> {
        self.saves
            .get(index)
            .ok_or_else(|| PatternError::CheckpointOutOfRange {
                index,
                len: self.saves.len(),
            })
    }

    /// The most recent checkpoint, removed.
    pub fn pop(&mut self) -> Option<GameSnapshot> {
        self.saves.pop()
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }
}
