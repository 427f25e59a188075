use crate::catalog::{Exercise, PowerMoveGroup};
use crate::error::{JudgeError, JudgeResult};
use crate::scorer::{ComboFlag, DifficultyLevel};
use crate::session::ElementRequest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One step on the judging panel, in the order the judge performed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineAction {
    Participant(String),
    Difficulty(DifficultyLevel),
    SelectGroup(PowerMoveGroup),
    SelectExercise(Exercise),
    SelectBase(String),
    Add(ElementRequest),
    Remove(usize),
    ComboFlag(ComboFlag),
    ComboPenalty,
    PowerMoveBonus(bool),
}

/// A scripted judging session, replayed through a `JudgePanel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    #[serde(default)]
    pub participant: Option<String>,
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    pub actions: Vec<RoutineAction>,
}

impl Routine {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> JudgeResult<Self> {
        let routine: Self = serde_json::from_str(content)?;
        routine.validate()?;
        Ok(routine)
    }

    /// Cleanliness marks must be 1..=10 before they reach the scorer.
    pub fn validate(&self) -> JudgeResult<()> {
        for (i, action) in self.actions.iter().enumerate() {
            if let RoutineAction::Add(req) = action {
                if !(1..=10).contains(&req.cleanliness) {
                    return Err(JudgeError::Config(format!(
                        "action {}: cleanliness {} is outside 1..=10",
                        i, req.cleanliness
                    )));
                }
            }
        }
        Ok(())
    }
}
