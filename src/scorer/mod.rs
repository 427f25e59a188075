pub mod combo;
pub mod engine;
pub mod types;

pub use self::combo::{ComboFlag, ComboState};
pub use self::types::{BasePoints, DifficultyLevel, ExtraPoints, PositionModifier, ScoreDetails, ScoreInput};
use crate::config::{ScoringRules, DEFAULT_REPETITION_DECAY};
use crate::error::JudgeResult;

/// Scoring rules with the repetition table already parsed.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub rules: ScoringRules,
    decay: Vec<f64>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            rules: ScoringRules::default(),
            decay: DEFAULT_REPETITION_DECAY.to_vec(),
        }
    }
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> JudgeResult<Self> {
        rules.validate()?;
        let decay = rules.repetition_factors()?;
        Ok(Self { rules, decay })
    }

    pub fn difficulty_multiplier(&self, level: DifficultyLevel) -> f64 {
        self.rules.multiplier_for(level)
    }

    pub fn repetition_factor(&self, occurrence: u32) -> f64 {
        engine::repetition_factor(occurrence, &self.decay)
    }

    /// Final points only.
    pub fn score(&self, input: &ScoreInput, occurrence: u32, level: DifficultyLevel) -> f64 {
        self.score_details(input, occurrence, level).score
    }

    /// Points with every factor that produced them.
    pub fn score_details(
        &self,
        input: &ScoreInput,
        occurrence: u32,
        level: DifficultyLevel,
    ) -> ScoreDetails {
        engine::compute(
            input,
            occurrence,
            self.difficulty_multiplier(level),
            &self.decay,
        )
    }

    pub fn combo_score(&self, combo: &ComboState) -> f64 {
        combo.score(&self.rules)
    }
}
