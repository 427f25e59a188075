use crate::error::{JudgeError, JudgeResult};
use crate::scorer::types::DifficultyLevel;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Multipliers for the 2nd and 3rd time an element is scored.
pub const DEFAULT_REPETITION_DECAY: [f64; 2] = [0.66, 0.33];

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub rules: ScoringRules,
    #[command(flatten)]
    pub session: SessionDefaults,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    // === DIFFICULTY ===
    #[arg(long, default_value_t = 1.5)]
    pub beginner_multiplier: f64,
    #[arg(long, default_value_t = 1.0)]
    pub amateur_multiplier: f64,
    #[arg(long, default_value_t = 0.75)]
    pub professional_multiplier: f64,

    // === REPETITION ===
    // Comma separated, first value applies to the 2nd occurrence.
    // Occurrences past the end of the list score nothing.
    #[arg(long, default_value = "0.66,0.33")]
    pub repetition_decay: String,

    // === COMBOS ===
    #[arg(long, default_value_t = 2.0)]
    pub combo_area_points: f64,
    #[arg(long, default_value_t = 2.0)]
    pub combo_unbroken_points: f64,
    #[arg(long, default_value_t = 1.0)]
    pub combo_penalty_points: f64,
    // Unset means the penalty can be applied until the combo reaches 0.
    #[arg(long)]
    pub combo_penalty_limit: Option<u32>,

    // === POWER MOVES ===
    #[arg(long, default_value_t = 1.0)]
    pub power_move_rep_bonus: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            beginner_multiplier: 1.5,
            amateur_multiplier: 1.0,
            professional_multiplier: 0.75,
            repetition_decay: join_decay(&DEFAULT_REPETITION_DECAY),
            combo_area_points: 2.0,
            combo_unbroken_points: 2.0,
            combo_penalty_points: 1.0,
            combo_penalty_limit: None,
            power_move_rep_bonus: 1.0,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    #[arg(long, default_value = "amateur")]
    pub difficulty: DifficultyLevel,
    #[arg(long, default_value = "A")]
    pub participant: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::Amateur,
            participant: "A".to_string(),
        }
    }
}

impl ScoringRules {
    pub fn multiplier_for(&self, level: DifficultyLevel) -> f64 {
        match level {
            DifficultyLevel::Beginner => self.beginner_multiplier,
            DifficultyLevel::Amateur => self.amateur_multiplier,
            DifficultyLevel::Professional => self.professional_multiplier,
        }
    }

    pub fn repetition_factors(&self) -> JudgeResult<Vec<f64>> {
        let trimmed = self.repetition_decay.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        trimmed
            .split(',')
            .map(|part| {
                let value: f64 = part.trim().parse().map_err(|_| {
                    JudgeError::Config(format!(
                        "Invalid number '{}' in repetition_decay",
                        part.trim()
                    ))
                })?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(JudgeError::Config(format!(
                        "repetition_decay values must be within [0, 1], got {}",
                        value
                    )));
                }
                Ok(value)
            })
            .collect()
    }

    /// Reject values that would make scores negative or non-finite.
    pub fn validate(&self) -> JudgeResult<()> {
        let checks = [
            ("beginner_multiplier", self.beginner_multiplier),
            ("amateur_multiplier", self.amateur_multiplier),
            ("professional_multiplier", self.professional_multiplier),
            ("combo_area_points", self.combo_area_points),
            ("combo_unbroken_points", self.combo_unbroken_points),
            ("combo_penalty_points", self.combo_penalty_points),
            ("power_move_rep_bonus", self.power_move_rep_bonus),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(JudgeError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        self.repetition_factors().map(|_| ())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let content = fs::read_to_string(path)?;
        let rules: Self = serde_json::from_str(&content)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn merge_from_cli(&mut self, cli_rules: &ScoringRules, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_rules.$field.clone();
                }
            };
        }

        update_if_present!(beginner_multiplier, "beginner_multiplier");
        update_if_present!(amateur_multiplier, "amateur_multiplier");
        update_if_present!(professional_multiplier, "professional_multiplier");
        update_if_present!(repetition_decay, "repetition_decay");
        update_if_present!(combo_area_points, "combo_area_points");
        update_if_present!(combo_unbroken_points, "combo_unbroken_points");
        update_if_present!(combo_penalty_points, "combo_penalty_points");
        update_if_present!(combo_penalty_limit, "combo_penalty_limit");
        update_if_present!(power_move_rep_bonus, "power_move_rep_bonus");
    }
}

fn join_decay(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
