use crate::config::ScoringRules;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ComboFlag {
    Freestyle,
    Statics,
    PowerMoves,
    Balance,
    Unbroken,
}

/// Combo flags for one participant. The score is always derived from the
/// flags and the penalty counter, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboState {
    pub freestyle: bool,
    pub statics: bool,
    pub power_moves: bool,
    pub balance: bool,
    pub unbroken: bool,
    pub penalty_applied: u32,
}

impl ComboState {
    pub fn is_set(&self, flag: ComboFlag) -> bool {
        match flag {
            ComboFlag::Freestyle => self.freestyle,
            ComboFlag::Statics => self.statics,
            ComboFlag::PowerMoves => self.power_moves,
            ComboFlag::Balance => self.balance,
            ComboFlag::Unbroken => self.unbroken,
        }
    }

    pub fn set(&mut self, flag: ComboFlag, value: bool) {
        let slot = match flag {
            ComboFlag::Freestyle => &mut self.freestyle,
            ComboFlag::Statics => &mut self.statics,
            ComboFlag::PowerMoves => &mut self.power_moves,
            ComboFlag::Balance => &mut self.balance,
            ComboFlag::Unbroken => &mut self.unbroken,
        };
        *slot = value;
    }

    /// Flip a flag and return its new value.
    pub fn toggle(&mut self, flag: ComboFlag) -> bool {
        let value = !self.is_set(flag);
        self.set(flag, value);
        value
    }

    pub fn areas_touched(&self) -> u32 {
        [self.freestyle, self.statics, self.power_moves, self.balance]
            .iter()
            .filter(|&&b| b)
            .count() as u32
    }

    /// Points before penalties.
    pub fn raw_score(&self, rules: &ScoringRules) -> f64 {
        let unbroken = if self.unbroken {
            rules.combo_unbroken_points
        } else {
            0.0
        };
        f64::from(self.areas_touched()) * rules.combo_area_points + unbroken
    }

    pub fn score(&self, rules: &ScoringRules) -> f64 {
        let penalty = f64::from(self.penalty_applied) * rules.combo_penalty_points;
        (self.raw_score(rules) - penalty).max(0.0)
    }

    /// Count one low-cleanliness penalty. Returns false when nothing was
    /// applied: the combo is already at 0 or the configured limit is reached.
    pub fn apply_penalty(&mut self, rules: &ScoringRules) -> bool {
        if let Some(limit) = rules.combo_penalty_limit {
            if self.penalty_applied >= limit {
                warn!("Combo penalty limit ({}) already reached", limit);
                return false;
            }
        }
        if self.score(rules) <= 0.0 {
            warn!("Combo score is already 0, penalty ignored");
            return false;
        }
        self.penalty_applied += 1;
        true
    }
}
