use super::ElementEntry;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A power move is worth a third of the static hold it is built on.
pub const POWER_MOVE_DIVISOR: f64 = 3.0;

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PowerMoveGroup {
    Push,
    Pull,
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Press,
    PushUp,
    Raise,
    PullUp,
}

impl PowerMoveGroup {
    /// Exercises offered under each group, in selection order.
    pub fn exercises(self) -> &'static [Exercise] {
        match self {
            Self::Push => &[Exercise::Press, Exercise::PushUp],
            Self::Pull => &[Exercise::Raise, Exercise::PullUp, Exercise::Press],
        }
    }
}

impl Exercise {
    /// Suffix used when naming a movement built on a static.
    pub fn suffix(self, group: PowerMoveGroup) -> &'static str {
        match (group, self) {
            (PowerMoveGroup::Pull, Self::Press) => "Press (Pull)",
            (_, Self::Press) => "Press",
            (_, Self::PushUp) => "Push up",
            (_, Self::Raise) => "Raise",
            (_, Self::PullUp) => "Pull up",
        }
    }
}

/// Fully configured power move: group, exercise and base static.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowerMovement {
    pub group: PowerMoveGroup,
    pub exercise: Exercise,
    pub base: String,
}

impl PowerMovement {
    pub fn name(&self) -> String {
        format!("{} {}", self.base, self.exercise.suffix(self.group))
    }
}

/// Cross every group/exercise pair with every base static.
pub(super) fn expand(bases: &[ElementEntry]) -> Vec<ElementEntry> {
    let mut out = Vec::new();
    for group in [PowerMoveGroup::Push, PowerMoveGroup::Pull] {
        for &exercise in group.exercises() {
            for base in bases {
                let movement = PowerMovement {
                    group,
                    exercise,
                    base: base.name.clone(),
                };
                out.push(ElementEntry {
                    name: movement.name(),
                    base_value: base.base_value,
                    is_super: false,
                    power_move: Some(movement),
                });
            }
        }
    }
    out
}
