use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Body position used to scale statics and power moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PositionModifier {
    Tuck,
    TuckAdvanced,
    OneLeg,
    Straddle,
    Half,
    #[default]
    Full,
}

impl PositionModifier {
    pub fn factor(self) -> f64 {
        match self {
            Self::Tuck => 0.15,
            Self::TuckAdvanced => 0.3,
            Self::OneLeg => 0.4,
            Self::Straddle => 0.7,
            Self::Half => 0.8,
            Self::Full => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Tuck => "Tuck",
            Self::TuckAdvanced => "Tuck Adv",
            Self::OneLeg => "One Leg",
            Self::Straddle => "Straddle",
            Self::Half => "Half",
            Self::Full => "Full",
        }
    }
}

/// Flat bonus added after every multiplier except repetition decay.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ExtraPoints {
    #[default]
    None,
    Quarter,
    Half,
}

impl ExtraPoints {
    pub fn points(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Quarter => 0.25,
            Self::Half => 0.5,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    #[default]
    Amateur,
    Professional,
}

/// Where an element's points come from before any session-wide scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BasePoints {
    /// Freestyle and balance: catalog value as is.
    Flat { base: f64 },
    /// Regular static hold, scaled by body position.
    Static {
        base: f64,
        position: PositionModifier,
    },
    /// Super static: fixed value, position never applies.
    Super { base: f64 },
    /// Power move: a third of the base static, scaled by body position.
    PowerMove {
        static_base_points: f64,
        position: PositionModifier,
    },
}

impl BasePoints {
    pub fn base(&self) -> f64 {
        match *self {
            Self::Flat { base } | Self::Static { base, .. } | Self::Super { base } => base,
            Self::PowerMove {
                static_base_points, ..
            } => static_base_points,
        }
    }

    pub fn position_factor(&self) -> f64 {
        match *self {
            Self::Static { position, .. } | Self::PowerMove { position, .. } => position.factor(),
            Self::Flat { .. } | Self::Super { .. } => 1.0,
        }
    }
}

/// Everything needed to score one element, minus the session context
/// (difficulty multiplier and occurrence count).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub category: Category,
    pub base: BasePoints,
    /// Judge's execution mark, expected within 1..=10.
    pub cleanliness: u8,
    pub extra: ExtraPoints,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub base_points: f64,
    pub position_factor: f64,
    pub difficulty_factor: f64,
    pub cleanliness_factor: f64,
    pub extra_points: f64,

    // Repetition
    pub occurrence: u32,
    pub repetition_factor: f64,

    pub score: f64,
}
