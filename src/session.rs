//! One participant's judging session: the append-only element log, combo
//! flags, the power-move selection in progress and the active difficulty.
//!
//! Scores are frozen when an element is added. The occurrence count used
//! for repetition decay is taken from the log at that moment, so removing
//! an earlier element never rescales a later one.

use crate::catalog::{Catalog, Category, Exercise, PowerMoveGroup, PowerMovement};
use crate::error::{JudgeError, JudgeResult};
use crate::scorer::{
    BasePoints, ComboFlag, ComboState, DifficultyLevel, ExtraPoints, PositionModifier,
    ScoreDetails, ScoreInput, Scorer,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;

fn default_cleanliness() -> u8 {
    10
}

/// What the judge confirmed on the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRequest {
    pub category: Category,
    /// Catalog name. Ignored for power moves, which come from the selection.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: PositionModifier,
    #[serde(default)]
    pub extra: ExtraPoints,
    #[serde(default = "default_cleanliness")]
    pub cleanliness: u8,
    /// Replaces the session's power-move selection for this add.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_move: Option<PowerMoveSelection>,
}

impl ElementRequest {
    pub fn new(category: Category, name: &str) -> Self {
        Self {
            category,
            name: name.to_string(),
            position: PositionModifier::Full,
            extra: ExtraPoints::None,
            cleanliness: default_cleanliness(),
            power_move: None,
        }
    }

    pub fn power_move() -> Self {
        Self::new(Category::PowerMoves, "")
    }

    pub fn with_position(mut self, position: PositionModifier) -> Self {
        self.position = position;
        self
    }

    pub fn with_extra(mut self, extra: ExtraPoints) -> Self {
        self.extra = extra;
        self
    }

    pub fn with_cleanliness(mut self, cleanliness: u8) -> Self {
        self.cleanliness = cleanliness;
        self
    }

    pub fn with_selection(mut self, selection: PowerMoveSelection) -> Self {
        self.power_move = Some(selection);
        self
    }
}

/// Group, then exercise, then base static. Each step needs the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerMoveSelection {
    pub group: Option<PowerMoveGroup>,
    pub exercise: Option<Exercise>,
    pub base: Option<String>,
}

impl PowerMoveSelection {
    pub fn complete(group: PowerMoveGroup, exercise: Exercise, base: &str) -> Self {
        Self {
            group: Some(group),
            exercise: Some(exercise),
            base: Some(base.to_string()),
        }
    }

    /// Changing group invalidates the later steps.
    pub fn select_group(&mut self, group: PowerMoveGroup) {
        if self.group != Some(group) {
            self.exercise = None;
            self.base = None;
        }
        self.group = Some(group);
    }

    pub fn select_exercise(&mut self, exercise: Exercise) -> JudgeResult<()> {
        let group = self.group.ok_or(JudgeError::IncompleteSelection("group"))?;
        if !group.exercises().contains(&exercise) {
            return Err(JudgeError::not_found(
                Category::PowerMoves,
                format!("{} / {}", group, exercise),
            ));
        }
        self.exercise = Some(exercise);
        Ok(())
    }

    pub fn select_base(&mut self, base: &str) -> JudgeResult<()> {
        if self.group.is_none() {
            return Err(JudgeError::IncompleteSelection("group"));
        }
        if self.exercise.is_none() {
            return Err(JudgeError::IncompleteSelection("exercise"));
        }
        self.base = Some(base.to_string());
        Ok(())
    }

    pub fn resolve(&self) -> JudgeResult<PowerMovement> {
        let group = self.group.ok_or(JudgeError::IncompleteSelection("group"))?;
        let exercise = self
            .exercise
            .ok_or(JudgeError::IncompleteSelection("exercise"))?;
        let base = self
            .base
            .clone()
            .ok_or(JudgeError::IncompleteSelection("base element"))?;
        Ok(PowerMovement {
            group,
            exercise,
            base,
        })
    }
}

/// Identity used to count repeats. Power moves are told apart by the whole
/// movement, so a Maltese press and a Maltese pull up decay separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepetitionKey {
    Element { category: Category, name: String },
    PowerMove(PowerMovement),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedElement {
    pub category: Category,
    pub display_name: String,
    pub key: RepetitionKey,
    pub input: ScoreInput,
    pub details: ScoreDetails,
}

impl RecordedElement {
    pub fn score(&self) -> f64 {
        self.details.score
    }

    pub fn cleanliness(&self) -> u8 {
        self.input.cleanliness
    }

    pub fn is_super(&self) -> bool {
        matches!(self.input.base, BasePoints::Super { .. })
    }

    pub fn position(&self) -> Option<PositionModifier> {
        match self.input.base {
            BasePoints::Static { position, .. } | BasePoints::PowerMove { position, .. } => {
                Some(position)
            }
            BasePoints::Flat { .. } | BasePoints::Super { .. } => None,
        }
    }

    pub fn static_base_points(&self) -> Option<f64> {
        match self.input.base {
            BasePoints::PowerMove {
                static_base_points, ..
            } => Some(static_base_points),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionTotals {
    pub participant: String,
    pub difficulty: DifficultyLevel,
    pub subtotals: Vec<(Category, f64)>,
    pub power_move_bonus: f64,
    pub grand_total: f64,
}

#[derive(Debug, Clone)]
pub struct JudgeSession {
    participant: String,
    difficulty: DifficultyLevel,
    elements: Vec<RecordedElement>,
    combo: ComboState,
    power_move_bonus: bool,
    selection: PowerMoveSelection,
}

impl JudgeSession {
    pub fn new(participant: &str, difficulty: DifficultyLevel) -> Self {
        Self {
            participant: participant.to_string(),
            difficulty,
            elements: Vec::new(),
            combo: ComboState::default(),
            power_move_bonus: false,
            selection: PowerMoveSelection::default(),
        }
    }

    pub fn participant(&self) -> &str {
        &self.participant
    }

    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    pub fn elements(&self) -> &[RecordedElement] {
        &self.elements
    }

    pub fn combo(&self) -> &ComboState {
        &self.combo
    }

    pub fn selection(&self) -> &PowerMoveSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut PowerMoveSelection {
        &mut self.selection
    }

    pub fn has_power_move_bonus(&self) -> bool {
        self.power_move_bonus
    }

    /// Applies to elements added from now on.
    pub fn set_difficulty(&mut self, level: DifficultyLevel) {
        if self.difficulty != level {
            info!(
                "🎚️  [{}] Difficulty {} -> {}",
                self.participant, self.difficulty, level
            );
        }
        self.difficulty = level;
    }

    pub fn set_participant(&mut self, id: &str) {
        self.participant = id.to_string();
    }

    pub fn occurrences(&self, key: &RepetitionKey) -> u32 {
        self.elements.iter().filter(|e| &e.key == key).count() as u32
    }

    pub fn add_element(
        &mut self,
        catalog: &Catalog,
        scorer: &Scorer,
        request: &ElementRequest,
    ) -> JudgeResult<&RecordedElement> {
        let (key, base, display_name) = match request.category {
            Category::PowerMoves => {
                let selection = request.power_move.as_ref().unwrap_or(&self.selection);
                let movement = selection.resolve()?;
                let entry = catalog.power_move(movement.group, movement.exercise, &movement.base)?;
                let static_base_points = entry
                    .static_base_points()
                    .ok_or_else(|| JudgeError::not_found(Category::PowerMoves, &entry.name))?;
                let display = format!(
                    "{} - {} - {} ({})",
                    movement.group,
                    movement.exercise,
                    movement.base,
                    request.position.label()
                );
                let base = BasePoints::PowerMove {
                    static_base_points,
                    position: request.position,
                };
                (RepetitionKey::PowerMove(movement), base, display)
            }
            category => {
                let entry = catalog.entry(category, &request.name)?;
                let (base, display) = match category {
                    Category::Statics if entry.is_super => (
                        BasePoints::Super {
                            base: entry.base_value,
                        },
                        entry.name.clone(),
                    ),
                    Category::Statics => (
                        BasePoints::Static {
                            base: entry.base_value,
                            position: request.position,
                        },
                        format!("{} ({})", entry.name, request.position.label()),
                    ),
                    _ => (
                        BasePoints::Flat {
                            base: entry.base_value,
                        },
                        entry.name.clone(),
                    ),
                };
                let key = RepetitionKey::Element {
                    category,
                    name: entry.name.clone(),
                };
                (key, base, display)
            }
        };

        let display_name = if request.extra == ExtraPoints::None {
            display_name
        } else {
            format!("{} (+{}p)", display_name, request.extra.points())
        };

        let input = ScoreInput {
            category: request.category,
            base,
            cleanliness: request.cleanliness,
            extra: request.extra,
        };
        let occurrence = self.occurrences(&key) + 1;
        let details = scorer.score_details(&input, occurrence, self.difficulty);

        info!(
            "➕ [{}] {}: {} = {:.3}",
            self.participant, request.category, display_name, details.score
        );

        // The selection sticks so several moves of one kind can be entered.
        if let (Some(selection), RepetitionKey::PowerMove(_)) = (&request.power_move, &key) {
            self.selection = selection.clone();
        }

        self.elements.push(RecordedElement {
            category: request.category,
            display_name,
            key,
            input,
            details,
        });
        let index = self.elements.len() - 1;
        Ok(&self.elements[index])
    }

    pub fn remove_element(&mut self, index: usize) -> JudgeResult<RecordedElement> {
        if index >= self.elements.len() {
            return Err(JudgeError::InvalidIndex {
                index,
                len: self.elements.len(),
            });
        }
        let removed = self.elements.remove(index);
        info!(
            "➖ [{}] Removed #{} {} ({:.3})",
            self.participant,
            index,
            removed.display_name,
            removed.score()
        );
        Ok(removed)
    }

    pub fn toggle_combo_flag(&mut self, flag: ComboFlag) -> bool {
        let value = self.combo.toggle(flag);
        info!("🔗 [{}] Combo {} = {}", self.participant, flag, value);
        value
    }

    pub fn apply_combo_penalty(&mut self, scorer: &Scorer) -> bool {
        let applied = self.combo.apply_penalty(&scorer.rules);
        if applied {
            info!(
                "⚠️  [{}] Combo penalty #{}",
                self.participant, self.combo.penalty_applied
            );
        }
        applied
    }

    pub fn set_power_move_bonus(&mut self, enabled: bool) {
        self.power_move_bonus = enabled;
    }

    pub fn subtotal(&self, category: Category, scorer: &Scorer) -> f64 {
        if category.has_element_log() {
            self.elements
                .iter()
                .filter(|e| e.category == category)
                .map(RecordedElement::score)
                .sum()
        } else {
            scorer.combo_score(&self.combo)
        }
    }

    pub fn power_move_bonus(&self, scorer: &Scorer) -> f64 {
        if self.power_move_bonus {
            scorer.rules.power_move_rep_bonus
        } else {
            0.0
        }
    }

    pub fn grand_total(&self, scorer: &Scorer) -> f64 {
        self.totals(scorer).grand_total
    }

    pub fn totals(&self, scorer: &Scorer) -> SessionTotals {
        let subtotals: Vec<(Category, f64)> = Category::iter()
            .map(|c| (c, self.subtotal(c, scorer)))
            .collect();
        let power_move_bonus = self.power_move_bonus(scorer);
        let grand_total = subtotals.iter().map(|(_, s)| s).sum::<f64>() + power_move_bonus;
        SessionTotals {
            participant: self.participant.clone(),
            difficulty: self.difficulty,
            subtotals,
            power_move_bonus,
            grand_total,
        }
    }
}
