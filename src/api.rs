use crate::catalog::{Catalog, Category, ElementEntry, Exercise, PowerMoveGroup};
use crate::config::{Config, SessionDefaults};
use crate::error::{JudgeError, JudgeResult};
use crate::routine::{Routine, RoutineAction};
use crate::scorer::{ComboFlag, DifficultyLevel, Scorer};
use crate::session::{ElementRequest, JudgeSession, RecordedElement, SessionTotals};
use std::collections::BTreeMap;
use tracing::info;

/// The judging panel: shared reference data plus one isolated session per
/// participant. Every operation targets the active participant.
pub struct JudgePanel {
    catalog: Catalog,
    scorer: Scorer,
    default_difficulty: DifficultyLevel,
    sessions: BTreeMap<String, JudgeSession>,
    active: String,
}

impl JudgePanel {
    pub fn new(catalog: Catalog, scorer: Scorer, defaults: &SessionDefaults) -> Self {
        let mut sessions = BTreeMap::new();
        sessions.insert(
            defaults.participant.clone(),
            JudgeSession::new(&defaults.participant, defaults.difficulty),
        );
        Self {
            catalog,
            scorer,
            default_difficulty: defaults.difficulty,
            sessions,
            active: defaults.participant.clone(),
        }
    }

    /// Standard catalog with the configured rules.
    pub fn from_config(config: &Config) -> JudgeResult<Self> {
        let scorer = Scorer::new(config.rules.clone())?;
        Ok(Self::new(Catalog::standard(), scorer, &config.session))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn active_participant(&self) -> &str {
        &self.active
    }

    pub fn session(&self) -> Option<&JudgeSession> {
        self.sessions.get(&self.active)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &JudgeSession> {
        self.sessions.values()
    }

    fn active_mut(&mut self) -> &mut JudgeSession {
        session_for(&mut self.sessions, &self.active, self.default_difficulty)
    }

    pub fn list_elements(&self, category: Category) -> &[ElementEntry] {
        self.catalog.list_elements(category)
    }

    pub fn set_participant(&mut self, id: &str) {
        if self.active != id {
            info!("👤 Switching to participant {}", id);
        }
        self.active = id.to_string();
        self.active_mut();
    }

    pub fn set_difficulty(&mut self, level: DifficultyLevel) {
        self.active_mut().set_difficulty(level);
    }

    pub fn select_power_group(&mut self, group: PowerMoveGroup) {
        self.active_mut().selection_mut().select_group(group);
    }

    pub fn select_exercise(&mut self, exercise: Exercise) -> JudgeResult<()> {
        self.active_mut().selection_mut().select_exercise(exercise)
    }

    pub fn select_base(&mut self, base: &str) -> JudgeResult<()> {
        // Reject names the catalog cannot build on before they are stored
        if !self.catalog.power_move_bases().iter().any(|e| e.name == base) {
            return Err(JudgeError::not_found(Category::PowerMoves, base));
        }
        self.active_mut().selection_mut().select_base(base)
    }

    pub fn add_element(&mut self, request: &ElementRequest) -> JudgeResult<&RecordedElement> {
        let session = session_for(&mut self.sessions, &self.active, self.default_difficulty);
        session.add_element(&self.catalog, &self.scorer, request)
    }

    pub fn remove_element(&mut self, index: usize) -> JudgeResult<RecordedElement> {
        self.active_mut().remove_element(index)
    }

    pub fn toggle_combo_flag(&mut self, flag: ComboFlag) -> bool {
        self.active_mut().toggle_combo_flag(flag)
    }

    pub fn apply_combo_penalty(&mut self) -> bool {
        let session = session_for(&mut self.sessions, &self.active, self.default_difficulty);
        session.apply_combo_penalty(&self.scorer)
    }

    pub fn set_power_move_bonus(&mut self, enabled: bool) {
        self.active_mut().set_power_move_bonus(enabled);
    }

    pub fn combo_score(&self) -> f64 {
        self.session()
            .map(|s| self.scorer.combo_score(s.combo()))
            .unwrap_or(0.0)
    }

    pub fn subtotal(&self, category: Category) -> f64 {
        self.session()
            .map(|s| s.subtotal(category, &self.scorer))
            .unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.session()
            .map(|s| s.grand_total(&self.scorer))
            .unwrap_or(0.0)
    }

    pub fn totals(&self) -> Vec<SessionTotals> {
        self.sessions
            .values()
            .map(|s| s.totals(&self.scorer))
            .collect()
    }

    pub fn apply(&mut self, action: &RoutineAction) -> JudgeResult<()> {
        match action {
            RoutineAction::Participant(id) => self.set_participant(id),
            RoutineAction::Difficulty(level) => self.set_difficulty(*level),
            RoutineAction::SelectGroup(group) => self.select_power_group(*group),
            RoutineAction::SelectExercise(exercise) => self.select_exercise(*exercise)?,
            RoutineAction::SelectBase(base) => self.select_base(base)?,
            RoutineAction::Add(request) => {
                self.add_element(request)?;
            }
            RoutineAction::Remove(index) => {
                self.remove_element(*index)?;
            }
            RoutineAction::ComboFlag(flag) => {
                self.toggle_combo_flag(*flag);
            }
            RoutineAction::ComboPenalty => {
                self.apply_combo_penalty();
            }
            RoutineAction::PowerMoveBonus(enabled) => self.set_power_move_bonus(*enabled),
        }
        Ok(())
    }

    /// Replay a routine. Stops at the first failing action.
    pub fn replay(&mut self, routine: &Routine) -> JudgeResult<()> {
        if let Some(id) = &routine.participant {
            self.set_participant(id);
        }
        if let Some(level) = routine.difficulty {
            self.set_difficulty(level);
        }
        for action in &routine.actions {
            self.apply(action)?;
        }
        Ok(())
    }
}

fn session_for<'a>(
    sessions: &'a mut BTreeMap<String, JudgeSession>,
    id: &str,
    difficulty: DifficultyLevel,
) -> &'a mut JudgeSession {
    sessions
        .entry(id.to_string())
        .or_insert_with(|| JudgeSession::new(id, difficulty))
}
