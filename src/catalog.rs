//! Static reference tables for every scored category.
//!
//! The catalog is built once at startup (either the embedded standard tables
//! or a JSON file) and never mutated afterwards. Power-move entries are not
//! stored in the source tables; they are derived from the power-move base
//! statics for every group/exercise pair when the catalog is constructed.

pub mod power_moves;

use crate::error::{JudgeError, JudgeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

pub use self::power_moves::{Exercise, PowerMoveGroup, PowerMovement, POWER_MOVE_DIVISOR};

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Freestyle,
    Statics,
    PowerMoves,
    Balance,
    Combos,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Freestyle => "Freestyle",
            Self::Statics => "Statics",
            Self::PowerMoves => "Power Moves",
            Self::Balance => "Balance",
            Self::Combos => "Combos",
        }
    }

    /// Categories whose repeated elements lose value (66% / 33% / 0).
    pub fn decays_on_repeat(self) -> bool {
        matches!(self, Self::Freestyle | Self::PowerMoves | Self::Balance)
    }

    /// Combos are scored from flags, every other category from the element log.
    pub fn has_element_log(self) -> bool {
        self != Self::Combos
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementEntry {
    pub name: String,
    pub base_value: f64,
    #[serde(default)]
    pub is_super: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_move: Option<PowerMovement>,
}

impl ElementEntry {
    pub fn new(name: &str, base_value: f64) -> Self {
        Self {
            name: name.to_string(),
            base_value,
            is_super: false,
            power_move: None,
        }
    }

    pub fn super_element(name: &str, base_value: f64) -> Self {
        Self {
            is_super: true,
            ..Self::new(name, base_value)
        }
    }

    /// Power moves score from a third of their base static's value.
    pub fn static_base_points(&self) -> Option<f64> {
        self.power_move
            .as_ref()
            .map(|_| self.base_value / POWER_MOVE_DIVISOR)
    }
}

/// On-disk shape of a catalog. `power_move_bases` falls back to the
/// non-super statics when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CatalogFile {
    freestyle: Vec<ElementEntry>,
    statics: Vec<ElementEntry>,
    power_move_bases: Vec<ElementEntry>,
    balance: Vec<ElementEntry>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    freestyle: Vec<ElementEntry>,
    statics: Vec<ElementEntry>,
    power_move_bases: Vec<ElementEntry>,
    power_moves: Vec<ElementEntry>,
    balance: Vec<ElementEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    pub fn new(
        freestyle: Vec<ElementEntry>,
        statics: Vec<ElementEntry>,
        power_move_bases: Vec<ElementEntry>,
        balance: Vec<ElementEntry>,
    ) -> JudgeResult<Self> {
        check_table(Category::Freestyle, &freestyle)?;
        check_table(Category::Statics, &statics)?;
        check_table(Category::PowerMoves, &power_move_bases)?;
        check_table(Category::Balance, &balance)?;

        let power_moves = power_moves::expand(&power_move_bases);
        debug!(
            "Catalog built: {} freestyle, {} statics, {} power moves, {} balance",
            freestyle.len(),
            statics.len(),
            power_moves.len(),
            balance.len()
        );

        Ok(Self {
            freestyle,
            statics,
            power_move_bases,
            power_moves,
            balance,
        })
    }

    /// The embedded competition tables.
    pub fn standard() -> Self {
        let power_move_bases = standard_bases();
        let power_moves = power_moves::expand(&power_move_bases);
        Self {
            freestyle: standard_freestyle(),
            statics: standard_statics(),
            power_move_bases,
            power_moves,
            balance: standard_balance(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JudgeResult<Self> {
        let path = path.as_ref();
        info!("📚 Loading catalog from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> JudgeResult<Self> {
        let mut file: CatalogFile = serde_json::from_str(content)?;
        if file.power_move_bases.is_empty() {
            file.power_move_bases = file
                .statics
                .iter()
                .filter(|e| !e.is_super)
                .map(|e| ElementEntry::new(&e.name, e.base_value))
                .collect();
        }
        Self::new(
            file.freestyle,
            file.statics,
            file.power_move_bases,
            file.balance,
        )
    }

    /// Ordered reference entries for a category. Combos have none.
    pub fn list_elements(&self, category: Category) -> &[ElementEntry] {
        match category {
            Category::Freestyle => &self.freestyle,
            Category::Statics => &self.statics,
            Category::PowerMoves => &self.power_moves,
            Category::Balance => &self.balance,
            Category::Combos => &[],
        }
    }

    /// Statics that power moves can be built on.
    pub fn power_move_bases(&self) -> &[ElementEntry] {
        &self.power_move_bases
    }

    pub fn entry(&self, category: Category, name: &str) -> JudgeResult<&ElementEntry> {
        self.list_elements(category)
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| JudgeError::not_found(category, name))
    }

    pub fn base_value(&self, category: Category, name: &str) -> JudgeResult<f64> {
        self.entry(category, name).map(|e| e.base_value)
    }

    /// Entries reachable after choosing a group and an exercise.
    pub fn power_moves_for(
        &self,
        group: PowerMoveGroup,
        exercise: Exercise,
    ) -> JudgeResult<Vec<&ElementEntry>> {
        if !group.exercises().contains(&exercise) {
            return Err(JudgeError::not_found(
                Category::PowerMoves,
                format!("{} / {}", group, exercise),
            ));
        }
        Ok(self
            .power_moves
            .iter()
            .filter(|e| {
                e.power_move
                    .as_ref()
                    .is_some_and(|m| m.group == group && m.exercise == exercise)
            })
            .collect())
    }

    pub fn power_move(
        &self,
        group: PowerMoveGroup,
        exercise: Exercise,
        base: &str,
    ) -> JudgeResult<&ElementEntry> {
        self.power_moves_for(group, exercise)?
            .into_iter()
            .find(|e| e.power_move.as_ref().is_some_and(|m| m.base == base))
            .ok_or_else(|| JudgeError::not_found(Category::PowerMoves, base))
    }
}

fn check_table(category: Category, entries: &[ElementEntry]) -> JudgeResult<()> {
    for (i, entry) in entries.iter().enumerate() {
        if !entry.base_value.is_finite() || entry.base_value < 0.0 {
            return Err(JudgeError::Config(format!(
                "{} entry '{}' has invalid base value {}",
                category, entry.name, entry.base_value
            )));
        }
        if entries[..i].iter().any(|e| e.name == entry.name) {
            return Err(JudgeError::Config(format!(
                "{} entry '{}' is listed twice",
                category, entry.name
            )));
        }
        if entry.is_super && category != Category::Statics {
            return Err(JudgeError::Config(format!(
                "Only statics can be super elements ('{}' in {})",
                entry.name, category
            )));
        }
    }
    Ok(())
}

fn standard_freestyle() -> Vec<ElementEntry> {
    vec![
        ElementEntry::new("360/Tornado", 1.0),
        ElementEntry::new("Dislocate 360", 1.25),
        ElementEntry::new("540", 1.5),
        ElementEntry::new("Geinger", 1.5),
        ElementEntry::new("Pasavallas", 1.5),
        ElementEntry::new("Ghost Step", 1.75),
        // Super tricks
        ElementEntry::new("720 (Super)", 3.0),
        ElementEntry::new("900 (Super)", 3.0),
        ElementEntry::new("1080 (Super)", 3.0),
        ElementEntry::new("1240 (Super)", 3.0),
        ElementEntry::new("Regrab (Super)", 3.0),
        ElementEntry::new("Super540 (Super)", 3.0),
        ElementEntry::new("Immortal (Super)", 3.0),
    ]
}

fn standard_bases() -> Vec<ElementEntry> {
    vec![
        ElementEntry::new("Front Lever", 1.0),
        ElementEntry::new("Planche", 1.5),
        ElementEntry::new("Touch", 1.5),
        ElementEntry::new("Victorian", 1.25),
        ElementEntry::new("Flag", 0.75),
        ElementEntry::new("Back Lever", 0.75),
        ElementEntry::new("Maltese", 2.25),
        ElementEntry::new("SAT", 2.25),
        ElementEntry::new("Prayer Planche", 2.0),
    ]
}

fn standard_statics() -> Vec<ElementEntry> {
    let mut statics = standard_bases();
    statics.extend([
        ElementEntry::super_element("Victorian Cross (Super)", 3.0),
        ElementEntry::super_element("Reverse Planche (Super)", 3.0),
        ElementEntry::super_element("Supine SAT (Super)", 3.0),
        ElementEntry::super_element("Maltese Airplane (Super)", 3.0),
        ElementEntry::super_element("One Arm Planche (Super)", 3.0),
        ElementEntry::super_element("Tiger Planche (Super)", 3.0),
    ]);
    statics
}

fn standard_balance() -> Vec<ElementEntry> {
    vec![
        ElementEntry::new("Handstand", 0.1),
        ElementEntry::new("Handstand One Arm", 1.25),
        ElementEntry::new("One Arm Flag", 2.0),
        ElementEntry::new("One Arm Planche", 2.0),
        ElementEntry::new("Dragon Planche", 1.75),
        ElementEntry::new("One Arm Front Lever", 1.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_tables_are_valid() {
        let catalog = Catalog::standard();
        for category in Category::iter() {
            let entries = catalog.list_elements(category);
            assert!(check_table(category, entries).is_ok(), "{}", category);
        }
        assert!(catalog.list_elements(Category::Combos).is_empty());
    }

    #[test]
    fn test_base_value_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.base_value(Category::Statics, "Planche").unwrap(), 1.5);
        assert_eq!(catalog.base_value(Category::Balance, "Handstand").unwrap(), 0.1);
        assert!(catalog.entry(Category::Statics, "Tiger Planche (Super)").unwrap().is_super);
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let catalog = Catalog::standard();
        let err = catalog.base_value(Category::Freestyle, "Backflip").unwrap_err();
        assert!(matches!(err, JudgeError::NotFound { .. }));
        // Same name, wrong category
        assert!(catalog.entry(Category::Freestyle, "Planche").is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("power_moves".parse::<Category>().unwrap(), Category::PowerMoves);
        assert_eq!("Statics".parse::<Category>().unwrap(), Category::Statics);
        assert_eq!(Category::PowerMoves.to_string(), "power_moves");
    }

    #[test]
    fn test_json_catalog_derives_power_move_bases() {
        let json = r#"{
            "freestyle": [{ "name": "Kip", "base_value": 0.5 }],
            "statics": [
                { "name": "L-Sit", "base_value": 0.5 },
                { "name": "Hefesto (Super)", "base_value": 3.0, "is_super": true }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.power_move_bases().len(), 1);
        assert_eq!(catalog.power_move_bases()[0].name, "L-Sit");
        assert!(catalog.list_elements(Category::Balance).is_empty());
    }

    #[test]
    fn test_json_catalog_rejects_duplicates() {
        let json = r#"{ "balance": [
            { "name": "Handstand", "base_value": 0.1 },
            { "name": "Handstand", "base_value": 0.2 }
        ] }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(JudgeError::Config(_))
        ));
    }

    #[test]
    fn test_json_catalog_rejects_negative_base() {
        let json = r#"{ "freestyle": [{ "name": "Kip", "base_value": -1.0 }] }"#;
        assert!(Catalog::from_json(json).is_err());
    }
}
