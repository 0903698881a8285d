//! Read-only cost database for ascension and talent materials.
//!
//! The estimator only ever asks "what does phase N / talent level N cost for
//! this character" - that lookup is behind the [`CostDatabase`] trait so the
//! math in [`crate::core::build_cost`] stays testable against in-memory
//! fixtures. The shipped implementation loads one JSON file at startup.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// One material line item in a cost bundle. The upstream game database
/// supplies the rarity; it is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCost {
    pub name: String,
    pub count: u64,
    pub rarity: u8,
}

/// Ascension cost bundles for one character.
///
/// `phases[0]` is the cost of the first ascension (unlocking level 20 -> 40),
/// through `phases[5]` for the last (80 -> 90). Mora appears as an entry
/// named `"Mora"` inside each bundle, matching the upstream data layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCosts {
    pub phases: Vec<Vec<MaterialCost>>,
}

/// Per-level talent cost bundles for one character.
///
/// `levels[0]` is the cost of raising a talent from level 1 to 2, through
/// `levels[8]` for 9 to 10. All three talents of a character share one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentCosts {
    pub levels: Vec<Vec<MaterialCost>>,
}

/// Opaque read-only provider of per-character cost tables.
///
/// `None` means the character is unknown to the database - an expected,
/// common case that callers must surface as "no data", not as a failure.
pub trait CostDatabase: Send + Sync {
    fn character_costs(&self, name: &str) -> Option<&CharacterCosts>;
    fn talent_costs(&self, name: &str) -> Option<&TalentCosts>;
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CostFile {
    #[serde(default)]
    characters: HashMap<String, CharacterCosts>,
    #[serde(default)]
    talents: HashMap<String, TalentCosts>,
}

/// [`CostDatabase`] backed by a JSON file loaded once at startup.
#[derive(Debug, Default)]
pub struct JsonCostDatabase {
    characters: HashMap<String, CharacterCosts>,
    talents: HashMap<String, TalentCosts>,
}

impl JsonCostDatabase {
    /// Builds a database directly from maps. Used by tests and by callers
    /// that assemble cost data from another source.
    #[must_use]
    pub fn from_parts(
        characters: HashMap<String, CharacterCosts>,
        talents: HashMap<String, TalentCosts>,
    ) -> Self {
        Self { characters, talents }
    }

    /// Loads the cost database from a JSON file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed; unlike the user-data
    /// store, a missing cost file is a configuration error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
            message: format!("Failed to read cost database {path_ref:?}: {e}"),
        })?;
        let file: CostFile = serde_json::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse cost database {path_ref:?}: {e}"),
        })?;
        info!(
            "Loaded cost database from {:?}: {} character(s), {} talent table(s)",
            path_ref,
            file.characters.len(),
            file.talents.len()
        );
        Ok(Self {
            characters: file.characters,
            talents: file.talents,
        })
    }
}

impl CostDatabase for JsonCostDatabase {
    fn character_costs(&self, name: &str) -> Option<&CharacterCosts> {
        self.characters.get(name)
    }

    fn talent_costs(&self, name: &str) -> Option<&TalentCosts> {
        self.talents.get(name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "characters": {
            "Hu Tao": {
                "phases": [
                    [
                        {"name": "Mora", "count": 20000, "rarity": 1},
                        {"name": "Agnidus Agate Sliver", "count": 1, "rarity": 2}
                    ]
                ]
            }
        },
        "talents": {
            "Hu Tao": {
                "levels": [
                    [{"name": "Mora", "count": 12500, "rarity": 1}]
                ]
            }
        }
    }"#;

    #[test]
    fn test_from_path_loads_characters_and_talents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let db = JsonCostDatabase::from_path(file.path()).unwrap();
        let costs = db.character_costs("Hu Tao").unwrap();
        assert_eq!(costs.phases.len(), 1);
        assert_eq!(costs.phases[0][1].name, "Agnidus Agate Sliver");
        assert_eq!(costs.phases[0][1].rarity, 2);
        assert!(db.talent_costs("Hu Tao").is_some());
    }

    #[test]
    fn test_unknown_character_is_none() {
        let db = JsonCostDatabase::default();
        assert!(db.character_costs("Nobody").is_none());
        assert!(db.talent_costs("Nobody").is_none());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = JsonCostDatabase::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1, 2, 3]").unwrap();
        let err = JsonCostDatabase::from_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
