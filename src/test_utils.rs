//! Shared test utilities for `GenshinBuddy`.
//!
//! This module provides common helpers for setting up a temp-directory
//! backed store and an in-memory cost database fixture.

use crate::core::cost_db::{CharacterCosts, JsonCostDatabase, MaterialCost, TalentCosts};
use crate::store::UserStore;
use std::collections::HashMap;

/// Creates a [`UserStore`] backed by a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test; dropping
/// it deletes the backing directory.
#[must_use]
pub fn setup_test_store() -> (tempfile::TempDir, UserStore) {
    #[allow(clippy::unwrap_used)]
    let dir = tempfile::tempdir().unwrap();
    let store = UserStore::new(dir.path().join("userData.json"));
    (dir, store)
}

/// A minimal Enka-shaped character payload at the given level.
#[must_use]
pub fn sample_payload(level: u8) -> serde_json::Value {
    serde_json::json!({
        "avatarId": 10000046,
        "propMap": {
            "4001": {"type": 4001, "ival": level.to_string(), "val": level.to_string()}
        },
        "fightPropMap": {"2000": 30000.0, "2001": 1900.0, "2002": 870.0},
        "skillLevelMap": {"10331": 6, "10332": 9, "10333": 9}
    })
}

fn mora(count: u64) -> MaterialCost {
    MaterialCost {
        name: "Mora".to_string(),
        count,
        rarity: 1,
    }
}

fn material(name: &str, count: u64, rarity: u8) -> MaterialCost {
    MaterialCost {
        name: name.to_string(),
        count,
        rarity,
    }
}

/// In-memory cost database with two fixtures:
/// - "Hu Tao": six ascension phases and a full talent table
/// - "Aloy": ascension phases only, no talent table
#[must_use]
pub fn test_cost_db() -> JsonCostDatabase {
    let hu_tao = CharacterCosts {
        phases: vec![
            vec![mora(20_000), material("Agnidus Agate Sliver", 1, 2)],
            vec![
                mora(40_000),
                material("Agnidus Agate Sliver", 3, 2),
                material("Juvenile Jade", 2, 4),
                material("Silk Flower", 10, 1),
            ],
            vec![
                mora(60_000),
                material("Agnidus Agate Fragment", 6, 3),
                material("Juvenile Jade", 4, 4),
                material("Silk Flower", 20, 1),
            ],
            vec![
                mora(80_000),
                material("Agnidus Agate Chunk", 3, 4),
                material("Juvenile Jade", 8, 4),
                material("Silk Flower", 30, 1),
            ],
            vec![
                mora(100_000),
                material("Agnidus Agate Chunk", 6, 4),
                material("Juvenile Jade", 12, 4),
                material("Silk Flower", 45, 1),
            ],
            vec![
                mora(120_000),
                material("Agnidus Agate Gemstone", 6, 5),
                material("Juvenile Jade", 20, 4),
                material("Silk Flower", 60, 1),
            ],
        ],
    };
    let aloy = CharacterCosts {
        phases: vec![vec![mora(20_000), material("Crystalline Bloom", 1, 4)]],
    };

    let hu_tao_talents = TalentCosts {
        levels: vec![
            vec![mora(12_500), material("Teachings of Diligence", 3, 2)],
            vec![mora(17_500), material("Teachings of Diligence", 6, 2)],
            vec![mora(25_000), material("Guide to Diligence", 3, 3)],
            vec![mora(30_000), material("Guide to Diligence", 4, 3)],
            vec![mora(37_500), material("Guide to Diligence", 6, 3)],
            vec![mora(120_000), material("Philosophies of Diligence", 4, 4)],
            vec![mora(260_000), material("Philosophies of Diligence", 6, 4)],
            vec![mora(450_000), material("Philosophies of Diligence", 9, 4)],
            vec![mora(700_000), material("Philosophies of Diligence", 12, 4)],
        ],
    };

    JsonCostDatabase::from_parts(
        HashMap::from([
            ("Hu Tao".to_string(), hu_tao),
            ("Aloy".to_string(), aloy),
        ]),
        HashMap::from([("Hu Tao".to_string(), hu_tao_talents)]),
    )
}
