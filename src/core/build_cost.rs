//! Build-cost estimation - pure math over the cost database.
//!
//! Character levels are partitioned into seven fixed bands; crossing the
//! upper bound of one of the first six bands incurs that ascension phase's
//! material bundle. EXP to level inside a band is prorated linearly, then
//! converted into the three EXP book denominations. All functions here are
//! deterministic and touch no state beyond the [`CostDatabase`] they are
//! given.

use crate::core::cost_db::{CostDatabase, MaterialCost};
use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// Character level cap.
pub const MAX_CHARACTER_LEVEL: u8 = 90;
/// Talent level cap.
pub const MAX_TALENT_LEVEL: u8 = 10;

/// The cost entry name under which the game database reports mora.
const MORA: &str = "Mora";

/// Level bands `(min, max)`; the max of each of the first six bands is an
/// ascension breakpoint.
const LEVEL_BANDS: [(u8, u8); 7] = [
    (1, 20),
    (20, 40),
    (40, 50),
    (50, 60),
    (60, 70),
    (70, 80),
    (80, 90),
];

/// Total character EXP across each band, same order as [`LEVEL_BANDS`].
const BAND_EXP: [u64; 7] = [
    120_175, 578_325, 579_100, 854_125, 1_195_925, 1_611_875, 2_421_875,
];

const HERO_WIT_EXP: u64 = 20_000;
const ADVENTURER_EXP: u64 = 5_000;
const WANDERER_EXP: u64 = 1_000;

const HERO_WIT_MORA: u64 = 4_000;
const ADVENTURER_MORA: u64 = 1_000;
const WANDERER_MORA: u64 = 200;

/// EXP book counts covering a required EXP total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpBooks {
    /// Hero's Wit (20,000 EXP each).
    pub hero_wit: u64,
    /// Adventurer's Experience (5,000 EXP each).
    pub adventurer_experience: u64,
    /// Wanderer's Advice (1,000 EXP each).
    pub wanderer_advice: u64,
}

impl ExpBooks {
    /// Mora consumed by applying these books (fixed per-book rates).
    #[must_use]
    pub const fn mora_cost(&self) -> u64 {
        self.hero_wit * HERO_WIT_MORA
            + self.adventurer_experience * ADVENTURER_MORA
            + self.wanderer_advice * WANDERER_MORA
    }

    /// Total EXP the books are worth.
    #[must_use]
    pub const fn total_exp(&self) -> u64 {
        self.hero_wit * HERO_WIT_EXP
            + self.adventurer_experience * ADVENTURER_EXP
            + self.wanderer_advice * WANDERER_EXP
    }
}

/// Full cost of raising a character from one level to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCost {
    /// Total mora: ascension mora plus EXP book application cost.
    pub mora: u64,
    /// Ascension materials, mora excluded, sorted by rarity (descending)
    /// then name.
    pub materials: Vec<MaterialCost>,
    pub exp_books: ExpBooks,
}

/// Cost of raising one talent across a level range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalentCost {
    pub mora: u64,
    pub materials: Vec<MaterialCost>,
}

/// The three talent slots of a character. They share one cost table; the
/// kind only labels the aggregate slots of a full-build plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentKind {
    Normal,
    Skill,
    Burst,
}

impl TalentKind {
    pub const ALL: [TalentKind; 3] = [TalentKind::Normal, TalentKind::Skill, TalentKind::Burst];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TalentKind::Normal => "Normal Attack",
            TalentKind::Skill => "Elemental Skill",
            TalentKind::Burst => "Elemental Burst",
        }
    }
}

/// Level 1 -> 90 plus all three talents 1 -> 9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullBuildCost {
    pub level_cost: Option<BuildCost>,
    pub normal: Option<TalentCost>,
    pub skill: Option<TalentCost>,
    pub burst: Option<TalentCost>,
    /// Sum of the four sub-costs' mora, missing sub-costs counting as zero.
    pub total_mora: u64,
}

/// Indices into the character's ascension phases crossed when going from
/// `current` to `target`: phase `i` is required iff
/// `current < band_max(i) <= target`.
fn required_phases(current: u8, target: u8) -> Vec<usize> {
    LEVEL_BANDS[..6]
        .iter()
        .enumerate()
        .filter(|&(_, &(_, max))| current < max && target >= max)
        .map(|(i, _)| i)
        .collect()
}

/// Total EXP needed to go from `current` to `target`, prorating each band's
/// EXP by the fraction of the band the range overlaps.
#[must_use]
pub fn exp_requirement(current: u8, target: u8) -> u64 {
    LEVEL_BANDS
        .iter()
        .zip(BAND_EXP)
        .map(|(&(min, max), band_exp)| {
            let start = u64::from(min.max(current));
            let end = u64::from(max.min(target));
            if start < end {
                band_exp * (end - start) / u64::from(max - min)
            } else {
                0
            }
        })
        .sum()
}

/// Converts an EXP total into book counts, cascading floor division from the
/// largest denomination down; the smallest denomination is rounded up so the
/// books always cover the requirement.
#[must_use]
pub fn exp_to_books(total_exp: u64) -> ExpBooks {
    let hero_wit = total_exp / HERO_WIT_EXP;
    let mut remaining = total_exp % HERO_WIT_EXP;

    let adventurer_experience = remaining / ADVENTURER_EXP;
    remaining %= ADVENTURER_EXP;

    let wanderer_advice = remaining.div_ceil(WANDERER_EXP);

    ExpBooks {
        hero_wit,
        adventurer_experience,
        wanderer_advice,
    }
}

fn check_range(current: u8, target: u8, max: u8) -> Result<()> {
    if current < 1 || target > max || current > target {
        return Err(Error::InvalidLevelRange {
            current,
            target,
            max,
        });
    }
    Ok(())
}

/// Folds one cost bundle into the running mora total and material map.
/// Mora entries feed the total; everything else accumulates by name, with
/// the rarity taken from the first occurrence.
fn accumulate(
    bundle: &[MaterialCost],
    mora: &mut u64,
    materials: &mut BTreeMap<String, MaterialCost>,
) {
    for cost in bundle {
        if cost.name == MORA {
            *mora += cost.count;
        } else {
            materials
                .entry(cost.name.clone())
                .and_modify(|m| m.count += cost.count)
                .or_insert_with(|| cost.clone());
        }
    }
}

/// Flattens the accumulated map into the output ordering: rarity descending,
/// then name ascending. `BTreeMap` iteration keeps this fully deterministic.
fn into_sorted_materials(materials: BTreeMap<String, MaterialCost>) -> Vec<MaterialCost> {
    let mut out: Vec<MaterialCost> = materials.into_values().collect();
    out.sort_by(|a, b| b.rarity.cmp(&a.rarity).then_with(|| a.name.cmp(&b.name)));
    out
}

/// Computes the cost of leveling `character` from `current` to `target`.
///
/// Returns `Ok(None)` when the character is unknown to the cost database -
/// the expected "no data" sentinel, distinct from a failure.
///
/// # Errors
/// `Error::InvalidLevelRange` when the range is malformed; rejected before
/// any lookup.
pub fn level_up_cost(
    db: &dyn CostDatabase,
    character: &str,
    current: u8,
    target: u8,
) -> Result<Option<BuildCost>> {
    check_range(current, target, MAX_CHARACTER_LEVEL)?;

    let Some(costs) = db.character_costs(character) else {
        return Ok(None);
    };

    let mut mora = 0u64;
    let mut materials = BTreeMap::new();
    for phase in required_phases(current, target) {
        if let Some(bundle) = costs.phases.get(phase) {
            accumulate(bundle, &mut mora, &mut materials);
        }
    }

    let exp_books = exp_to_books(exp_requirement(current, target));
    mora += exp_books.mora_cost();

    Ok(Some(BuildCost {
        mora,
        materials: into_sorted_materials(materials),
        exp_books,
    }))
}

/// Computes the cost of raising one talent from `current` to `target`,
/// summing the per-step bundles for each level gained.
///
/// Returns `Ok(None)` when the character has no talent cost table.
///
/// # Errors
/// `Error::InvalidLevelRange` when the range is malformed.
pub fn talent_cost(
    db: &dyn CostDatabase,
    character: &str,
    current: u8,
    target: u8,
) -> Result<Option<TalentCost>> {
    check_range(current, target, MAX_TALENT_LEVEL)?;

    let Some(costs) = db.talent_costs(character) else {
        return Ok(None);
    };

    let mut mora = 0u64;
    let mut materials = BTreeMap::new();
    // levels[0] raises the talent from 1 to 2
    for level in current..target {
        if let Some(bundle) = costs.levels.get(usize::from(level) - 1) {
            accumulate(bundle, &mut mora, &mut materials);
        }
    }

    Ok(Some(TalentCost {
        mora,
        materials: into_sorted_materials(materials),
    }))
}

/// Composes a 1 -> 90 leveling cost with three 1 -> 9 talent costs.
/// A missing sub-result contributes zero to the aggregate mora instead of
/// failing the whole plan.
pub fn full_build_cost(db: &dyn CostDatabase, character: &str) -> Result<FullBuildCost> {
    let level_cost = level_up_cost(db, character, 1, MAX_CHARACTER_LEVEL)?;
    let normal = talent_cost(db, character, 1, 9)?;
    let skill = talent_cost(db, character, 1, 9)?;
    let burst = talent_cost(db, character, 1, 9)?;

    let total_mora = level_cost.as_ref().map_or(0, |c| c.mora)
        + normal.as_ref().map_or(0, |c| c.mora)
        + skill.as_ref().map_or(0, |c| c.mora)
        + burst.as_ref().map_or(0, |c| c.mora);

    Ok(FullBuildCost {
        level_cost,
        normal,
        skill,
        burst,
        total_mora,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::test_cost_db;

    #[test]
    fn test_exp_requirement_full_band() {
        assert_eq!(exp_requirement(1, 20), 120_175);
        assert_eq!(exp_requirement(20, 40), 578_325);
    }

    #[test]
    fn test_exp_requirement_one_to_ninety_sums_all_bands() {
        assert_eq!(exp_requirement(1, 90), 7_361_400);
    }

    #[test]
    fn test_exp_requirement_partial_overlap() {
        // 15 -> 25: 5/19 of band one plus 5/20 of band two
        let band_one = 120_175 * 5 / 19;
        let band_two = 578_325 * 5 / 20;
        assert_eq!(exp_requirement(15, 25), band_one + band_two);
    }

    #[test]
    fn test_exp_requirement_empty_range() {
        assert_eq!(exp_requirement(50, 50), 0);
        assert_eq!(exp_requirement(90, 90), 0);
    }

    #[test]
    fn test_exp_to_books_exact_split() {
        let books = exp_to_books(26_000);
        assert_eq!(
            books,
            ExpBooks {
                hero_wit: 1,
                adventurer_experience: 1,
                wanderer_advice: 1,
            }
        );
    }

    #[test]
    fn test_exp_to_books_rounds_smallest_up() {
        let books = exp_to_books(26_001);
        assert_eq!(books.wanderer_advice, 2);
        assert!(books.total_exp() >= 26_001);
    }

    #[test]
    fn test_exp_to_books_zero() {
        assert_eq!(exp_to_books(0), ExpBooks::default());
    }

    #[test]
    fn test_books_always_cover_requirement() {
        for exp in [1, 999, 1_000, 19_999, 20_001, 176_206, 7_361_400] {
            let books = exp_to_books(exp);
            assert!(books.total_exp() >= exp, "books fell short for {exp}");
        }
    }

    #[test]
    fn test_single_breakpoint_crossing() {
        // 15 -> 25 crosses only the level-20 breakpoint, so materials are
        // exactly phase one's bundle and mora is phase mora plus book mora.
        let db = test_cost_db();
        let cost = level_up_cost(&db, "Hu Tao", 15, 25).unwrap().unwrap();

        assert_eq!(cost.materials.len(), 1);
        assert_eq!(cost.materials[0].name, "Agnidus Agate Sliver");
        assert_eq!(cost.materials[0].count, 1);

        let books = exp_to_books(exp_requirement(15, 25));
        assert_eq!(cost.exp_books, books);
        assert_eq!(cost.mora, 20_000 + books.mora_cost());
    }

    #[test]
    fn test_no_breakpoint_means_exp_only() {
        let db = test_cost_db();
        let cost = level_up_cost(&db, "Hu Tao", 21, 39).unwrap().unwrap();
        assert!(cost.materials.is_empty());
        assert_eq!(cost.mora, cost.exp_books.mora_cost());
    }

    #[test]
    fn test_materials_aggregate_across_phases() {
        let db = test_cost_db();
        // 1 -> 50 crosses breakpoints 20 and 40; both phases use the same gem
        let cost = level_up_cost(&db, "Hu Tao", 1, 50).unwrap().unwrap();
        let gem = cost
            .materials
            .iter()
            .find(|m| m.name == "Agnidus Agate Sliver")
            .unwrap();
        assert_eq!(gem.count, 1 + 3);
    }

    #[test]
    fn test_materials_sorted_by_rarity_then_name() {
        let db = test_cost_db();
        let cost = level_up_cost(&db, "Hu Tao", 1, 50).unwrap().unwrap();
        let rarities: Vec<u8> = cost.materials.iter().map(|m| m.rarity).collect();
        let mut sorted = rarities.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(rarities, sorted);
    }

    #[test]
    fn test_determinism() {
        let db = test_cost_db();
        let first = level_up_cost(&db, "Hu Tao", 1, 90).unwrap();
        let second = level_up_cost(&db, "Hu Tao", 1, 90).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_character_is_none_not_error() {
        let db = test_cost_db();
        assert!(level_up_cost(&db, "Nobody", 1, 90).unwrap().is_none());
        assert!(talent_cost(&db, "Nobody", 1, 9).unwrap().is_none());
    }

    #[test]
    fn test_level_range_validation() {
        let db = test_cost_db();
        assert!(matches!(
            level_up_cost(&db, "Hu Tao", 0, 20),
            Err(Error::InvalidLevelRange { .. })
        ));
        assert!(matches!(
            level_up_cost(&db, "Hu Tao", 1, 91),
            Err(Error::InvalidLevelRange { .. })
        ));
        assert!(matches!(
            level_up_cost(&db, "Hu Tao", 50, 40),
            Err(Error::InvalidLevelRange { .. })
        ));
        assert!(matches!(
            talent_cost(&db, "Hu Tao", 1, 11),
            Err(Error::InvalidLevelRange { .. })
        ));
    }

    #[test]
    fn test_talent_cost_sums_per_step_bundles() {
        let db = test_cost_db();
        // 1 -> 3 takes the first two per-step bundles: 12,500 + 17,500 mora
        let cost = talent_cost(&db, "Hu Tao", 1, 3).unwrap().unwrap();
        assert_eq!(cost.mora, 30_000);
        let scroll = cost
            .materials
            .iter()
            .find(|m| m.name == "Teachings of Diligence")
            .unwrap();
        assert_eq!(scroll.count, 3 + 6);
    }

    #[test]
    fn test_full_build_aggregates_sub_costs() {
        let db = test_cost_db();
        let full = full_build_cost(&db, "Hu Tao").unwrap();

        let expected = full.level_cost.as_ref().unwrap().mora
            + full.normal.as_ref().unwrap().mora
            + full.skill.as_ref().unwrap().mora
            + full.burst.as_ref().unwrap().mora;
        assert_eq!(full.total_mora, expected);
    }

    #[test]
    fn test_full_build_treats_missing_sub_costs_as_zero() {
        // "Aloy" has ascension data but no talent table in the fixture
        let db = test_cost_db();
        let full = full_build_cost(&db, "Aloy").unwrap();
        assert!(full.normal.is_none());
        assert!(full.skill.is_none());
        assert!(full.burst.is_none());
        assert_eq!(full.total_mora, full.level_cost.as_ref().unwrap().mora);
    }
}
