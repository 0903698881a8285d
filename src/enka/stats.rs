//! Typed views over Enka Network's numeric stat IDs.
//!
//! The API keys character properties by numeric-string IDs ("4001" for
//! level, "2000" for max HP, ...). Known IDs get named variants; anything
//! else lands in the explicit `Unknown` bucket instead of being dropped.

use std::fmt;

/// IDs used in `propMap` (character progression properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropId {
    /// "1002" - ascension phase
    Ascension,
    /// "4001" - character level
    Level,
    /// "4002" - constellation count
    Constellation,
    Unknown(u32),
}

impl PropId {
    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        match id {
            1002 => PropId::Ascension,
            4001 => PropId::Level,
            4002 => PropId::Constellation,
            other => PropId::Unknown(other),
        }
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            PropId::Ascension => 1002,
            PropId::Level => 4001,
            PropId::Constellation => 4002,
            PropId::Unknown(other) => other,
        }
    }
}

/// IDs used in `fightPropMap` (combat stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FightProp {
    /// "20" - crit rate (fraction, not percent)
    CritRate,
    /// "22" - crit damage (fraction)
    CritDamage,
    /// "23" - energy recharge (fraction)
    EnergyRecharge,
    /// "2000" - max HP
    MaxHp,
    /// "2001" - attack
    Atk,
    /// "2002" - defense
    Def,
    Unknown(u32),
}

impl FightProp {
    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        match id {
            20 => FightProp::CritRate,
            22 => FightProp::CritDamage,
            23 => FightProp::EnergyRecharge,
            2000 => FightProp::MaxHp,
            2001 => FightProp::Atk,
            2002 => FightProp::Def,
            other => FightProp::Unknown(other),
        }
    }

    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            FightProp::CritRate => 20,
            FightProp::CritDamage => 22,
            FightProp::EnergyRecharge => 23,
            FightProp::MaxHp => 2000,
            FightProp::Atk => 2001,
            FightProp::Def => 2002,
            FightProp::Unknown(other) => other,
        }
    }

    /// Whether the stat is reported as a fraction and displayed as a
    /// percentage.
    #[must_use]
    pub const fn is_percentage(self) -> bool {
        matches!(
            self,
            FightProp::CritRate | FightProp::CritDamage | FightProp::EnergyRecharge
        )
    }
}

impl fmt::Display for FightProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FightProp::CritRate => "CRIT Rate",
            FightProp::CritDamage => "CRIT DMG",
            FightProp::EnergyRecharge => "Energy Recharge",
            FightProp::MaxHp => "HP",
            FightProp::Atk => "ATK",
            FightProp::Def => "DEF",
            FightProp::Unknown(id) => return write!(f, "Stat {id}"),
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_id_round_trip() {
        for id in [1002u32, 4001, 4002, 31337] {
            assert_eq!(PropId::from_id(id).id(), id);
        }
        assert_eq!(PropId::from_id(4001), PropId::Level);
        assert_eq!(PropId::from_id(9999), PropId::Unknown(9999));
    }

    #[test]
    fn test_fight_prop_round_trip() {
        for id in [20u32, 22, 23, 2000, 2001, 2002, 77] {
            assert_eq!(FightProp::from_id(id).id(), id);
        }
        assert_eq!(FightProp::from_id(2000), FightProp::MaxHp);
        assert_eq!(FightProp::from_id(77), FightProp::Unknown(77));
    }

    #[test]
    fn test_percentage_stats() {
        assert!(FightProp::CritRate.is_percentage());
        assert!(FightProp::EnergyRecharge.is_percentage());
        assert!(!FightProp::MaxHp.is_percentage());
    }

    #[test]
    fn test_unknown_display_keeps_id_visible() {
        assert_eq!(FightProp::Unknown(42).to_string(), "Stat 42");
    }
}
