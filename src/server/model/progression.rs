//! Experience curve and per-level stat growth.
//!
//! The experience threshold grows linearly: every level gained raises the
//! experience required for the next one by [`EXP_THRESHOLD_STEP`]. Stat growth
//! per level is fixed, except for maximum health whose behavior is selected by
//! [`HealthGrowth`].

use std::{fmt, str::FromStr};

/// Added to `next_level_exp` for every level gained.
pub const EXP_THRESHOLD_STEP: i32 = 100;
/// Maximum health granted per level gained.
pub const HEALTH_PER_LEVEL: i32 = 10;
/// Maximum mana granted per level gained.
pub const MANA_PER_LEVEL: i32 = 5;
/// Attack granted per level gained.
pub const ATTACK_PER_LEVEL: i32 = 3;
/// Defense granted per level gained.
pub const DEFENSE_PER_LEVEL: i32 = 1;

/// How a level-up changes maximum health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthGrowth {
    /// `max_health = 10 * levels_gained`: only the levels gained by the
    /// current level-up count, earlier levels are forgotten.
    #[default]
    Replace,
    /// `max_health += 10 * levels_gained`, growing like mana does.
    Accumulate,
}

impl HealthGrowth {
    /// Computes the new maximum health after gaining `levels`, or `None` if it
    /// doesn't fit in an `i32`.
    pub fn apply(&self, max_health: i32, levels: i32) -> Option<i32> {
        match self {
            Self::Replace => HEALTH_PER_LEVEL.checked_mul(levels),
            Self::Accumulate => grow(max_health, HEALTH_PER_LEVEL, levels),
        }
    }
}

impl FromStr for HealthGrowth {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "accumulate" => Ok(Self::Accumulate),
            other => Err(format!(
                "unknown health growth policy '{}', expected 'replace' or 'accumulate'",
                other
            )),
        }
    }
}

impl fmt::Display for HealthGrowth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::Accumulate => write!(f, "accumulate"),
        }
    }
}

/// Adds `per_level * levels` to `value`, or `None` on overflow.
pub fn grow(value: i32, per_level: i32, levels: i32) -> Option<i32> {
    per_level.checked_mul(levels)?.checked_add(value)
}

/// Outcome of spending banked experience on levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceConversion {
    /// Levels gained; 0 when `current_exp < next_level_exp`.
    pub levels: i32,
    /// Experience left over after paying for every gained level.
    pub current_exp: i32,
    /// Threshold for the level after the last one gained.
    pub next_level_exp: i32,
}

/// Converts banked experience into whole levels.
///
/// Pays `next_level_exp` for each level while enough experience remains,
/// raising the threshold by [`EXP_THRESHOLD_STEP`] after every payment. A
/// large deposit can therefore yield several levels in one pass. Because the
/// threshold strictly increases the loop always terminates.
///
/// Returns `None` when the raised threshold would overflow an `i32`.
pub fn convert_experience(
    current_exp: i32,
    next_level_exp: i32,
) -> Option<ExperienceConversion> {
    let mut levels = 0;
    let mut current_exp = current_exp;
    let mut next_level_exp = next_level_exp;

    while current_exp >= next_level_exp {
        levels += 1;
        current_exp -= next_level_exp;
        next_level_exp = next_level_exp.checked_add(EXP_THRESHOLD_STEP)?;
    }

    Some(ExperienceConversion {
        levels,
        current_exp,
        next_level_exp,
    })
}
