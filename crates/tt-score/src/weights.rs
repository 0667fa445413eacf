//! Weight configuration supplied once per generation request.
//!
//! Defaults mirror the stock slider positions of the planner: dead time 50,
//! instructor rating 70, early finish 30, course load 80.

use std::collections::BTreeMap;

use tt_core::DayOfWeek;

use crate::{ScoreError, ScoreResult};

/// Half-hour blocks in one day.
pub const BLOCKS_PER_DAY: u8 = 48;

// ── Enumerations ──────────────────────────────────────────────────────────────

/// Preferred part of the day for the whole week.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShiftPreference {
    /// Reward finishing early: `shift_weight × (24h − latest_end)`.
    #[default]
    Morning,
    /// Reward starting late: `shift_weight × earliest_start`.
    Evening,
    /// No shift term.
    Mixed,
}

/// How strongly a particular day should be used.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayMode {
    #[default]
    Normal,
    Prioritize,
    Avoid,
}

/// Preferred timing of classes within a particular day.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeBias {
    Early,
    Late,
    #[default]
    Mixed,
    /// The day should stay empty.
    Free,
}

// ── DayPreference ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DayPreference {
    pub mode: DayMode,
    pub time_bias: TimeBias,
    /// Soft cap on occupied half-hour blocks; `48` means no cap.
    pub max_half_hour_blocks: u8,
}

impl Default for DayPreference {
    fn default() -> Self {
        Self {
            mode:                 DayMode::Normal,
            time_bias:            TimeBias::Mixed,
            max_half_hour_blocks: BLOCKS_PER_DAY,
        }
    }
}

/// One `DayPreference` per weekday, indexed by [`DayOfWeek::index`].
///
/// Serialized as a map (`{"sat": {"mode": "avoid"}}`); days absent from the
/// map keep the default preference.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "BTreeMap<DayOfWeek, DayPreference>", into = "BTreeMap<DayOfWeek, DayPreference>")
)]
pub struct DayPreferences([DayPreference; DayOfWeek::COUNT]);

impl DayPreferences {
    #[inline]
    pub fn get(&self, day: DayOfWeek) -> &DayPreference {
        &self.0[day.index()]
    }

    pub fn set(&mut self, day: DayOfWeek, pref: DayPreference) {
        self.0[day.index()] = pref;
    }

    /// `(day, preference)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, &DayPreference)> {
        DayOfWeek::ALL.into_iter().zip(self.0.iter())
    }
}

impl From<BTreeMap<DayOfWeek, DayPreference>> for DayPreferences {
    fn from(map: BTreeMap<DayOfWeek, DayPreference>) -> Self {
        let mut prefs = Self::default();
        for (day, pref) in map {
            prefs.set(day, pref);
        }
        prefs
    }
}

impl From<DayPreferences> for BTreeMap<DayOfWeek, DayPreference> {
    fn from(prefs: DayPreferences) -> Self {
        prefs.iter().map(|(d, p)| (d, *p)).collect()
    }
}

// ── WeightConfig ──────────────────────────────────────────────────────────────

/// Scoring weights.  Read-only for the duration of one enumeration.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightConfig {
    /// Penalty per hour of dead time between classes on the same day.
    pub gap_weight: f64,

    /// Multiplier for the mean instructor rating.
    pub rating_weight: f64,

    pub shift_preference: ShiftPreference,

    /// Multiplier for the shift term, per hour.
    pub shift_weight: f64,

    /// Bonus per course actually taken.
    pub load_weight: f64,

    /// Overall scale of the per-day preference layer.
    pub day_weight: f64,

    pub per_day: DayPreferences,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            gap_weight:       50.0,
            rating_weight:    70.0,
            shift_preference: ShiftPreference::Morning,
            shift_weight:     30.0,
            load_weight:      80.0,
            day_weight:       1.0,
            per_day:          DayPreferences::default(),
        }
    }
}

impl WeightConfig {
    /// Reject negative or non-finite weights and out-of-range block caps.
    ///
    /// Weights are "how much you care"; a negative value would silently invert
    /// a term's meaning, so it is treated as a caller error.
    pub fn validate(&self) -> ScoreResult<()> {
        let named = [
            ("gap_weight", self.gap_weight),
            ("rating_weight", self.rating_weight),
            ("shift_weight", self.shift_weight),
            ("load_weight", self.load_weight),
            ("day_weight", self.day_weight),
        ];
        for (name, w) in named {
            if !w.is_finite() {
                return Err(ScoreError::InvalidWeightConfig(format!("{name} is not finite ({w})")));
            }
            if w < 0.0 {
                return Err(ScoreError::InvalidWeightConfig(format!("{name} is negative ({w})")));
            }
        }
        for (day, pref) in self.per_day.iter() {
            if pref.max_half_hour_blocks > BLOCKS_PER_DAY {
                return Err(ScoreError::InvalidWeightConfig(format!(
                    "{day}: max_half_hour_blocks {} exceeds {BLOCKS_PER_DAY}",
                    pref.max_half_hour_blocks
                )));
            }
        }
        Ok(())
    }
}
