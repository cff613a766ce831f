// ==========================================
// Volunteer Shift Scheduler - scheduling constraints
// ==========================================
// Tunable policy record; caller-supplied values are merged over the
// defaults, never replacing them wholesale
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// ConstraintError
// ==========================================
/// Rejected at engine construction: silently proceeding with nonsensical
/// limits would produce nonsensical scores.
#[derive(Error, Debug)]
pub enum ConstraintError {
    #[error("negative hour limit: {field}={value}")]
    NegativeHours { field: &'static str, value: f64 },

    #[error("minimum hours exceed maximum: min={min}, max={max}")]
    MinAboveMax { min: f64, max: f64 },
}

// ==========================================
// SchedulingConstraints
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConstraints {
    pub max_hours_per_volunteer: f64, // total hours cap per volunteer
    pub min_hours_per_volunteer: f64, // target floor, drives recommendations
    pub max_hours_per_day: f64,       // daily hours cap
    pub min_hours_per_day: f64,       // daily floor used by the scoring nudge
    pub balance_teams: bool,          // run the balancing pass
    pub prioritize_experience: bool,  // apply experience bonuses
    pub respect_strict_availability: bool, // unavailable phase = impossible match
    pub allow_overtime: bool,         // soften the hour ceilings
    pub max_overtime_hours: f64,      // overtime allowance beyond the cap
}

impl Default for SchedulingConstraints {
    fn default() -> Self {
        Self {
            max_hours_per_volunteer: 12.0,
            min_hours_per_volunteer: 2.0,
            max_hours_per_day: 8.0,
            min_hours_per_day: 1.0,
            balance_teams: true,
            prioritize_experience: true,
            respect_strict_availability: true,
            allow_overtime: false,
            max_overtime_hours: 2.0,
        }
    }
}

impl SchedulingConstraints {
    /// Merge caller-supplied overrides onto the defaults
    pub fn with_overrides(overrides: &ConstraintOverrides) -> Self {
        let defaults = Self::default();
        Self {
            max_hours_per_volunteer: overrides
                .max_hours_per_volunteer
                .unwrap_or(defaults.max_hours_per_volunteer),
            min_hours_per_volunteer: overrides
                .min_hours_per_volunteer
                .unwrap_or(defaults.min_hours_per_volunteer),
            max_hours_per_day: overrides.max_hours_per_day.unwrap_or(defaults.max_hours_per_day),
            min_hours_per_day: overrides.min_hours_per_day.unwrap_or(defaults.min_hours_per_day),
            balance_teams: overrides.balance_teams.unwrap_or(defaults.balance_teams),
            prioritize_experience: overrides
                .prioritize_experience
                .unwrap_or(defaults.prioritize_experience),
            respect_strict_availability: overrides
                .respect_strict_availability
                .unwrap_or(defaults.respect_strict_availability),
            allow_overtime: overrides.allow_overtime.unwrap_or(defaults.allow_overtime),
            max_overtime_hours: overrides
                .max_overtime_hours
                .unwrap_or(defaults.max_overtime_hours),
        }
    }

    /// Validate the merged record
    ///
    /// # Rules
    /// 1. every hour limit must be non-negative
    /// 2. min_hours_per_volunteer must not exceed max_hours_per_volunteer
    pub fn validate(&self) -> Result<(), ConstraintError> {
        let hour_fields: [(&'static str, f64); 5] = [
            ("max_hours_per_volunteer", self.max_hours_per_volunteer),
            ("min_hours_per_volunteer", self.min_hours_per_volunteer),
            ("max_hours_per_day", self.max_hours_per_day),
            ("min_hours_per_day", self.min_hours_per_day),
            ("max_overtime_hours", self.max_overtime_hours),
        ];
        for (field, value) in hour_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConstraintError::NegativeHours { field, value });
            }
        }
        if self.min_hours_per_volunteer > self.max_hours_per_volunteer {
            return Err(ConstraintError::MinAboveMax {
                min: self.min_hours_per_volunteer,
                max: self.max_hours_per_volunteer,
            });
        }
        Ok(())
    }
}

// ==========================================
// ConstraintOverrides - partial caller overrides
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConstraintOverrides {
    #[serde(default)]
    pub max_hours_per_volunteer: Option<f64>,
    #[serde(default)]
    pub min_hours_per_volunteer: Option<f64>,
    #[serde(default)]
    pub max_hours_per_day: Option<f64>,
    #[serde(default)]
    pub min_hours_per_day: Option<f64>,
    #[serde(default)]
    pub balance_teams: Option<bool>,
    #[serde(default)]
    pub prioritize_experience: Option<bool>,
    #[serde(default)]
    pub respect_strict_availability: Option<bool>,
    #[serde(default)]
    pub allow_overtime: Option<bool>,
    #[serde(default)]
    pub max_overtime_hours: Option<f64>,
}
