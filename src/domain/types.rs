// ==========================================
// Volunteer Shift Scheduler - domain types
// ==========================================
// Slot phases and time-of-day buckets
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SlotPhase
// ==========================================
// Derived from keyword matching on a slot's title; slots with neither
// setup nor teardown keywords belong to the event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPhase {
    Setup,    // build-up before the event ("montage")
    Event,    // the event itself
    Teardown, // tear-down after the event ("démontage")
}

impl SlotPhase {
    /// Derive the phase from a slot title (case-insensitive)
    ///
    /// # Rules
    /// 1. teardown keywords ("démontage"/"teardown") → TEARDOWN
    /// 2. setup keywords ("montage"/"setup") → SETUP
    /// 3. otherwise → EVENT
    ///
    /// Teardown is checked first: "démontage" contains "montage".
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("démontage") || title.contains("demontage") || title.contains("teardown")
        {
            SlotPhase::Teardown
        } else if title.contains("montage") || title.contains("setup") {
            SlotPhase::Setup
        } else {
            SlotPhase::Event
        }
    }
}

impl fmt::Display for SlotPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotPhase::Setup => write!(f, "setup"),
            SlotPhase::Event => write!(f, "event"),
            SlotPhase::Teardown => write!(f, "teardown"),
        }
    }
}

// ==========================================
// TimeOfDayBucket
// ==========================================
// Wall-clock preference buckets volunteers may declare. Two buckets wrap
// midnight (late_evening, night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDayBucket {
    EarlyMorning,   // 06-09
    Morning,        // 09-12
    Lunch,          // 12-14
    EarlyAfternoon, // 14-17
    LateAfternoon,  // 17-20
    Evening,        // 20-23
    LateEvening,    // 23-02 (wraps midnight)
    Night,          // 02-06
}

impl TimeOfDayBucket {
    /// Parse a declared bucket name; unknown names yield None
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "early_morning" => Some(TimeOfDayBucket::EarlyMorning),
            "morning" => Some(TimeOfDayBucket::Morning),
            "lunch" => Some(TimeOfDayBucket::Lunch),
            "early_afternoon" => Some(TimeOfDayBucket::EarlyAfternoon),
            "late_afternoon" => Some(TimeOfDayBucket::LateAfternoon),
            "evening" => Some(TimeOfDayBucket::Evening),
            "late_evening" => Some(TimeOfDayBucket::LateEvening),
            "night" => Some(TimeOfDayBucket::Night),
            _ => None,
        }
    }

    /// Half-open hour range [from, to); from > to means the bucket wraps
    /// midnight
    pub fn hour_range(&self) -> (u32, u32) {
        match self {
            TimeOfDayBucket::EarlyMorning => (6, 9),
            TimeOfDayBucket::Morning => (9, 12),
            TimeOfDayBucket::Lunch => (12, 14),
            TimeOfDayBucket::EarlyAfternoon => (14, 17),
            TimeOfDayBucket::LateAfternoon => (17, 20),
            TimeOfDayBucket::Evening => (20, 23),
            TimeOfDayBucket::LateEvening => (23, 2),
            TimeOfDayBucket::Night => (2, 6),
        }
    }

    /// Whether a wall-clock hour (0-23) falls inside the bucket
    pub fn covers_hour(&self, hour: u32) -> bool {
        let (from, to) = self.hour_range();
        if from < to {
            hour >= from && hour < to
        } else {
            hour >= from || hour < to
        }
    }
}

impl fmt::Display for TimeOfDayBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDayBucket::EarlyMorning => write!(f, "early_morning"),
            TimeOfDayBucket::Morning => write!(f, "morning"),
            TimeOfDayBucket::Lunch => write!(f, "lunch"),
            TimeOfDayBucket::EarlyAfternoon => write!(f, "early_afternoon"),
            TimeOfDayBucket::LateAfternoon => write!(f, "late_afternoon"),
            TimeOfDayBucket::Evening => write!(f, "evening"),
            TimeOfDayBucket::LateEvening => write!(f, "late_evening"),
            TimeOfDayBucket::Night => write!(f, "night"),
        }
    }
}
