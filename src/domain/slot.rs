// ==========================================
// Volunteer Shift Scheduler - time slot domain model
// ==========================================
// Red line: slots are caller-owned input; the engine tracks fill counts
// in its own ledger and never mutates these records
// ==========================================

use crate::domain::types::SlotPhase;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// TimeSlot - one shift to staff
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    // ===== Identity =====
    pub slot_id: String, // slot unique id
    pub title: String,   // display title; also drives phase derivation

    // ===== Time range =====
    pub start_time: DateTime<Utc>, // shift start
    pub end_time: DateTime<Utc>,   // shift end

    // ===== Staffing =====
    pub team_id: Option<String>,  // owning team, if any
    pub max_volunteers: u32,      // capacity
    pub assigned_volunteers: u32, // fill count already committed upstream

    // ===== Metadata =====
    pub description: Option<String>, // organizer notes
    #[serde(default)]
    pub required_skills: Vec<String>, // skill tags matched against experience text
    pub priority: Option<i32>,       // higher = more urgent to fill
}

impl TimeSlot {
    /// Phase derived from the slot title
    pub fn phase(&self) -> SlotPhase {
        SlotPhase::from_title(&self.title)
    }

    /// Shift duration in hours (negative ranges clamp to zero)
    pub fn duration_hours(&self) -> f64 {
        let minutes = (self.end_time - self.start_time).num_minutes().max(0);
        minutes as f64 / 60.0
    }

    /// Spots still open when the run starts
    pub fn open_spots(&self) -> u32 {
        self.max_volunteers.saturating_sub(self.assigned_volunteers)
    }

    /// Calendar day used for per-day hour tallies (day of the start time)
    pub fn calendar_day(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}
