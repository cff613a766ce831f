// ==========================================
// Volunteer Shift Scheduler - assignment & result models
// ==========================================
// Red line: created only by the engine; the assignment list is the
// primary output artifact of a run
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Assignment - one (volunteer, slot) match
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub volunteer_id: String,    // identity reference of the volunteer
    pub slot_id: String,         // the shift being staffed
    pub team_id: Option<String>, // copied from the slot
    pub score: i32,              // score that produced the match
    pub confidence: u8,          // 0-100 display-only trust indicator
}

// ==========================================
// ScheduleStats - summary statistics
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    pub total_assignments: usize,
    pub average_hours_per_volunteer: f64,
    pub satisfaction_rate: f64, // mean confidence / 100, in 0-1
    pub balance_score: f64,     // 1 - stddev/(mean+1) over hours, clamped to 0-1
}

// ==========================================
// SchedulingResult - the run's report
// ==========================================
// Entirely derived; no lifecycle beyond the run that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub assignments: Vec<Assignment>,
    pub unassigned_volunteer_ids: Vec<String>, // no assignment at all
    pub unfilled_slot_ids: Vec<String>,        // still-open capacity
    pub stats: ScheduleStats,
    pub warnings: Vec<String>,        // localized, human-readable
    pub recommendations: Vec<String>, // localized, human-readable
}
