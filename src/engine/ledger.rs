// ==========================================
// Volunteer Shift Scheduler - run-state ledger
// ==========================================
// Responsibility: all mutable state of one scheduling run
// Red line: caller-supplied slots stay immutable; fill counts and hour
// tallies live here and nowhere else
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::slot::TimeSlot;
use crate::domain::volunteer::{Availability, VolunteerApplication};
use crate::engine::availability::AvailabilityChecker;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};

// ==========================================
// ScheduleCandidate - prepared volunteer
// ==========================================
// A volunteer that survived the preparation pass, with the availability
// blob decoded once up front.
#[derive(Debug, Clone)]
pub struct ScheduleCandidate {
    pub volunteer_id: String,
    pub application: VolunteerApplication,
    pub availability: Availability,
}

// ==========================================
// AssignmentLedger - the accumulator threaded through the passes
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentLedger {
    assignments: Vec<Assignment>,
    remaining: HashMap<String, u32>,                      // slot id -> open spots
    assigned_pairs: HashSet<(String, String)>,            // (volunteer id, slot id)
    hours_total: HashMap<String, f64>,                    // volunteer id -> hours
    hours_by_day: HashMap<(String, NaiveDate), f64>,      // per-day hours
    intervals: HashMap<String, Vec<(DateTime<Utc>, DateTime<Utc>)>>, // assigned time ranges
    volunteer_count: usize,
    total_hours: f64,
}

impl AssignmentLedger {
    /// Seed a ledger from the input slots and the prepared volunteer count
    pub fn new(slots: &[TimeSlot], volunteer_count: usize) -> Self {
        let remaining = slots
            .iter()
            .map(|slot| (slot.slot_id.clone(), slot.open_spots()))
            .collect();
        Self {
            assignments: Vec::new(),
            remaining,
            assigned_pairs: HashSet::new(),
            hours_total: HashMap::new(),
            hours_by_day: HashMap::new(),
            intervals: HashMap::new(),
            volunteer_count,
            total_hours: 0.0,
        }
    }

    // ==========================================
    // Read accessors (used by scoring)
    // ==========================================

    pub fn remaining_spots(&self, slot_id: &str) -> u32 {
        self.remaining.get(slot_id).copied().unwrap_or(0)
    }

    pub fn hours_for(&self, volunteer_id: &str) -> f64 {
        self.hours_total.get(volunteer_id).copied().unwrap_or(0.0)
    }

    pub fn hours_on_day(&self, volunteer_id: &str, day: NaiveDate) -> f64 {
        self.hours_by_day
            .get(&(volunteer_id.to_string(), day))
            .copied()
            .unwrap_or(0.0)
    }

    /// Running across-volunteer average hours (0 with no volunteers)
    pub fn average_hours(&self) -> f64 {
        if self.volunteer_count == 0 {
            0.0
        } else {
            self.total_hours / self.volunteer_count as f64
        }
    }

    pub fn is_assigned(&self, volunteer_id: &str, slot_id: &str) -> bool {
        self.assigned_pairs
            .contains(&(volunteer_id.to_string(), slot_id.to_string()))
    }

    /// Whether the candidate slot overlaps any shift already assigned to
    /// the volunteer in this run
    pub fn has_time_conflict(&self, volunteer_id: &str, slot: &TimeSlot) -> bool {
        self.intervals
            .get(volunteer_id)
            .map(|taken| {
                taken.iter().any(|(start, end)| {
                    AvailabilityChecker::overlaps(slot.start_time, slot.end_time, *start, *end)
                })
            })
            .unwrap_or(false)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    // ==========================================
    // Mutations (used by the passes)
    // ==========================================

    /// Commit one assignment
    pub fn commit(&mut self, volunteer_id: &str, slot: &TimeSlot, score: i32, confidence: u8) {
        let hours = slot.duration_hours();
        self.assignments.push(Assignment {
            volunteer_id: volunteer_id.to_string(),
            slot_id: slot.slot_id.clone(),
            team_id: slot.team_id.clone(),
            score,
            confidence,
        });
        let spots = self.remaining.entry(slot.slot_id.clone()).or_insert(0);
        *spots = spots.saturating_sub(1);
        self.assigned_pairs
            .insert((volunteer_id.to_string(), slot.slot_id.clone()));
        *self.hours_total.entry(volunteer_id.to_string()).or_insert(0.0) += hours;
        *self
            .hours_by_day
            .entry((volunteer_id.to_string(), slot.calendar_day()))
            .or_insert(0.0) += hours;
        self.intervals
            .entry(volunteer_id.to_string())
            .or_default()
            .push((slot.start_time, slot.end_time));
        self.total_hours += hours;
    }

    /// Move an existing assignment to another volunteer (balancing pass)
    ///
    /// Capacity and total hours are untouched; only the two volunteers'
    /// bookkeeping and the assignment record change.
    pub fn transfer(
        &mut self,
        assignment_index: usize,
        receiver_id: &str,
        slot: &TimeSlot,
        score: i32,
        confidence: u8,
    ) {
        let hours = slot.duration_hours();
        let giver_id = self.assignments[assignment_index].volunteer_id.clone();
        let day = slot.calendar_day();

        // giver bookkeeping
        if let Some(total) = self.hours_total.get_mut(&giver_id) {
            *total -= hours;
        }
        if let Some(day_hours) = self.hours_by_day.get_mut(&(giver_id.clone(), day)) {
            *day_hours -= hours;
        }
        if let Some(taken) = self.intervals.get_mut(&giver_id) {
            if let Some(pos) = taken
                .iter()
                .position(|(start, end)| *start == slot.start_time && *end == slot.end_time)
            {
                taken.remove(pos);
            }
        }
        self.assigned_pairs.remove(&(giver_id, slot.slot_id.clone()));

        // receiver bookkeeping
        self.assigned_pairs
            .insert((receiver_id.to_string(), slot.slot_id.clone()));
        *self.hours_total.entry(receiver_id.to_string()).or_insert(0.0) += hours;
        *self
            .hours_by_day
            .entry((receiver_id.to_string(), day))
            .or_insert(0.0) += hours;
        self.intervals
            .entry(receiver_id.to_string())
            .or_default()
            .push((slot.start_time, slot.end_time));

        let assignment = &mut self.assignments[assignment_index];
        assignment.volunteer_id = receiver_id.to_string();
        assignment.score = score;
        assignment.confidence = confidence;
    }
}
