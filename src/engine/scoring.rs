// ==========================================
// Volunteer Shift Scheduler - match scoring
// ==========================================
// Responsibility: desirability score for one (volunteer, slot) pair
// Red line: pure function of the pair and the current ledger; no
// randomness, no side effects
// ==========================================
// Input: prepared candidate + slot + ledger
// Output: integer score, floored at the impossible sentinel
// ==========================================

use crate::domain::constraints::SchedulingConstraints;
use crate::domain::slot::TimeSlot;
use crate::domain::types::TimeOfDayBucket;
use crate::domain::volunteer::{Availability, VolunteerApplication};
use crate::engine::availability::AvailabilityChecker;
use crate::engine::ledger::{AssignmentLedger, ScheduleCandidate};
use chrono::Timelike;

/// Sentinel for a match that must never be committed
pub const IMPOSSIBLE_SCORE: i32 = -1000;

// ===== Availability =====
const AVAILABLE_BONUS: i32 = 20;
const UNAVAILABLE_PENALTY: i32 = -50; // lenient mode only

// ===== Preferences =====
const TEAM_PREFERENCE_BONUS: i32 = 15;
const TIME_BUCKET_BONUS: i32 = 12; // per matching declared bucket

// ===== Experience =====
const GENERIC_EXPERIENCE_BONUS: i32 = 5;
const CONVENTION_EXPERIENCE_BONUS: i32 = 3;
const SKILL_MATCH_BONUS: i32 = 8; // per required skill found in the text

// ===== Workload =====
const OVER_MAX_HOURS_PENALTY: i32 = -100; // overtime disallowed
const OVER_OVERTIME_PENALTY: i32 = -200;  // beyond even the overtime allowance
const OVERTIME_PENALTY: i32 = -20;        // within the overtime allowance
const OVER_DAILY_CEILING_PENALTY: i32 = -80; // overtime allowed
const DAILY_FLOOR_BONUS: i32 = 5;

// ===== Slot pressure =====
const SLOT_PRIORITY_WEIGHT: i32 = 3;
const URGENCY_BONUS: i32 = 10;
const URGENT_OPEN_SPOTS: u32 = 2;

// Free-text keyword lists. Substring matching is inherently fuzzy; that
// is accepted for this heuristic.
const GENERIC_EXPERIENCE_KEYWORDS: &[&str] = &[
    "bénévole",
    "benevole",
    "volunteer",
    "jonglage",
    "jongleur",
    "juggling",
    "juggler",
];
const CONVENTION_EXPERIENCE_KEYWORDS: &[&str] = &["convention", "festival"];

// ==========================================
// ScoringEngine
// ==========================================
pub struct ScoringEngine {
    constraints: SchedulingConstraints,
}

impl ScoringEngine {
    pub fn new(constraints: SchedulingConstraints) -> Self {
        Self { constraints }
    }

    /// Score one (volunteer, slot) pair against the current run state
    ///
    /// Additive composition, applied in order:
    /// 1. phase availability (strict: impossible; lenient: penalty)
    /// 2. team preference
    /// 3. time-of-day preference, per matching declared bucket
    /// 4. experience bonuses (when enabled)
    /// 5. total workload ceiling
    /// 6. daily ceiling (strict: impossible) and daily floor nudge
    /// 7. equalization toward the running average hours
    /// 8. slot priority and urgency
    ///
    /// The result never drops below IMPOSSIBLE_SCORE.
    pub fn score(
        &self,
        candidate: &ScheduleCandidate,
        slot: &TimeSlot,
        ledger: &AssignmentLedger,
    ) -> i32 {
        let mut score = 0i32;

        // 1. phase availability
        if !AvailabilityChecker::phase_allowed(&candidate.availability, slot) {
            if self.constraints.respect_strict_availability {
                return IMPOSSIBLE_SCORE;
            }
            score += UNAVAILABLE_PENALTY;
        } else {
            score += AVAILABLE_BONUS;
        }

        // 2. team preference
        if let Some(team_id) = &slot.team_id {
            if candidate
                .application
                .preferred_team_ids
                .iter()
                .any(|preferred| preferred == team_id)
            {
                score += TEAM_PREFERENCE_BONUS;
            }
        }

        // 3. time-of-day preference
        score += Self::time_preference_bonus(&candidate.availability, slot);

        // 4. experience
        if self.constraints.prioritize_experience {
            score += Self::experience_bonus(&candidate.application, slot);
        }

        let slot_hours = slot.duration_hours();
        let current_hours = ledger.hours_for(&candidate.volunteer_id);

        // 5. total workload ceiling
        let projected = current_hours + slot_hours;
        if projected > self.constraints.max_hours_per_volunteer {
            if !self.constraints.allow_overtime {
                score += OVER_MAX_HOURS_PENALTY;
            } else if projected
                > self.constraints.max_hours_per_volunteer + self.constraints.max_overtime_hours
            {
                score += OVER_OVERTIME_PENALTY;
            } else {
                score += OVERTIME_PENALTY;
            }
        }

        // 6. daily ceiling and floor
        let day = slot.calendar_day();
        let day_hours = ledger.hours_on_day(&candidate.volunteer_id, day);
        if day_hours + slot_hours > self.constraints.max_hours_per_day {
            if !self.constraints.allow_overtime {
                return IMPOSSIBLE_SCORE;
            }
            score += OVER_DAILY_CEILING_PENALTY;
        }
        if day_hours == 0.0 && slot_hours >= self.constraints.min_hours_per_day {
            score += DAILY_FLOOR_BONUS;
        }

        // 7. equalization toward the running average
        let average = ledger.average_hours();
        if current_hours < average {
            score += ((average - current_hours) * 1.5).floor() as i32;
        } else if current_hours > average {
            score -= ((current_hours - average) * 2.0).floor() as i32;
        }

        // 8. slot pressure
        if let Some(priority) = slot.priority {
            score += SLOT_PRIORITY_WEIGHT * priority;
        }
        if ledger.remaining_spots(&slot.slot_id) <= URGENT_OPEN_SPOTS {
            score += URGENCY_BONUS;
        }

        score.max(IMPOSSIBLE_SCORE)
    }

    /// +12 per declared bucket whose hour range intersects the slot
    fn time_preference_bonus(availability: &Availability, slot: &TimeSlot) -> i32 {
        if availability.preferred_times.is_empty() {
            return 0;
        }
        let hours = Self::slot_hour_span(slot);
        let matching = availability
            .preferred_times
            .iter()
            .filter_map(|name| TimeOfDayBucket::parse(name))
            .filter(|bucket| hours.iter().any(|hour| bucket.covers_hour(*hour)))
            .count() as i32;
        matching * TIME_BUCKET_BONUS
    }

    /// Wall-clock hours the slot touches, wrapping midnight, capped at a day
    fn slot_hour_span(slot: &TimeSlot) -> Vec<u32> {
        let minutes = (slot.end_time - slot.start_time).num_minutes().max(0);
        let span = ((minutes + 59) / 60).min(24) as u32;
        let first = slot.start_time.hour();
        (0..span).map(|offset| (first + offset) % 24).collect()
    }

    /// Case-insensitive substring scan of the experience text
    fn experience_bonus(application: &VolunteerApplication, slot: &TimeSlot) -> i32 {
        let text = match &application.experience {
            Some(text) if !text.trim().is_empty() => text.to_lowercase(),
            _ => return 0,
        };
        let mut bonus = 0;
        if GENERIC_EXPERIENCE_KEYWORDS
            .iter()
            .any(|keyword| text.contains(keyword))
        {
            bonus += GENERIC_EXPERIENCE_BONUS;
        }
        if CONVENTION_EXPERIENCE_KEYWORDS
            .iter()
            .any(|keyword| text.contains(keyword))
        {
            bonus += CONVENTION_EXPERIENCE_BONUS;
        }
        for skill in &slot.required_skills {
            let skill = skill.trim().to_lowercase();
            if !skill.is_empty() && text.contains(&skill) {
                bonus += SKILL_MATCH_BONUS;
            }
        }
        bonus
    }
}

/// Map a score to a 0-100 confidence percentage
///
/// Display-only trust indicator; never used in assignment decisions.
/// Four linear bands, rounded.
pub fn confidence(score: i32) -> u8 {
    let s = score as f64;
    let pct = if score >= 50 {
        (80.0 + 0.4 * (s - 50.0)).min(100.0)
    } else if score >= 20 {
        60.0 + 0.6 * (s - 20.0)
    } else if score >= 0 {
        40.0 + s
    } else {
        (40.0 + 0.3 * s).max(10.0)
    };
    pct.round() as u8
}

#[cfg(test)]
mod tests;
