// ==========================================
// Volunteer Shift Scheduler - availability checks
// ==========================================
// Responsibility: pure availability and time-overlap logic
// Red line: stateless, no side effects, no I/O
// ==========================================

use crate::domain::slot::TimeSlot;
use crate::domain::volunteer::{Availability, VolunteerApplication};
use chrono::{DateTime, Utc};

// ==========================================
// AvailabilityChecker - pure function toolbox
// ==========================================
pub struct AvailabilityChecker;

impl AvailabilityChecker {
    /// Whether a volunteer can take a slot at all
    ///
    /// # Rules
    /// 1. decode the availability blob (lenient; malformed → permissive)
    /// 2. slot id on the explicit blackout list → unavailable
    /// 3. otherwise → the declared flag for the slot's phase
    pub fn is_available(application: &VolunteerApplication, slot: &TimeSlot) -> bool {
        Self::phase_allowed(&application.availability(), slot)
    }

    /// Same check against an already-decoded blob
    pub fn phase_allowed(availability: &Availability, slot: &TimeSlot) -> bool {
        if availability
            .unavailable_slots
            .iter()
            .any(|blocked| blocked == &slot.slot_id)
        {
            return false;
        }
        availability.allows_phase(slot.phase())
    }

    /// Half-open interval overlap test, checked symmetrically
    pub fn overlaps(
        target_start: DateTime<Utc>,
        target_end: DateTime<Utc>,
        other_start: DateTime<Utc>,
        other_end: DateTime<Utc>,
    ) -> bool {
        target_start < other_end && target_end > other_start
    }
}
