// ==========================================
// Test helpers
// ==========================================
// Responsibility: shared factories for the integration tests
// ==========================================

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use volunteer_shift_scheduler::domain::{Assignment, TimeSlot, VolunteerApplication};

/// Availability blob declaring every phase
pub const ALL_PHASES: &str = r#"{"setup":true,"event":true,"teardown":true}"#;

/// Create a test slot on a June 2026 day
pub fn create_test_slot(
    slot_id: &str,
    title: &str,
    day: u32,
    start_hour: u32,
    duration_hours: i64,
    max_volunteers: u32,
) -> TimeSlot {
    let start = Utc.with_ymd_and_hms(2026, 6, day, start_hour, 0, 0).unwrap();
    TimeSlot {
        slot_id: slot_id.to_string(),
        title: title.to_string(),
        start_time: start,
        end_time: start + Duration::hours(duration_hours),
        team_id: None,
        max_volunteers,
        assigned_volunteers: 0,
        description: None,
        required_skills: Vec::new(),
        priority: None,
    }
}

/// Create a test application with a usable identity reference
pub fn create_test_volunteer(user_id: &str, availability_json: &str) -> VolunteerApplication {
    VolunteerApplication {
        application_id: format!("app-{user_id}"),
        user_id: Some(user_id.to_string()),
        availability_json: availability_json.to_string(),
        experience: None,
        motivation: None,
        phone: None,
        preferred_team_ids: Vec::new(),
    }
}

/// Total assigned hours of one volunteer, derived from the assignment list
pub fn assigned_hours(assignments: &[Assignment], slots: &[TimeSlot], volunteer_id: &str) -> f64 {
    assignments
        .iter()
        .filter(|assignment| assignment.volunteer_id == volunteer_id)
        .filter_map(|assignment| {
            slots
                .iter()
                .find(|slot| slot.slot_id == assignment.slot_id)
                .map(TimeSlot::duration_hours)
        })
        .sum()
}

/// Assert that no volunteer holds two overlapping shifts
pub fn assert_no_double_booking(assignments: &[Assignment], slots: &[TimeSlot]) {
    for (i, a) in assignments.iter().enumerate() {
        for b in assignments.iter().skip(i + 1) {
            if a.volunteer_id != b.volunteer_id {
                continue;
            }
            let slot_a = slots.iter().find(|slot| slot.slot_id == a.slot_id).unwrap();
            let slot_b = slots.iter().find(|slot| slot.slot_id == b.slot_id).unwrap();
            assert!(
                slot_a.start_time >= slot_b.end_time || slot_a.end_time <= slot_b.start_time,
                "volunteer {} double-booked on {} and {}",
                a.volunteer_id,
                a.slot_id,
                b.slot_id
            );
        }
    }
}
