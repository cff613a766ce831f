use super::{confidence, ScoringEngine, IMPOSSIBLE_SCORE};
use crate::domain::constraints::SchedulingConstraints;
use crate::domain::slot::TimeSlot;
use crate::domain::volunteer::VolunteerApplication;
use crate::engine::ledger::{AssignmentLedger, ScheduleCandidate};
use chrono::{Duration, TimeZone, Utc};

// ==========================================
// Test helpers
// ==========================================

const ALL_PHASES: &str = r#"{"setup":true,"event":true,"teardown":true}"#;

fn make_slot(
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

fn make_candidate(volunteer_id: &str, availability_json: &str) -> ScheduleCandidate {
    let application = VolunteerApplication {
        application_id: format!("app-{volunteer_id}"),
        user_id: Some(volunteer_id.to_string()),
        availability_json: availability_json.to_string(),
        experience: None,
        motivation: None,
        phone: None,
        preferred_team_ids: Vec::new(),
    };
    ScheduleCandidate {
        volunteer_id: volunteer_id.to_string(),
        availability: application.availability(),
        application,
    }
}

fn default_scorer() -> ScoringEngine {
    ScoringEngine::new(SchedulingConstraints::default())
}

// ==========================================
// Availability term
// ==========================================

#[test]
fn test_base_score_available_plus_daily_floor() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", ALL_PHASES);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    // +20 available, +5 daily floor (0h that day, 3h >= 1h)
    assert_eq!(scorer.score(&candidate, &slot, &ledger), 25);
}

#[test]
fn test_strict_unavailability_is_impossible() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", r#"{"event":true}"#);
    let slot = make_slot("s-1", "Montage jour 1", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), IMPOSSIBLE_SCORE);
}

#[test]
fn test_lenient_unavailability_is_penalized_not_impossible() {
    let scorer = ScoringEngine::new(SchedulingConstraints {
        respect_strict_availability: false,
        ..Default::default()
    });
    let candidate = make_candidate("u-1", r#"{"event":true}"#);
    let slot = make_slot("s-1", "Montage jour 1", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    // -50 unavailable, +5 daily floor
    assert_eq!(scorer.score(&candidate, &slot, &ledger), -45);
}

// ==========================================
// Preference terms
// ==========================================

#[test]
fn test_team_preference_bonus() {
    let scorer = default_scorer();
    let mut candidate = make_candidate("u-1", ALL_PHASES);
    candidate.application.preferred_team_ids = vec!["t-bar".to_string()];
    let mut slot = make_slot("s-1", "Bar", 5, 10, 3, 5);
    slot.team_id = Some("t-bar".to_string());
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 40);

    slot.team_id = Some("t-kitchen".to_string());
    assert_eq!(scorer.score(&candidate, &slot, &ledger), 25);
}

#[test]
fn test_time_bucket_bonus_single_match() {
    let scorer = default_scorer();
    let candidate = make_candidate(
        "u-1",
        r#"{"setup":true,"event":true,"teardown":true,"preferredTimes":["morning"]}"#,
    );
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 37);
}

#[test]
fn test_time_bucket_bonus_sums_across_matches() {
    let scorer = default_scorer();
    let candidate = make_candidate(
        "u-1",
        r#"{"setup":true,"event":true,"teardown":true,"preferredTimes":["late_afternoon","evening"]}"#,
    );
    // 17:00-22:00 touches both late_afternoon (17-20) and evening (20-23)
    let slot = make_slot("s-1", "Accueil", 5, 17, 5, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 49);
}

#[test]
fn test_unknown_bucket_names_are_ignored() {
    let scorer = default_scorer();
    let candidate = make_candidate(
        "u-1",
        r#"{"setup":true,"event":true,"teardown":true,"preferredTimes":["brunch"]}"#,
    );
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 25);
}

// ==========================================
// Experience term
// ==========================================

#[test]
fn test_experience_keywords_and_skill_match() {
    let scorer = default_scorer();
    let mut candidate = make_candidate("u-1", ALL_PHASES);
    candidate.application.experience =
        Some("Bénévole en festival, tenue de bar".to_string());
    let mut slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    slot.required_skills = vec!["bar".to_string()];
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    // +5 generic, +3 convention/festival, +8 skill
    assert_eq!(scorer.score(&candidate, &slot, &ledger), 41);
}

#[test]
fn test_experience_ignored_when_disabled() {
    let scorer = ScoringEngine::new(SchedulingConstraints {
        prioritize_experience: false,
        ..Default::default()
    });
    let mut candidate = make_candidate("u-1", ALL_PHASES);
    candidate.application.experience = Some("volunteer at a juggling convention".to_string());
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 25);
}

// ==========================================
// Workload terms
// ==========================================

#[test]
fn test_workload_ceiling_without_overtime() {
    let scorer = ScoringEngine::new(SchedulingConstraints {
        max_hours_per_volunteer: 8.0,
        ..Default::default()
    });
    let candidate = make_candidate("u-1", ALL_PHASES);
    let prior = make_slot("s-0", "Accueil", 4, 10, 7, 5);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let mut ledger = AssignmentLedger::new(&[prior.clone(), slot.clone()], 1);
    ledger.commit("u-1", &prior, 60, 84);

    // 7h + 3h > 8h: -100; +20 available, +5 daily floor
    assert_eq!(scorer.score(&candidate, &slot, &ledger), -75);
}

#[test]
fn test_workload_ceiling_overtime_bands() {
    let candidate = make_candidate("u-1", ALL_PHASES);
    let prior = make_slot("s-0", "Accueil", 4, 10, 7, 5);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let mut ledger = AssignmentLedger::new(&[prior.clone(), slot.clone()], 1);
    ledger.commit("u-1", &prior, 60, 84);

    // within the allowance: 10h <= 8h + 2h
    let within = ScoringEngine::new(SchedulingConstraints {
        max_hours_per_volunteer: 8.0,
        allow_overtime: true,
        max_overtime_hours: 2.0,
        ..Default::default()
    });
    assert_eq!(within.score(&candidate, &slot, &ledger), 5);

    // beyond the allowance: 10h > 8h + 1h
    let beyond = ScoringEngine::new(SchedulingConstraints {
        max_hours_per_volunteer: 8.0,
        allow_overtime: true,
        max_overtime_hours: 1.0,
        ..Default::default()
    });
    assert_eq!(beyond.score(&candidate, &slot, &ledger), -175);
}

#[test]
fn test_daily_ceiling_strict_is_impossible() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", ALL_PHASES);
    let prior = make_slot("s-0", "Accueil", 5, 8, 6, 5);
    let slot = make_slot("s-1", "Accueil", 5, 15, 3, 5);
    let mut ledger = AssignmentLedger::new(&[prior.clone(), slot.clone()], 1);
    ledger.commit("u-1", &prior, 60, 84);

    // 6h + 3h on the same day > 8h
    assert_eq!(scorer.score(&candidate, &slot, &ledger), IMPOSSIBLE_SCORE);
}

#[test]
fn test_daily_ceiling_with_overtime_is_penalized() {
    let scorer = ScoringEngine::new(SchedulingConstraints {
        allow_overtime: true,
        ..Default::default()
    });
    let candidate = make_candidate("u-1", ALL_PHASES);
    let prior = make_slot("s-0", "Accueil", 5, 8, 6, 5);
    let slot = make_slot("s-1", "Accueil", 5, 15, 3, 5);
    let mut ledger = AssignmentLedger::new(&[prior.clone(), slot.clone()], 1);
    ledger.commit("u-1", &prior, 60, 84);

    // +20 available, -80 daily ceiling, no floor (day already has hours)
    assert_eq!(scorer.score(&candidate, &slot, &ledger), -60);
}

// ==========================================
// Equalization term
// ==========================================

#[test]
fn test_equalization_nudges_toward_average() {
    let scorer = default_scorer();
    let busy = make_candidate("u-busy", ALL_PHASES);
    let idle = make_candidate("u-idle", ALL_PHASES);
    let prior = make_slot("s-0", "Accueil", 4, 10, 4, 5);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let mut ledger = AssignmentLedger::new(&[prior.clone(), slot.clone()], 2);
    ledger.commit("u-busy", &prior, 60, 84);

    // average = 2h; idle is 2h below: +floor(1.5 * 2) = +3
    assert_eq!(scorer.score(&idle, &slot, &ledger), 28);
    // busy is 2h above: -floor(2 * 2) = -4
    assert_eq!(scorer.score(&busy, &slot, &ledger), 21);
}

// ==========================================
// Slot pressure terms
// ==========================================

#[test]
fn test_slot_priority_weight() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", ALL_PHASES);
    let mut slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    slot.priority = Some(3);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    assert_eq!(scorer.score(&candidate, &slot, &ledger), 34);
}

#[test]
fn test_urgency_bonus_for_scarce_slots() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", ALL_PHASES);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 2);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    // 2 open spots left
    assert_eq!(scorer.score(&candidate, &slot, &ledger), 35);
}

#[test]
fn test_scoring_is_stable_across_calls() {
    let scorer = default_scorer();
    let candidate = make_candidate("u-1", ALL_PHASES);
    let slot = make_slot("s-1", "Accueil", 5, 10, 3, 5);
    let ledger = AssignmentLedger::new(std::slice::from_ref(&slot), 1);

    let first = scorer.score(&candidate, &slot, &ledger);
    let second = scorer.score(&candidate, &slot, &ledger);
    assert_eq!(first, second);
}

// ==========================================
// Confidence mapping
// ==========================================

#[test]
fn test_confidence_bands() {
    assert_eq!(confidence(50), 80);
    assert_eq!(confidence(100), 100);
    assert_eq!(confidence(200), 100); // capped
    assert_eq!(confidence(49), 77);
    assert_eq!(confidence(20), 60);
    assert_eq!(confidence(19), 59);
    assert_eq!(confidence(0), 40);
    assert_eq!(confidence(-10), 37);
    assert_eq!(confidence(-100), 10);
    assert_eq!(confidence(IMPOSSIBLE_SCORE), 10);
}
