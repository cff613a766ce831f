// ==========================================
// Volunteer Shift Scheduler - scheduling engine
// ==========================================
// Responsibility: orchestrate the assignment passes for one run
// Red line: never fails mid-run; impossible matches are excluded by
// score thresholds, not by errors
// ==========================================
// Input: applications + slots + teams + merged constraints
// Output: SchedulingResult (assignments, leftovers, statistics)
// ==========================================

use crate::domain::assignment::SchedulingResult;
use crate::domain::constraints::{ConstraintError, ConstraintOverrides, SchedulingConstraints};
use crate::domain::slot::TimeSlot;
use crate::domain::team::Team;
use crate::domain::volunteer::VolunteerApplication;
use crate::engine::balancing::WorkloadBalancer;
use crate::engine::ledger::{AssignmentLedger, ScheduleCandidate};
use crate::engine::report::SummaryEngine;
use crate::engine::scoring::{confidence, ScoringEngine};
use tracing::{debug, info, instrument};

// Acceptance thresholds of the two fill passes. The first pass commits
// only obviously-right matches; the second accepts anything that is not
// close to impossible.
const HIGH_SCORE_THRESHOLD: i32 = 50;
const BACKFILL_SCORE_THRESHOLD: i32 = -50;

// ==========================================
// SchedulingEngine - pass orchestrator
// ==========================================
pub struct SchedulingEngine {
    volunteers: Vec<VolunteerApplication>,
    slots: Vec<TimeSlot>,
    teams: Vec<Team>,
    constraints: SchedulingConstraints,
    scorer: ScoringEngine,
}

impl SchedulingEngine {
    /// Build an engine for one event
    ///
    /// # Arguments
    /// - volunteers: accepted applications (read-only)
    /// - slots: shifts to staff (read-only; fill counts are tracked in the
    ///   run ledger)
    /// - teams: team directory (read-only)
    /// - overrides: partial constraint overrides, merged onto the defaults
    ///
    /// # Errors
    /// Rejects clearly invalid constraints (negative hour limits,
    /// min above max) instead of producing nonsensical scores.
    pub fn new(
        volunteers: Vec<VolunteerApplication>,
        slots: Vec<TimeSlot>,
        teams: Vec<Team>,
        overrides: &ConstraintOverrides,
    ) -> Result<Self, ConstraintError> {
        let constraints = SchedulingConstraints::with_overrides(overrides);
        constraints.validate()?;
        Ok(Self {
            volunteers,
            slots,
            teams,
            scorer: ScoringEngine::new(constraints.clone()),
            constraints,
        })
    }

    pub fn constraints(&self) -> &SchedulingConstraints {
        &self.constraints
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    // ==========================================
    // Core operation
    // ==========================================

    /// Run the full assignment pipeline
    ///
    /// Four ordered passes share one ledger: preparation, high-priority
    /// fill, backfill, balancing (when enabled). Deterministic for
    /// identical inputs; the caller's slot records are never mutated, so
    /// repeated runs on the same engine yield the same roster.
    #[instrument(skip(self), fields(volunteers = self.volunteers.len(), slots = self.slots.len()))]
    pub fn assign_volunteers(&self) -> SchedulingResult {
        info!("starting scheduling run");

        // ==========================================
        // Pass 1: preparation
        // ==========================================
        let candidates = self.prepare_candidates();
        let ledger = AssignmentLedger::new(&self.slots, candidates.len());
        let order = self.slot_order(&ledger);
        debug!(candidates = candidates.len(), "preparation complete");

        // ==========================================
        // Pass 2: high-priority fill
        // ==========================================
        let ledger = self.fill_pass(&candidates, &order, ledger, HIGH_SCORE_THRESHOLD, false);
        info!(assignments = ledger.assignments().len(), "high-priority pass complete");

        // ==========================================
        // Pass 3: backfill
        // ==========================================
        let ledger = self.fill_pass(&candidates, &order, ledger, BACKFILL_SCORE_THRESHOLD, true);
        info!(assignments = ledger.assignments().len(), "backfill pass complete");

        // ==========================================
        // Pass 4: balancing (optional)
        // ==========================================
        let ledger = if self.constraints.balance_teams {
            WorkloadBalancer::new(&self.scorer).rebalance(&candidates, &self.slots, ledger)
        } else {
            ledger
        };

        SummaryEngine::new(&self.constraints).summarize(&candidates, &self.slots, ledger)
    }

    // ==========================================
    // Pass 1: preparation
    // ==========================================

    /// Keep applications with a usable identity reference and decode each
    /// availability blob once
    fn prepare_candidates(&self) -> Vec<ScheduleCandidate> {
        let mut candidates = Vec::new();
        for application in &self.volunteers {
            match application.volunteer_id() {
                Some(id) => candidates.push(ScheduleCandidate {
                    volunteer_id: id.to_string(),
                    availability: application.availability(),
                    application: application.clone(),
                }),
                None => debug!(
                    application_id = %application.application_id,
                    "skipped application without identity reference"
                ),
            }
        }
        candidates
    }

    /// Slot processing order: scarce, urgent, soon slots first
    ///
    /// # Rules
    /// 1. explicit priority, descending
    /// 2. fewest remaining open spots, ascending
    /// 3. start time, ascending
    fn slot_order(&self, ledger: &AssignmentLedger) -> Vec<&TimeSlot> {
        let mut order: Vec<&TimeSlot> = self.slots.iter().collect();
        order.sort_by(|a, b| {
            b.priority
                .unwrap_or(0)
                .cmp(&a.priority.unwrap_or(0))
                .then_with(|| {
                    ledger
                        .remaining_spots(&a.slot_id)
                        .cmp(&ledger.remaining_spots(&b.slot_id))
                })
                .then_with(|| a.start_time.cmp(&b.start_time))
        });
        order
    }

    // ==========================================
    // Passes 2 & 3: fill
    // ==========================================

    /// Fill each slot, in order, with the best-scoring candidates
    ///
    /// Scores are snapshotted per slot before committing; candidates with
    /// a time conflict are skipped regardless of score. When
    /// enforce_hour_ceiling is set, the hard hours cap (plus overtime
    /// allowance, when enabled) is re-verified before each commit.
    fn fill_pass(
        &self,
        candidates: &[ScheduleCandidate],
        order: &[&TimeSlot],
        mut ledger: AssignmentLedger,
        threshold: i32,
        enforce_hour_ceiling: bool,
    ) -> AssignmentLedger {
        for slot in order {
            if ledger.remaining_spots(&slot.slot_id) == 0 {
                continue;
            }

            let mut scored: Vec<(usize, i32)> = candidates
                .iter()
                .enumerate()
                .filter(|(_, candidate)| !ledger.is_assigned(&candidate.volunteer_id, &slot.slot_id))
                .map(|(index, candidate)| (index, self.scorer.score(candidate, slot, &ledger)))
                .filter(|(_, score)| *score > threshold)
                .collect();
            // stable sort: ties keep application order
            scored.sort_by(|a, b| b.1.cmp(&a.1));

            for (index, score) in scored {
                if ledger.remaining_spots(&slot.slot_id) == 0 {
                    break;
                }
                let candidate = &candidates[index];
                if ledger.has_time_conflict(&candidate.volunteer_id, slot) {
                    debug!(
                        volunteer_id = %candidate.volunteer_id,
                        slot_id = %slot.slot_id,
                        "skipped: time conflict"
                    );
                    continue;
                }
                if enforce_hour_ceiling && !self.within_hour_ceiling(&candidate.volunteer_id, slot, &ledger)
                {
                    debug!(
                        volunteer_id = %candidate.volunteer_id,
                        slot_id = %slot.slot_id,
                        "skipped: hour ceiling"
                    );
                    continue;
                }
                ledger.commit(&candidate.volunteer_id, slot, score, confidence(score));
            }
        }
        ledger
    }

    fn within_hour_ceiling(
        &self,
        volunteer_id: &str,
        slot: &TimeSlot,
        ledger: &AssignmentLedger,
    ) -> bool {
        let allowance = if self.constraints.allow_overtime {
            self.constraints.max_overtime_hours
        } else {
            0.0
        };
        ledger.hours_for(volunteer_id) + slot.duration_hours()
            <= self.constraints.max_hours_per_volunteer + allowance
    }
}
