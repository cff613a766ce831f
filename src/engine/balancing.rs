// ==========================================
// Volunteer Shift Scheduler - workload balancing
// ==========================================
// Responsibility: move shifts from over-loaded to under-loaded
// volunteers after the fill passes
// Red line: one transfer attempt per over-utilized volunteer per call;
// this is a greedy corrective pass, not an optimizer
// ==========================================

use crate::domain::slot::TimeSlot;
use crate::engine::ledger::{AssignmentLedger, ScheduleCandidate};
use crate::engine::scoring::{confidence, ScoringEngine};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

// Hours away from the average that mark a volunteer as over/under
// utilized, and the minimum pair gap worth a transfer.
const UTILIZATION_BAND_HOURS: f64 = 2.0;
const MIN_TRANSFER_GAP_HOURS: f64 = 3.0;

// ==========================================
// WorkloadBalancer
// ==========================================
pub struct WorkloadBalancer<'a> {
    scorer: &'a ScoringEngine,
}

impl<'a> WorkloadBalancer<'a> {
    pub fn new(scorer: &'a ScoringEngine) -> Self {
        Self { scorer }
    }

    /// Rebalance assigned hours across volunteers
    ///
    /// # Rules
    /// 1. average hours and the over/under sets are computed once
    /// 2. a pair qualifies when the giver has at least 3h more than the
    ///    receiver
    /// 3. transferable shift = no time conflict for the receiver, not
    ///    already assigned to the receiver, strictly positive score
    /// 4. first viable pair wins; at most one transfer per over-utilized
    ///    volunteer
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn rebalance(
        &self,
        candidates: &[ScheduleCandidate],
        slots: &[TimeSlot],
        mut ledger: AssignmentLedger,
    ) -> AssignmentLedger {
        let average = ledger.average_hours();
        let over_utilized: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| ledger.hours_for(&c.volunteer_id) > average + UTILIZATION_BAND_HOURS)
            .map(|(index, _)| index)
            .collect();
        let under_utilized: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| ledger.hours_for(&c.volunteer_id) < average - UTILIZATION_BAND_HOURS)
            .map(|(index, _)| index)
            .collect();

        if over_utilized.is_empty() || under_utilized.is_empty() {
            debug!(average_hours = average, "workload already balanced");
            return ledger;
        }

        let slots_by_id: HashMap<&str, &TimeSlot> =
            slots.iter().map(|slot| (slot.slot_id.as_str(), slot)).collect();

        for &giver_index in &over_utilized {
            let giver = &candidates[giver_index];
            for &receiver_index in &under_utilized {
                let receiver = &candidates[receiver_index];
                let gap = ledger.hours_for(&giver.volunteer_id)
                    - ledger.hours_for(&receiver.volunteer_id);
                if gap < MIN_TRANSFER_GAP_HOURS {
                    continue;
                }
                if let Some((index, score)) =
                    self.find_transferable(giver, receiver, &slots_by_id, &ledger)
                {
                    let slot_id = ledger.assignments()[index].slot_id.clone();
                    let slot = slots_by_id[slot_id.as_str()];
                    ledger.transfer(index, &receiver.volunteer_id, slot, score, confidence(score));
                    info!(
                        from = %giver.volunteer_id,
                        to = %receiver.volunteer_id,
                        slot_id = %slot.slot_id,
                        "transferred shift"
                    );
                    // one transfer per over-utilized volunteer
                    break;
                }
            }
        }
        ledger
    }

    /// First shift of the giver the receiver could take over
    fn find_transferable(
        &self,
        giver: &ScheduleCandidate,
        receiver: &ScheduleCandidate,
        slots_by_id: &HashMap<&str, &TimeSlot>,
        ledger: &AssignmentLedger,
    ) -> Option<(usize, i32)> {
        for (index, assignment) in ledger.assignments().iter().enumerate() {
            if assignment.volunteer_id != giver.volunteer_id {
                continue;
            }
            let slot = match slots_by_id.get(assignment.slot_id.as_str()) {
                Some(slot) => *slot,
                None => continue,
            };
            if ledger.is_assigned(&receiver.volunteer_id, &slot.slot_id) {
                continue;
            }
            if ledger.has_time_conflict(&receiver.volunteer_id, slot) {
                continue;
            }
            let score = self.scorer.score(receiver, slot, ledger);
            if score > 0 {
                return Some((index, score));
            }
        }
        None
    }
}
