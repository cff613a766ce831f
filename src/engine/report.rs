// ==========================================
// Volunteer Shift Scheduler - run summary
// ==========================================
// Responsibility: statistics, warnings and recommendations for one run
// Red line: stateless; entirely derived from the ledger and the inputs
// ==========================================

use crate::domain::assignment::{ScheduleStats, SchedulingResult};
use crate::domain::constraints::SchedulingConstraints;
use crate::domain::slot::TimeSlot;
use crate::engine::ledger::{AssignmentLedger, ScheduleCandidate};
use crate::i18n::t_with_args;
use std::collections::HashSet;
use tracing::info;

// Mean confidence below this ratio triggers a recommendation
const SATISFACTION_FLOOR: f64 = 0.7;

// ==========================================
// SummaryEngine
// ==========================================
pub struct SummaryEngine<'a> {
    constraints: &'a SchedulingConstraints,
}

impl<'a> SummaryEngine<'a> {
    pub fn new(constraints: &'a SchedulingConstraints) -> Self {
        Self { constraints }
    }

    /// Build the run report
    ///
    /// # Statistics
    /// - average hours over all prepared volunteers (0 when none)
    /// - satisfaction = mean confidence / 100 (0 with no assignments)
    /// - balance = max(0, 1 - stddev(hours)/(mean(hours)+1)), 1 with no
    ///   volunteers
    pub fn summarize(
        &self,
        candidates: &[ScheduleCandidate],
        slots: &[TimeSlot],
        ledger: AssignmentLedger,
    ) -> SchedulingResult {
        let assigned_ids: HashSet<&str> = ledger
            .assignments()
            .iter()
            .map(|assignment| assignment.volunteer_id.as_str())
            .collect();
        let unassigned_volunteer_ids: Vec<String> = candidates
            .iter()
            .filter(|candidate| !assigned_ids.contains(candidate.volunteer_id.as_str()))
            .map(|candidate| candidate.volunteer_id.clone())
            .collect();
        let unfilled_slot_ids: Vec<String> = slots
            .iter()
            .filter(|slot| ledger.remaining_spots(&slot.slot_id) > 0)
            .map(|slot| slot.slot_id.clone())
            .collect();

        let hours: Vec<f64> = candidates
            .iter()
            .map(|candidate| ledger.hours_for(&candidate.volunteer_id))
            .collect();
        let mean_hours = if hours.is_empty() {
            0.0
        } else {
            hours.iter().sum::<f64>() / hours.len() as f64
        };

        let total_assignments = ledger.assignments().len();
        let satisfaction_rate = if total_assignments == 0 {
            0.0
        } else {
            ledger
                .assignments()
                .iter()
                .map(|assignment| f64::from(assignment.confidence))
                .sum::<f64>()
                / total_assignments as f64
                / 100.0
        };

        let balance_score = if hours.is_empty() {
            1.0
        } else {
            let variance = hours
                .iter()
                .map(|h| (h - mean_hours).powi(2))
                .sum::<f64>()
                / hours.len() as f64;
            (1.0 - variance.sqrt() / (mean_hours + 1.0)).max(0.0)
        };

        let mut warnings = Vec::new();
        if !unassigned_volunteer_ids.is_empty() {
            let count = unassigned_volunteer_ids.len().to_string();
            warnings.push(t_with_args(
                "schedule.warning.unassigned_volunteers",
                &[("count", count.as_str())],
            ));
        }
        if !unfilled_slot_ids.is_empty() {
            let count = unfilled_slot_ids.len().to_string();
            warnings.push(t_with_args(
                "schedule.warning.unfilled_slots",
                &[("count", count.as_str())],
            ));
        }

        let mut recommendations = Vec::new();
        if total_assignments > 0 && satisfaction_rate < SATISFACTION_FLOOR {
            let rate = format!("{:.0}%", satisfaction_rate * 100.0);
            recommendations.push(t_with_args(
                "schedule.recommendation.low_satisfaction",
                &[("rate", rate.as_str())],
            ));
        }
        if !candidates.is_empty() && mean_hours < self.constraints.min_hours_per_volunteer {
            let hours_text = format!("{mean_hours:.1}");
            let min_text = format!("{:.0}", self.constraints.min_hours_per_volunteer);
            recommendations.push(t_with_args(
                "schedule.recommendation.below_min_hours",
                &[("hours", hours_text.as_str()), ("min", min_text.as_str())],
            ));
        }

        info!(
            total_assignments,
            unassigned = unassigned_volunteer_ids.len(),
            unfilled = unfilled_slot_ids.len(),
            "scheduling summary ready"
        );

        SchedulingResult {
            assignments: ledger.into_assignments(),
            unassigned_volunteer_ids,
            unfilled_slot_ids,
            stats: ScheduleStats {
                total_assignments,
                average_hours_per_volunteer: mean_hours,
                satisfaction_rate,
                balance_score,
            },
            warnings,
            recommendations,
        }
    }
}
