// ==========================================
// Volunteer Shift Scheduler - engine layer
// ==========================================
// Responsibility: scheduling rules only; no I/O, no persistence
// Red line: a run never throws - impossible matches are excluded by
// score thresholds
// ==========================================

pub mod availability;
pub mod balancing;
pub mod ledger;
pub mod report;
pub mod scheduler;
pub mod scoring;

// Re-export core engine types
pub use availability::AvailabilityChecker;
pub use balancing::WorkloadBalancer;
pub use ledger::{AssignmentLedger, ScheduleCandidate};
pub use report::SummaryEngine;
pub use scheduler::SchedulingEngine;
pub use scoring::{confidence, ScoringEngine, IMPOSSIBLE_SCORE};
