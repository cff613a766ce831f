// ==========================================
// Volunteer Shift Scheduler - core library
// ==========================================
// Purpose: turn accepted volunteer applications and open time slots
//          into a concrete shift roster (preview or committed)
// Positioning: decision support - organizers keep final control
// ==========================================

// Initialize the i18n catalog (en + fr)
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - scheduling rules
pub mod engine;

// API layer - collaborator seams (load / persist)
pub mod api;

// Roster export
pub mod export;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{SlotPhase, TimeOfDayBucket};

// Domain entities
pub use domain::{
    Assignment, Availability, ConstraintError, ConstraintOverrides, ScheduleStats,
    SchedulingConstraints, SchedulingResult, Team, TimeSlot, VolunteerApplication,
};

// Engine
pub use engine::{
    AssignmentLedger, AvailabilityChecker, ScheduleCandidate, SchedulingEngine, ScoringEngine,
    SummaryEngine, WorkloadBalancer,
};

// API
pub use api::{ApiError, ApiResult, AssignmentStore, RunAudit, ScheduleDataSource, SchedulingApi};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Product name
pub const APP_NAME: &str = "Volunteer Shift Scheduler";
