// ==========================================
// Volunteer Shift Scheduler - domain layer
// ==========================================
// Responsibility: entities, types, tunable policy
// Red line: no data access logic, no engine logic
// ==========================================

pub mod assignment;
pub mod constraints;
pub mod slot;
pub mod team;
pub mod types;
pub mod volunteer;

// Re-export core types
pub use assignment::{Assignment, ScheduleStats, SchedulingResult};
pub use constraints::{ConstraintError, ConstraintOverrides, SchedulingConstraints};
pub use slot::TimeSlot;
pub use team::Team;
pub use types::{SlotPhase, TimeOfDayBucket};
pub use volunteer::{Availability, VolunteerApplication};
