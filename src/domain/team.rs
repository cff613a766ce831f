// ==========================================
// Volunteer Shift Scheduler - team domain model
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Team - referenced by slots and preferences, never mutated
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: String, // team unique id
    pub name: String,    // display name
    pub color: String,   // UI color, irrelevant to the algorithm
}
