// ==========================================
// Volunteer Shift Scheduler - volunteer domain model
// ==========================================
// Red line: applications are caller-owned input, read-only to the engine
// ==========================================

use crate::domain::types::SlotPhase;
use serde::{Deserialize, Serialize};

// ==========================================
// VolunteerApplication - accepted application
// ==========================================
// One accepted volunteer application for an event. The availability blob
// arrives serialized from the surrounding application and is decoded
// leniently (see Availability::parse).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerApplication {
    // ===== Identity =====
    pub application_id: String,   // application record id
    pub user_id: Option<String>,  // identity reference; applications without one are skipped

    // ===== Availability =====
    pub availability_json: String, // serialized availability blob (see Availability)

    // ===== Free text =====
    pub experience: Option<String>, // prior experience, scanned for keywords
    pub motivation: Option<String>, // motivation letter (display only)
    pub phone: Option<String>,      // contact phone (display only)

    // ===== Preferences =====
    #[serde(default)]
    pub preferred_team_ids: Vec<String>, // teams the volunteer asked to join
}

impl VolunteerApplication {
    /// The scheduling identity, if the application carries a usable one
    pub fn volunteer_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// Decode the availability blob (lenient)
    pub fn availability(&self) -> Availability {
        Availability::parse(&self.availability_json)
    }
}

// ==========================================
// Availability - decoded availability blob
// ==========================================
// In valid JSON an absent phase flag means "not available for that phase";
// only a failed decode falls back to the fully permissive default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default)]
    pub setup: bool, // available during build-up
    #[serde(default)]
    pub event: bool, // available during the event
    #[serde(default)]
    pub teardown: bool, // available during tear-down

    #[serde(default)]
    pub unavailable_slots: Vec<String>, // explicit blackout slot ids

    #[serde(default)]
    pub preferred_times: Vec<String>, // time-of-day bucket names; unknown names ignored
}

impl Availability {
    /// Fully permissive availability (all phases, no blackouts)
    pub fn permissive() -> Self {
        Self {
            setup: true,
            event: true,
            teardown: true,
            unavailable_slots: Vec::new(),
            preferred_times: Vec::new(),
        }
    }

    /// Decode a serialized availability blob
    ///
    /// Malformed input never fails a scheduling run: any decode error
    /// yields the permissive default.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self::permissive())
    }

    /// Declared flag for a slot phase
    pub fn allows_phase(&self, phase: SlotPhase) -> bool {
        match phase {
            SlotPhase::Setup => self.setup,
            SlotPhase::Event => self.event,
            SlotPhase::Teardown => self.teardown,
        }
    }
}
