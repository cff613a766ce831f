// ==========================================
// Volunteer Shift Scheduler - scheduling API
// ==========================================
// Responsibility: the seams between the engine and its collaborators
// (loading inputs, persisting the roster) plus the preview/commit flow
// Red line: the engine itself stays free of I/O; everything external
// goes through these traits
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::assignment::{Assignment, SchedulingResult};
use crate::domain::constraints::ConstraintOverrides;
use crate::domain::slot::TimeSlot;
use crate::domain::team::Team;
use crate::domain::volunteer::VolunteerApplication;
use crate::engine::SchedulingEngine;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// ScheduleDataSource - input loading seam
// ==========================================
// Implementors: the surrounding application (database-backed), scenario
// files in the dev bin, in-memory fixtures in tests.
#[async_trait]
pub trait ScheduleDataSource: Send + Sync {
    /// Accepted volunteer applications for the event
    async fn load_accepted_applications(
        &self,
        event_id: &str,
    ) -> anyhow::Result<Vec<VolunteerApplication>>;

    /// Open time slots for the event
    async fn load_time_slots(&self, event_id: &str) -> anyhow::Result<Vec<TimeSlot>>;

    /// Team directory for the event
    async fn load_teams(&self, event_id: &str) -> anyhow::Result<Vec<Team>>;
}

// ==========================================
// AssignmentStore - persistence seam
// ==========================================
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Replace all prior assignments for the event with the given roster
    ///
    /// Implementors should delete-then-insert inside one transaction and
    /// keep the audit record alongside the roster.
    async fn replace_event_assignments(
        &self,
        event_id: &str,
        assignments: &[Assignment],
        audit: &RunAudit,
    ) -> anyhow::Result<()>;
}

// ==========================================
// RunAudit - who triggered the run, and when
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAudit {
    pub run_id: String,             // uuid of this run
    pub triggered_by: String,       // operator identity
    pub triggered_at: DateTime<Utc>,
}

impl RunAudit {
    pub fn new(triggered_by: &str) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            triggered_by: triggered_by.to_string(),
            triggered_at: Utc::now(),
        }
    }
}

// ==========================================
// SchedulingApi - preview / commit flow
// ==========================================
pub struct SchedulingApi<S, P>
where
    S: ScheduleDataSource,
    P: AssignmentStore,
{
    source: S,
    store: P,
}

impl<S, P> SchedulingApi<S, P>
where
    S: ScheduleDataSource,
    P: AssignmentStore,
{
    pub fn new(source: S, store: P) -> Self {
        Self { source, store }
    }

    /// Run the engine and return the result without persisting anything
    #[instrument(skip(self, overrides))]
    pub async fn preview(
        &self,
        event_id: &str,
        overrides: &ConstraintOverrides,
    ) -> ApiResult<SchedulingResult> {
        let engine = self.build_engine(event_id, overrides).await?;
        Ok(engine.assign_volunteers())
    }

    /// Run the engine and replace the event's roster
    ///
    /// # Returns
    /// The scheduling result plus the audit record handed to the store.
    #[instrument(skip(self, overrides))]
    pub async fn commit(
        &self,
        event_id: &str,
        overrides: &ConstraintOverrides,
        triggered_by: &str,
    ) -> ApiResult<(SchedulingResult, RunAudit)> {
        let engine = self.build_engine(event_id, overrides).await?;
        let result = engine.assign_volunteers();

        let audit = RunAudit::new(triggered_by);
        self.store
            .replace_event_assignments(event_id, &result.assignments, &audit)
            .await
            .map_err(|err| ApiError::Store(err.to_string()))?;

        info!(
            run_id = %audit.run_id,
            triggered_by = %audit.triggered_by,
            assignments = result.assignments.len(),
            "roster committed"
        );
        Ok((result, audit))
    }

    async fn build_engine(
        &self,
        event_id: &str,
        overrides: &ConstraintOverrides,
    ) -> ApiResult<SchedulingEngine> {
        let volunteers = self
            .source
            .load_accepted_applications(event_id)
            .await
            .map_err(|err| ApiError::DataSource(err.to_string()))?;
        let slots = self
            .source
            .load_time_slots(event_id)
            .await
            .map_err(|err| ApiError::DataSource(err.to_string()))?;
        let teams = self
            .source
            .load_teams(event_id)
            .await
            .map_err(|err| ApiError::DataSource(err.to_string()))?;

        Ok(SchedulingEngine::new(volunteers, slots, teams, overrides)?)
    }
}
