// Small dev utility: run a scheduling preview over a scenario file.
//
// Usage:
//   cargo run --bin preview-schedule -- scenario.json [roster.csv]
//
// The scenario file bundles everything one run needs:
//   { "event_id": "...", "constraints": { ... },
//     "volunteers": [...], "slots": [...], "teams": [...] }
//
// This is intentionally lightweight and never persists anything; pass a
// second path to also write the previewed roster as CSV.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use volunteer_shift_scheduler::api::{
    AssignmentStore, RunAudit, ScheduleDataSource, SchedulingApi,
};
use volunteer_shift_scheduler::domain::{
    Assignment, ConstraintOverrides, Team, TimeSlot, VolunteerApplication,
};
use volunteer_shift_scheduler::{export, logging};

#[derive(Debug, Clone, Deserialize)]
struct ScenarioFile {
    event_id: String,
    #[serde(default)]
    constraints: ConstraintOverrides,
    volunteers: Vec<VolunteerApplication>,
    slots: Vec<TimeSlot>,
    #[serde(default)]
    teams: Vec<Team>,
}

struct ScenarioSource {
    scenario: ScenarioFile,
}

#[async_trait]
impl ScheduleDataSource for ScenarioSource {
    async fn load_accepted_applications(
        &self,
        _event_id: &str,
    ) -> anyhow::Result<Vec<VolunteerApplication>> {
        Ok(self.scenario.volunteers.clone())
    }

    async fn load_time_slots(&self, _event_id: &str) -> anyhow::Result<Vec<TimeSlot>> {
        Ok(self.scenario.slots.clone())
    }

    async fn load_teams(&self, _event_id: &str) -> anyhow::Result<Vec<Team>> {
        Ok(self.scenario.teams.clone())
    }
}

// Previews never persist; the store is a stub.
struct NoopStore;

#[async_trait]
impl AssignmentStore for NoopStore {
    async fn replace_event_assignments(
        &self,
        _event_id: &str,
        _assignments: &[Assignment],
        _audit: &RunAudit,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args
        .next()
        .context("usage: preview-schedule <scenario.json> [roster.csv]")?;
    let roster_path = args.next();

    let raw = std::fs::read_to_string(&scenario_path)
        .with_context(|| format!("cannot read scenario file {scenario_path}"))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&raw).context("malformed scenario file")?;

    let event_id = scenario.event_id.clone();
    let constraints = scenario.constraints.clone();
    let slots = scenario.slots.clone();
    let teams = scenario.teams.clone();

    let api = SchedulingApi::new(ScenarioSource { scenario }, NoopStore);
    let result = api.preview(&event_id, &constraints).await?;

    println!("assignments: {}", result.stats.total_assignments);
    println!(
        "unassigned volunteers: {}",
        result.unassigned_volunteer_ids.len()
    );
    println!("unfilled slots: {}", result.unfilled_slot_ids.len());
    println!(
        "average hours per volunteer: {:.1}",
        result.stats.average_hours_per_volunteer
    );
    println!("satisfaction: {:.0}%", result.stats.satisfaction_rate * 100.0);
    println!("balance: {:.2}", result.stats.balance_score);
    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    for recommendation in &result.recommendations {
        println!("hint: {recommendation}");
    }

    if let Some(path) = roster_path {
        let rows = export::write_roster_csv(&path, &result.assignments, &slots, &teams)?;
        println!("wrote {rows} roster rows to {path}");
    }
    Ok(())
}
