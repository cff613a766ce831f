// ==========================================
// Volunteer Shift Scheduler - roster export
// ==========================================
// Responsibility: write a committed or previewed roster as CSV for
// organizers (spreadsheet-friendly)
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::slot::TimeSlot;
use crate::domain::team::Team;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Write one CSV row per assignment, in assignment order
///
/// Slots and teams are joined by id; an assignment referencing an unknown
/// slot is skipped with a warning rather than failing the export.
///
/// # Returns
/// Number of data rows written.
pub fn write_roster_csv<P: AsRef<Path>>(
    path: P,
    assignments: &[Assignment],
    slots: &[TimeSlot],
    teams: &[Team],
) -> Result<usize> {
    let slots_by_id: HashMap<&str, &TimeSlot> =
        slots.iter().map(|slot| (slot.slot_id.as_str(), slot)).collect();
    let teams_by_id: HashMap<&str, &Team> =
        teams.iter().map(|team| (team.team_id.as_str(), team)).collect();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "slot_id",
        "slot_title",
        "starts_at",
        "ends_at",
        "team",
        "volunteer_id",
        "score",
        "confidence_pct",
    ])?;

    let mut rows = 0usize;
    for assignment in assignments {
        let slot = match slots_by_id.get(assignment.slot_id.as_str()) {
            Some(slot) => *slot,
            None => {
                warn!(slot_id = %assignment.slot_id, "assignment references unknown slot, row skipped");
                continue;
            }
        };
        let team_name = assignment
            .team_id
            .as_deref()
            .and_then(|team_id| teams_by_id.get(team_id))
            .map(|team| team.name.as_str())
            .unwrap_or("");
        writer.write_record([
            slot.slot_id.as_str(),
            slot.title.as_str(),
            &slot.start_time.to_rfc3339(),
            &slot.end_time.to_rfc3339(),
            team_name,
            assignment.volunteer_id.as_str(),
            &assignment.score.to_string(),
            &assignment.confidence.to_string(),
        ])?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}
