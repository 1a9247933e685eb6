//! Collapses a user's maintenance history into one pending entry per
//! lineage, i.e. per (asset, service) pair.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{MaintenanceRecord, PendingMaintenanceEntry, UNKNOWN_ASSET_NAME};
use crate::urgency::classify;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineageKey {
    pub asset_id: i32,
    pub service: String,
}

impl LineageKey {
    pub fn of(record: &MaintenanceRecord) -> Self {
        LineageKey {
            asset_id: record.asset_id,
            service: record.service_description.trim().to_lowercase(),
        }
    }
}

/// Builds the sorted pending list for `records` as of `today`.
///
/// Records without a next due date are ignored. Within a lineage the first
/// remaining record in input order is kept. Entries come out most urgent
/// first, then by earliest due date.
pub fn compute_pending_maintenance(
    records: &[MaintenanceRecord],
    today: NaiveDate,
) -> Vec<PendingMaintenanceEntry> {
    let mut seen = HashSet::new();
    let mut pending = Vec::new();

    for record in records {
        let Some(due) = record.next_due_date else {
            continue;
        };
        if !seen.insert(LineageKey::of(record)) {
            continue;
        }

        let mut record = record.clone();
        if record.asset_name.is_none() {
            record.asset_name = Some(UNKNOWN_ASSET_NAME.to_string());
        }
        pending.push(PendingMaintenanceEntry {
            urgency: classify(due, today),
            record,
        });
    }

    pending.sort_by(|a, b| {
        a.urgency
            .cmp(&b.urgency)
            .then(a.record.next_due_date.cmp(&b.record.next_due_date))
    });
    pending
}
