use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::urgency::Urgency;

/// Label used when a pending entry's asset has no name on record.
pub const UNKNOWN_ASSET_NAME: &str = "Unknown Asset";

// Distinguishes an absent field (outer `None`) from an explicit `null`
// (`Some(None)`). Pair with `#[serde(default)]`.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct NewAsset {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
}

impl AssetPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Applies the patch on top of a stored asset.
    pub fn apply(self, mut asset: Asset) -> Asset {
        if let Some(name) = self.name {
            asset.name = name;
        }
        if let Some(description) = self.description {
            asset.description = description;
        }
        asset
    }
}

/// A logged maintenance event, as read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: i32,
    pub asset_id: i32,
    pub asset_name: Option<String>,
    pub service_description: String,
    pub detailed_description: Option<String>,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// Raw maintenance row. `asset_id` is nullable at this boundary only.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MaintenanceRow {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub asset_name: Option<String>,
    pub service_description: String,
    pub detailed_description: Option<String>,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("maintenance {0} has no asset")]
pub struct OrphanMaintenance(pub i32);

impl TryFrom<MaintenanceRow> for MaintenanceRecord {
    type Error = OrphanMaintenance;

    fn try_from(row: MaintenanceRow) -> Result<Self, Self::Error> {
        let asset_id = row.asset_id.ok_or(OrphanMaintenance(row.id))?;
        Ok(MaintenanceRecord {
            id: row.id,
            asset_id,
            asset_name: row.asset_name,
            service_description: row.service_description,
            detailed_description: row.detailed_description,
            performed_date: row.performed_date,
            next_due_date: row.next_due_date,
            created_at: row.created_at,
        })
    }
}

/// One lineage's representative record plus its computed urgency.
/// Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMaintenanceEntry {
    #[serde(flatten)]
    pub record: MaintenanceRecord,
    pub urgency: Urgency,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenance {
    pub asset_id: i32,
    pub service_description: String,
    pub detailed_description: Option<String>,
    pub performed_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePatch {
    pub service_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub detailed_description: Option<Option<String>>,
    pub performed_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub next_due_date: Option<Option<NaiveDate>>,
}

impl MaintenancePatch {
    pub fn is_empty(&self) -> bool {
        self.service_description.is_none()
            && self.detailed_description.is_none()
            && self.performed_date.is_none()
            && self.next_due_date.is_none()
    }

    pub fn apply(self, mut record: MaintenanceRecord) -> MaintenanceRecord {
        if let Some(service_description) = self.service_description {
            record.service_description = service_description;
        }
        if let Some(detailed_description) = self.detailed_description {
            record.detailed_description = detailed_description;
        }
        if let Some(performed_date) = self.performed_date {
            record.performed_date = performed_date;
        }
        if let Some(next_due_date) = self.next_due_date {
            record.next_due_date = next_due_date;
        }
        record
    }
}
