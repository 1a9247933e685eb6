use sqlx::PgPool;

use crate::model::{MaintenanceRecord, MaintenanceRow, NewMaintenance};

// Selects a record from `m` joined to its asset `a`.
const RECORD_COLUMNS: &str = r#"
    m.id, m.asset_id, a."name" AS asset_name, m.service_description,
    m.detailed_description, m.performed_date, m.next_due_date, m.created_at
"#;

/// Newest work first: first in a lineage is the latest performed.
const HISTORY_ORDER: &str = "ORDER BY m.performed_date DESC, m.id DESC";

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        maintenance: &NewMaintenance,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            WITH m AS (
                INSERT INTO public.maintenance
                (asset_id, service_description, detailed_description, performed_date, next_due_date)
                VALUES($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT {RECORD_COLUMNS}
            FROM m LEFT JOIN public.assets a ON a.id = m.asset_id;
            "#
        );

        let row = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(maintenance.asset_id)
            .bind(&maintenance.service_description)
            .bind(&maintenance.detailed_description)
            .bind(maintenance.performed_date)
            .bind(maintenance.next_due_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(accept(row))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM public.maintenance m LEFT JOIN public.assets a ON a.id = m.asset_id
            WHERE m.id = $1
            "#
        );

        let row = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(accept))
    }

    /// Writes every mutable field of `record` back to its row.
    pub async fn update(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            WITH m AS (
                UPDATE public.maintenance
                SET service_description = $1, detailed_description = $2,
                    performed_date = $3, next_due_date = $4
                WHERE id = $5
                RETURNING *
            )
            SELECT {RECORD_COLUMNS}
            FROM m LEFT JOIN public.assets a ON a.id = m.asset_id;
            "#
        );

        let row = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(&record.service_description)
            .bind(&record.detailed_description)
            .bind(record.performed_date)
            .bind(record.next_due_date)
            .bind(record.id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(accept))
    }

    pub async fn delete(&self, id: i32) -> Result<Option<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            WITH m AS (
                DELETE FROM public.maintenance
                WHERE id = $1
                RETURNING *
            )
            SELECT {RECORD_COLUMNS}
            FROM m LEFT JOIN public.assets a ON a.id = m.asset_id;
            "#
        );

        let row = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(accept))
    }

    pub async fn list_by_asset(&self, asset_id: i32) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM public.maintenance m
            INNER JOIN public.assets a ON a.id = m.asset_id
            WHERE m.asset_id = $1
            {HISTORY_ORDER}
            "#
        );

        let rows = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(asset_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(accept_all(rows))
    }

    /// Every record on assets owned by `user_id`, newest work first.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM public.maintenance m
            INNER JOIN public.assets a ON a.id = m.asset_id
            WHERE a.user_id = $1
            {HISTORY_ORDER}
            "#
        );

        let rows = sqlx::query_as::<_, MaintenanceRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(accept_all(rows))
    }
}

fn accept(row: MaintenanceRow) -> Option<MaintenanceRecord> {
    match MaintenanceRecord::try_from(row) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("Skipping maintenance row: {}", e);
            None
        }
    }
}

/// Converts rows, dropping any that cannot be attributed to an asset.
fn accept_all(rows: Vec<MaintenanceRow>) -> Vec<MaintenanceRecord> {
    rows.into_iter().filter_map(accept).collect()
}
