use crate::error::AppError;
use crate::model::{MaintenancePatch, MaintenanceRecord, NewMaintenance, PendingMaintenanceEntry};
use crate::pending::compute_pending_maintenance;
use crate::repository::{AssetRepository, MaintenanceRepository};
use crate::service::asset_service::ensure_owner;
use crate::service::MAX_LABEL_CHARS;
use crate::urgency::local_today;

#[derive(Clone)]
pub struct MaintenanceService {
    repo: MaintenanceRepository,
    assets: AssetRepository,
}

impl MaintenanceService {
    pub fn new(repo: MaintenanceRepository, assets: AssetRepository) -> Self {
        Self { repo, assets }
    }

    async fn ensure_asset_owner(&self, asset_id: i32, user_id: i32) -> Result<(), AppError> {
        ensure_owner(self.assets.find_by_id(asset_id).await?, asset_id, user_id)?;
        Ok(())
    }

    /// Loads a record and checks that `user_id` owns its asset.
    async fn owned(&self, id: i32, user_id: i32) -> Result<MaintenanceRecord, AppError> {
        let record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance not found".to_string()))?;
        self.ensure_asset_owner(record.asset_id, user_id).await?;
        Ok(record)
    }

    pub async fn create(
        &self,
        user_id: i32,
        mut maintenance: NewMaintenance,
    ) -> Result<MaintenanceRecord, AppError> {
        maintenance.service_description =
            normalize_service_description(&maintenance.service_description)?;
        self.ensure_asset_owner(maintenance.asset_id, user_id).await?;

        let record = self
            .repo
            .create(&maintenance)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;
        log::info!(
            "User {} logged maintenance {} on asset {}",
            user_id,
            record.id,
            record.asset_id
        );
        Ok(record)
    }

    pub async fn history(&self, user_id: i32) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    pub async fn asset_history(
        &self,
        asset_id: i32,
        user_id: i32,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.ensure_asset_owner(asset_id, user_id).await?;
        Ok(self.repo.list_by_asset(asset_id).await?)
    }

    pub async fn pending(&self, user_id: i32) -> Result<Vec<PendingMaintenanceEntry>, AppError> {
        let records = self.repo.list_by_user(user_id).await?;
        let pending = compute_pending_maintenance(&records, local_today());
        log::debug!(
            "User {}: {} pending out of {} records",
            user_id,
            pending.len(),
            records.len()
        );
        Ok(pending)
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        patch: MaintenancePatch,
    ) -> Result<MaintenanceRecord, AppError> {
        let existing = self.owned(id, user_id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }

        let mut merged = patch.apply(existing);
        merged.service_description = normalize_service_description(&merged.service_description)?;

        let updated = self
            .repo
            .update(&merged)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance not found".to_string()))?;
        log::info!("User {} updated maintenance {}", user_id, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<MaintenanceRecord, AppError> {
        self.owned(id, user_id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Maintenance not found".to_string()))?;
        log::info!("User {} deleted maintenance {}", user_id, id);
        Ok(deleted)
    }
}

fn normalize_service_description(description: &str) -> Result<String, AppError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AppError::Validation(
            "Service description is required".to_string(),
        ));
    }
    if description.chars().count() > MAX_LABEL_CHARS {
        return Err(AppError::Validation(format!(
            "Service description must be at most {MAX_LABEL_CHARS} characters"
        )));
    }
    Ok(description.to_string())
}
