use crate::error::AppError;
use crate::model::{Asset, AssetPatch, NewAsset};
use crate::repository::AssetRepository;
use crate::service::MAX_LABEL_CHARS;

#[derive(Clone)]
pub struct AssetService {
    repo: AssetRepository,
}

impl AssetService {
    pub fn new(repo: AssetRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, user_id: i32, mut asset: NewAsset) -> Result<Asset, AppError> {
        asset.name = normalize_name(&asset.name)?;
        let asset = self.repo.create(user_id, &asset).await?;
        log::info!("User {} created asset {}", user_id, asset.id);
        Ok(asset)
    }

    pub async fn list(&self, user_id: i32) -> Result<Vec<Asset>, AppError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    /// Loads an asset and checks that `user_id` owns it.
    pub async fn owned(&self, id: i32, user_id: i32) -> Result<Asset, AppError> {
        ensure_owner(self.repo.find_by_id(id).await?, id, user_id)
    }

    pub async fn update(&self, id: i32, user_id: i32, patch: AssetPatch) -> Result<Asset, AppError> {
        let existing = self.owned(id, user_id).await?;
        if patch.is_empty() {
            return Err(AppError::Validation("No data provided for update".to_string()));
        }

        let mut merged = patch.apply(existing);
        merged.name = normalize_name(&merged.name)?;

        let updated = self
            .repo
            .update(&merged)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;
        log::info!("User {} updated asset {}", user_id, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Asset, AppError> {
        self.owned(id, user_id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;
        log::info!("User {} deleted asset {}", user_id, id);
        Ok(deleted)
    }
}

/// Trims `name` and checks it fits the column.
fn normalize_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Asset name is required".to_string()));
    }
    if name.chars().count() > MAX_LABEL_CHARS {
        return Err(AppError::Validation(format!(
            "Asset name must be at most {MAX_LABEL_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

pub(crate) fn ensure_owner(asset: Option<Asset>, id: i32, user_id: i32) -> Result<Asset, AppError> {
    let asset = asset.ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;
    if asset.user_id != user_id {
        log::warn!(
            "User {} denied access to asset {} owned by {}",
            user_id,
            id,
            asset.user_id
        );
        return Err(AppError::Forbidden("Not allowed to access this asset".to_string()));
    }
    Ok(asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn asset(user_id: i32) -> Asset {
        Asset {
            id: 5,
            user_id,
            name: "Generator".to_string(),
            description: None,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn owner_gets_asset() {
        assert_eq!(ensure_owner(Some(asset(1)), 5, 1).unwrap(), asset(1));
    }

    #[test]
    fn other_user_is_forbidden() {
        assert!(matches!(
            ensure_owner(Some(asset(1)), 5, 2),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn missing_asset_is_not_found() {
        assert!(matches!(ensure_owner(None, 5, 1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(normalize_name("  ").is_err());
        assert!(normalize_name("").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(normalize_name(" Car ").unwrap(), "Car");
    }

    #[test]
    fn names_longer_than_the_column_are_rejected() {
        let fits = "a".repeat(MAX_LABEL_CHARS);
        assert_eq!(normalize_name(&fits).unwrap(), fits);

        let too_long = "é".repeat(MAX_LABEL_CHARS + 1);
        assert!(matches!(
            normalize_name(&too_long),
            Err(AppError::Validation(_))
        ));
    }
}
