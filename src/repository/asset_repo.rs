use sqlx::PgPool;

use crate::model::{Asset, NewAsset};

const ASSET_COLUMNS: &str = r#"id, user_id, "name", description, created_at"#;

#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: i32, asset: &NewAsset) -> Result<Asset, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO public.assets
            (user_id, "name", description)
            VALUES($1, $2, $3)
            RETURNING {ASSET_COLUMNS};
            "#
        );

        sqlx::query_as::<_, Asset>(&query)
            .bind(user_id)
            .bind(&asset.name)
            .bind(&asset.description)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM public.assets WHERE id = $1");

        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM public.assets WHERE user_id = $1 ORDER BY id"
        );

        sqlx::query_as::<_, Asset>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Writes the mutable fields of `asset` back to its row.
    pub async fn update(&self, asset: &Asset) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE public.assets
            SET "name" = $1, description = $2
            WHERE id = $3
            RETURNING {ASSET_COLUMNS};
            "#
        );

        sqlx::query_as::<_, Asset>(&query)
            .bind(&asset.name)
            .bind(&asset.description)
            .bind(asset.id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            r#"
            DELETE FROM public.assets
            WHERE id = $1
            RETURNING {ASSET_COLUMNS};
            "#
        );

        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }
}
