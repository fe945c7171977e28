//! Settings repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::setting::{self, ActiveModel, Entity as SettingEntity};
use common::{AppError, AppResult};
use domain::Setting;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Settings repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Look up a setting by key
    async fn find(&self, key: &str) -> AppResult<Option<Setting>>;

    /// Insert or replace the value stored under `key`
    async fn upsert(&self, key: &str, value: i64, now: DateTime<Utc>) -> AppResult<Setting>;
}

/// Concrete implementation of SettingRepository
pub struct SettingStore {
    db: DatabaseConnection,
}

impl SettingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingRepository for SettingStore {
    async fn find(&self, key: &str) -> AppResult<Option<Setting>> {
        let result = SettingEntity::find_by_id(key.to_owned())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Setting::from))
    }

    async fn upsert(&self, key: &str, value: i64, now: DateTime<Utc>) -> AppResult<Setting> {
        let active_model = ActiveModel {
            setting_key: Set(key.to_owned()),
            setting_value: Set(value),
            updated_at: Set(now),
        };

        let model = SettingEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(setting::Column::SettingKey)
                    .update_columns([setting::Column::SettingValue, setting::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Setting::from(model))
    }
}
