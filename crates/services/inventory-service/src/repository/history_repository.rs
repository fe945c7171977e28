//! History repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QueryTrait,
};

use super::changed;
use super::entities::history::{self, ActiveModel, Entity as HistoryEntity};
use common::{AppError, AppResult};
use domain::{HistoryChanges, HistoryFilter, HistoryRecord, NewHistoryRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// History repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// List records matching every field set in `filter`, newest first
    async fn list(&self, filter: HistoryFilter) -> AppResult<Vec<HistoryRecord>>;

    /// Append a record; `updated_at` stays empty
    async fn insert(&self, record: NewHistoryRecord, now: DateTime<Utc>) -> AppResult<HistoryRecord>;

    async fn update(
        &self,
        id: i32,
        changes: HistoryChanges,
        now: DateTime<Utc>,
    ) -> AppResult<HistoryRecord>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of HistoryRepository
pub struct HistoryStore {
    db: DatabaseConnection,
}

impl HistoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryRepository for HistoryStore {
    async fn list(&self, filter: HistoryFilter) -> AppResult<Vec<HistoryRecord>> {
        let models = HistoryEntity::find()
            .apply_if(filter.item_id, |query, item_id| {
                query.filter(history::Column::ItemId.eq(item_id))
            })
            .apply_if(filter.employee_id, |query, employee_id| {
                query.filter(history::Column::EmployeeId.eq(employee_id))
            })
            .order_by_desc(history::Column::CreatedAt)
            .order_by_desc(history::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(HistoryRecord::from).collect())
    }

    async fn insert(&self, record: NewHistoryRecord, now: DateTime<Utc>) -> AppResult<HistoryRecord> {
        let active_model = ActiveModel {
            id: NotSet,
            item_id: Set(record.item_id),
            employee_id: Set(record.employee_id),
            action: Set(record.action),
            quantity_change: Set(record.quantity_change),
            notes: Set(record.notes),
            created_at: Set(now),
            updated_at: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(HistoryRecord::from(model))
    }

    async fn update(
        &self,
        id: i32,
        changes: HistoryChanges,
        now: DateTime<Utc>,
    ) -> AppResult<HistoryRecord> {
        let active = ActiveModel {
            id: Unchanged(id),
            item_id: changed(changes.item_id),
            employee_id: changed(changes.employee_id),
            action: changed(changes.action),
            quantity_change: changed(changes.quantity_change),
            notes: changed(changes.notes),
            created_at: NotSet,
            updated_at: Set(Some(now)),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(HistoryRecord::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        HistoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
