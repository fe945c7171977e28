//! Item repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use super::entities::item::{self, ActiveModel, Entity as ItemEntity};
use super::changed;
use common::{AppError, AppResult};
use domain::{Item, ItemChanges, NewItem};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Item repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items, newest first
    async fn list(&self) -> AppResult<Vec<Item>>;

    /// Case-insensitive substring search on the item name, newest first.
    ///
    /// Case folding is done by the backend's `LOWER()`: Postgres folds
    /// Unicode, SQLite folds ASCII letters only.
    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Item>>;

    /// Insert a new item with both timestamps set to `now`
    async fn insert(&self, item: NewItem, now: DateTime<Utc>) -> AppResult<Item>;

    /// Apply the present fields of `changes` and set `updated_at`
    async fn update(&self, id: i32, changes: ItemChanges, now: DateTime<Utc>) -> AppResult<Item>;

    /// Delete by ID, whether or not the row exists
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ItemRepository
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for ItemStore {
    async fn list(&self) -> AppResult<Vec<Item>> {
        let models = ItemEntity::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn search_by_name(&self, query: &str) -> AppResult<Vec<Item>> {
        // LOWER() on both sides; non-ASCII folding depends on the backend
        let pattern = format!("%{}%", query.to_lowercase());
        let models = ItemEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(item::Column::Name))).like(pattern))
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn insert(&self, item: NewItem, now: DateTime<Utc>) -> AppResult<Item> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(item.name),
            category: Set(item.category),
            quantity: Set(item.quantity),
            location: Set(item.location),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Item::from(model))
    }

    async fn update(&self, id: i32, changes: ItemChanges, now: DateTime<Utc>) -> AppResult<Item> {
        let active = ActiveModel {
            id: Unchanged(id),
            name: changed(changes.name),
            category: changed(changes.category),
            quantity: changed(changes.quantity),
            location: changed(changes.location),
            created_at: NotSet,
            updated_at: Set(now),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Item::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        ItemEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
