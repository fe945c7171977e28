//! Employee repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use super::changed;
use common::{AppError, AppResult};
use domain::Employee;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Column changes for an employee row. The PIN is already hashed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub pin_hash: Option<String>,
}

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employees matching both the email and the PIN digest.
    ///
    /// At most two rows are fetched, enough to detect an ambiguous match.
    async fn find_by_credentials(&self, email: &str, pin_hash: &str) -> AppResult<Vec<Employee>>;

    /// List all employees, newest first
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(
        &self,
        name: String,
        email: String,
        role: String,
        pin_hash: String,
        now: DateTime<Utc>,
    ) -> AppResult<Employee>;

    /// Update employee columns and set `updated_at`
    async fn update(&self, id: i32, patch: EmployeePatch, now: DateTime<Utc>) -> AppResult<Employee>;

    /// Delete by ID, whether or not the row exists
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_credentials(&self, email: &str, pin_hash: &str) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .filter(employee::Column::PinHash.eq(pin_hash))
            .limit(2)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_desc(employee::Column::CreatedAt)
            .order_by_desc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(
        &self,
        name: String,
        email: String,
        role: String,
        pin_hash: String,
        now: DateTime<Utc>,
    ) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            role: Set(role),
            pin_hash: Set(pin_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn update(&self, id: i32, patch: EmployeePatch, now: DateTime<Utc>) -> AppResult<Employee> {
        let active = ActiveModel {
            id: Unchanged(id),
            name: changed(patch.name),
            email: changed(patch.email),
            role: changed(patch.role),
            pin_hash: changed(patch.pin_hash),
            created_at: NotSet,
            updated_at: Set(now),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
