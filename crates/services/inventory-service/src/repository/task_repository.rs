//! Task repository implementation.
//!
//! Tasks are keyed by their generated `task_id`, never by a database id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use super::changed;
use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use common::{AppError, AppResult};
use domain::{NewTask, Task, TaskChanges};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List one employee's tasks, newest first
    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Task>>;

    /// Insert a task under a pre-generated id
    async fn insert(&self, task_id: String, task: NewTask, now: DateTime<Utc>) -> AppResult<Task>;

    async fn update(&self, task_id: &str, changes: TaskChanges, now: DateTime<Utc>) -> AppResult<Task>;

    /// Delete by task id, whether or not the row exists
    async fn delete(&self, task_id: &str) -> AppResult<()>;
}

/// Concrete implementation of TaskRepository
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(task::Column::EmployeeId.eq(employee_id))
            .order_by_desc(task::Column::CreatedAt)
            .order_by_desc(task::Column::TaskId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, task_id: String, task: NewTask, now: DateTime<Utc>) -> AppResult<Task> {
        let active_model = ActiveModel {
            task_id: Set(task_id),
            employee_id: Set(task.employee_id),
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status),
            created_at: Set(now),
            updated_at: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Task::from(model))
    }

    async fn update(&self, task_id: &str, changes: TaskChanges, now: DateTime<Utc>) -> AppResult<Task> {
        let active = ActiveModel {
            task_id: Unchanged(task_id.to_owned()),
            employee_id: changed(changes.employee_id),
            title: changed(changes.title),
            description: changed(changes.description),
            status: changed(changes.status),
            created_at: NotSet,
            updated_at: Set(Some(now)),
        };

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Task::from(model))
    }

    async fn delete(&self, task_id: &str) -> AppResult<()> {
        TaskEntity::delete_by_id(task_id.to_owned())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
