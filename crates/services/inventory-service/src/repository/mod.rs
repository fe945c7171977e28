//! Repository layer for data access.
//!
//! Every repository method is exactly one round trip to the backend store.

pub mod entities;
mod employee_repository;
mod history_repository;
mod item_repository;
mod setting_repository;
mod task_repository;

use sea_orm::ActiveValue::{self, NotSet, Set};

pub use employee_repository::{EmployeePatch, EmployeeRepository, EmployeeStore};
pub use history_repository::{HistoryRepository, HistoryStore};
pub use item_repository::{ItemRepository, ItemStore};
pub use setting_repository::{SettingRepository, SettingStore};
pub use task_repository::{TaskRepository, TaskStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use history_repository::MockHistoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use item_repository::MockItemRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use setting_repository::MockSettingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use task_repository::MockTaskRepository;

/// Turn an optional field of a partial update into an active value.
fn changed<V: Into<sea_orm::Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(value) => Set(value),
        None => NotSet,
    }
}
