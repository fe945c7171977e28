//! Domain layer - Inventory entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.

pub mod constants;
pub mod employee;
pub mod history;
pub mod item;
pub mod patch;
pub mod pin;
pub mod setting;
pub mod task;

pub use constants::*;
pub use employee::{Employee, EmployeeChanges, NewEmployee};
pub use history::{HistoryChanges, HistoryFilter, HistoryRecord, NewHistoryRecord};
pub use item::{Item, ItemChanges, NewItem};
pub use pin::PinHasher;
pub use setting::{Deleted, Setting};
pub use task::{NewTask, Task, TaskChanges};
