//! SeaORM entities, one per backend table.

pub mod employee;
pub mod history;
pub mod item;
pub mod setting;
pub mod task;
