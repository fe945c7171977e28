//! Service layer - the data access facade.

mod data_access;
mod task_id;

pub use data_access::{DataAccess, InventoryService};
pub use task_id::TaskIdGenerator;
