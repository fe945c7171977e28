//! Data access facade - One method per inventory operation.
//!
//! Each operation normalizes its input, stamps timestamps, and performs a
//! single repository call. Backend errors propagate unchanged, except for
//! login, which always reports `AppError::Authentication`.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::{
    normalize_email, Deleted, Employee, EmployeeChanges, HistoryChanges, HistoryFilter,
    HistoryRecord, Item, ItemChanges, NewEmployee, NewHistoryRecord, NewItem, NewTask, PinHasher,
    Setting, Task, TaskChanges, LOW_STOCK_THRESHOLD_KEY,
};

use super::task_id::TaskIdGenerator;
use crate::repository::{
    EmployeePatch, EmployeeRepository, EmployeeStore, HistoryRepository, HistoryStore,
    ItemRepository, ItemStore, SettingRepository, SettingStore, TaskRepository, TaskStore,
};

/// Inventory data access trait for dependency injection.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Authenticate an employee by email and PIN
    async fn login(&self, email: &str, password: &str) -> AppResult<Employee>;

    async fn get_items(&self) -> AppResult<Vec<Item>>;

    /// Items whose name contains `query`, ignoring case
    async fn search_items(&self, query: &str) -> AppResult<Vec<Item>>;

    async fn add_item(&self, item: NewItem) -> AppResult<Item>;

    async fn update_item(&self, id: i32, changes: ItemChanges) -> AppResult<Item>;

    async fn delete_item(&self, id: i32) -> AppResult<Deleted>;

    async fn get_employees(&self) -> AppResult<Vec<Employee>>;

    /// Create an employee, storing only the digest of the PIN
    async fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// Update an employee; the PIN digest is replaced only when a PIN is given
    async fn update_employee(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee>;

    async fn delete_employee(&self, id: i32) -> AppResult<Deleted>;

    async fn get_history(&self, filter: HistoryFilter) -> AppResult<Vec<HistoryRecord>>;

    async fn add_history(&self, record: NewHistoryRecord) -> AppResult<HistoryRecord>;

    async fn update_history(&self, id: i32, changes: HistoryChanges) -> AppResult<HistoryRecord>;

    async fn delete_history(&self, id: i32) -> AppResult<Deleted>;

    /// Create a task under a freshly generated `TASK<millis>` id
    async fn add_task(&self, task: NewTask) -> AppResult<Task>;

    async fn get_tasks(&self, employee_id: i32) -> AppResult<Vec<Task>>;

    async fn update_task(&self, task_id: &str, changes: TaskChanges) -> AppResult<Task>;

    async fn delete_task(&self, task_id: &str) -> AppResult<Deleted>;

    async fn update_low_stock_threshold(&self, threshold: i64) -> AppResult<Setting>;

    /// Current threshold, or `None` when it has never been configured
    async fn get_low_stock_threshold(&self) -> AppResult<Option<Setting>>;
}

/// Concrete implementation of InventoryService over the table repositories.
pub struct DataAccess {
    items: Arc<dyn ItemRepository>,
    employees: Arc<dyn EmployeeRepository>,
    history: Arc<dyn HistoryRepository>,
    tasks: Arc<dyn TaskRepository>,
    settings: Arc<dyn SettingRepository>,
    task_ids: TaskIdGenerator,
}

impl DataAccess {
    /// Create the facade from explicit repositories
    pub fn new(
        items: Arc<dyn ItemRepository>,
        employees: Arc<dyn EmployeeRepository>,
        history: Arc<dyn HistoryRepository>,
        tasks: Arc<dyn TaskRepository>,
        settings: Arc<dyn SettingRepository>,
    ) -> Self {
        Self {
            items,
            employees,
            history,
            tasks,
            settings,
            task_ids: TaskIdGenerator::new(),
        }
    }

    /// Create the facade backed by one database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        Self::new(
            Arc::new(ItemStore::new(db.clone())),
            Arc::new(EmployeeStore::new(db.clone())),
            Arc::new(HistoryStore::new(db.clone())),
            Arc::new(TaskStore::new(db.clone())),
            Arc::new(SettingStore::new(db)),
        )
    }
}

#[async_trait]
impl InventoryService for DataAccess {
    async fn login(&self, email: &str, password: &str) -> AppResult<Employee> {
        let email = normalize_email(email);
        let pin_hash = PinHasher::hash(password);

        let mut matches = match self.employees.find_by_credentials(&email, &pin_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                debug!(error = %e, %email, "login lookup failed");
                warn!("login failed");
                return Err(AppError::Authentication);
            }
        };

        if matches.len() != 1 {
            debug!(%email, found = matches.len(), "no unique credential match");
            warn!("login failed");
            return Err(AppError::Authentication);
        }

        let employee = matches.remove(0);
        info!(employee_id = employee.id, "employee logged in");
        Ok(employee)
    }

    async fn get_items(&self) -> AppResult<Vec<Item>> {
        self.items.list().await
    }

    async fn search_items(&self, query: &str) -> AppResult<Vec<Item>> {
        debug!(query, "searching items");
        self.items.search_by_name(query).await
    }

    async fn add_item(&self, item: NewItem) -> AppResult<Item> {
        let item = self.items.insert(item, Utc::now()).await?;
        debug!(item_id = item.id, "item added");
        Ok(item)
    }

    async fn update_item(&self, id: i32, changes: ItemChanges) -> AppResult<Item> {
        self.items.update(id, changes, Utc::now()).await
    }

    async fn delete_item(&self, id: i32) -> AppResult<Deleted> {
        self.items.delete(id).await?;
        debug!(item_id = id, "item deleted");
        Ok(Deleted::OK)
    }

    async fn get_employees(&self) -> AppResult<Vec<Employee>> {
        self.employees.list().await
    }

    async fn add_employee(&self, employee: NewEmployee) -> AppResult<Employee> {
        let pin_hash = PinHasher::hash(&employee.pin);
        let employee = self
            .employees
            .create(
                employee.name,
                normalize_email(&employee.email),
                employee.role,
                pin_hash,
                Utc::now(),
            )
            .await?;

        info!(employee_id = employee.id, "employee added");
        Ok(employee)
    }

    async fn update_employee(&self, id: i32, changes: EmployeeChanges) -> AppResult<Employee> {
        let pin_changed = changes.pin.is_some();
        let patch = EmployeePatch {
            name: changes.name,
            email: changes.email.as_deref().map(normalize_email),
            role: changes.role,
            pin_hash: changes.pin.as_deref().map(PinHasher::hash),
        };

        let employee = self.employees.update(id, patch, Utc::now()).await?;
        if pin_changed {
            info!(employee_id = id, "employee PIN changed");
        }
        Ok(employee)
    }

    async fn delete_employee(&self, id: i32) -> AppResult<Deleted> {
        self.employees.delete(id).await?;
        info!(employee_id = id, "employee deleted");
        Ok(Deleted::OK)
    }

    async fn get_history(&self, filter: HistoryFilter) -> AppResult<Vec<HistoryRecord>> {
        self.history.list(filter).await
    }

    async fn add_history(&self, record: NewHistoryRecord) -> AppResult<HistoryRecord> {
        self.history.insert(record, Utc::now()).await
    }

    async fn update_history(&self, id: i32, changes: HistoryChanges) -> AppResult<HistoryRecord> {
        self.history.update(id, changes, Utc::now()).await
    }

    async fn delete_history(&self, id: i32) -> AppResult<Deleted> {
        self.history.delete(id).await?;
        Ok(Deleted::OK)
    }

    async fn add_task(&self, task: NewTask) -> AppResult<Task> {
        let now = Utc::now();
        let task_id = self.task_ids.next_id(now.timestamp_millis());
        let task = self.tasks.insert(task_id, task, now).await?;
        debug!(task_id = %task.task_id, employee_id = task.employee_id, "task added");
        Ok(task)
    }

    async fn get_tasks(&self, employee_id: i32) -> AppResult<Vec<Task>> {
        self.tasks.list_for_employee(employee_id).await
    }

    async fn update_task(&self, task_id: &str, changes: TaskChanges) -> AppResult<Task> {
        self.tasks.update(task_id, changes, Utc::now()).await
    }

    async fn delete_task(&self, task_id: &str) -> AppResult<Deleted> {
        self.tasks.delete(task_id).await?;
        Ok(Deleted::OK)
    }

    async fn update_low_stock_threshold(&self, threshold: i64) -> AppResult<Setting> {
        if threshold < 0 {
            return Err(AppError::validation("Low stock threshold must not be negative"));
        }

        let setting = self
            .settings
            .upsert(LOW_STOCK_THRESHOLD_KEY, threshold, Utc::now())
            .await?;
        info!(threshold, "low stock threshold updated");
        Ok(setting)
    }

    async fn get_low_stock_threshold(&self) -> AppResult<Option<Setting>> {
        self.settings.find(LOW_STOCK_THRESHOLD_KEY).await
    }
}
