//! Data access integration tests against an in-memory SQLite database.

use std::time::Duration;

use chrono::Utc;

use common::AppError;
use domain::{
    EmployeeChanges, HistoryChanges, HistoryFilter, ItemChanges, NewEmployee, NewHistoryRecord,
    NewItem, NewTask, PinHasher, TaskChanges, LOW_STOCK_THRESHOLD_KEY,
};
use inventory_service_lib::{DataAccess, Database, InventoryService};

async fn setup() -> (DataAccess, Database) {
    let connection = sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    let db = Database::from_connection(connection);
    db.run_migrations().await.expect("apply migrations");

    (DataAccess::from_connection(db.get_connection()), db)
}

async fn tick() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}

fn history(item_id: Option<i32>, employee_id: Option<i32>, action: &str) -> NewHistoryRecord {
    NewHistoryRecord {
        item_id,
        employee_id,
        action: action.to_string(),
        ..Default::default()
    }
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_is_case_and_whitespace_insensitive() {
    let (service, _db) = setup().await;
    let created = service
        .add_employee(NewEmployee::new("Ada", "user@example.com", "1234"))
        .await
        .unwrap();

    let first = service.login("User@Example.com", "1234").await.unwrap();
    let second = service.login("user@example.com ", "1234").await.unwrap();

    assert_eq!(first.id, created.id);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_login_wrong_pin_fails() {
    let (service, _db) = setup().await;
    service
        .add_employee(NewEmployee::new("Ada", "user@example.com", "1234"))
        .await
        .unwrap();

    let result = service.login("user@example.com", "4321").await;
    assert!(matches!(result.unwrap_err(), AppError::Authentication));
}

#[tokio::test]
async fn test_login_unknown_email_fails() {
    let (service, _db) = setup().await;

    let result = service.login("nobody@example.com", "1234").await;
    assert!(matches!(result.unwrap_err(), AppError::Authentication));
}

#[tokio::test]
async fn test_login_ambiguous_match_fails() {
    let (service, _db) = setup().await;
    for name in ["Ada", "Grace"] {
        service
            .add_employee(NewEmployee::new(name, "shared@example.com", "1234"))
            .await
            .unwrap();
    }

    let result = service.login("shared@example.com", "1234").await;
    assert!(matches!(result.unwrap_err(), AppError::Authentication));
}

// =============================================================================
// Items
// =============================================================================

#[tokio::test]
async fn test_add_item_then_listed_first() {
    let (service, _db) = setup().await;
    service.add_item(NewItem::named("Older")).await.unwrap();
    tick().await;

    let before = Utc::now();
    let item = service.add_item(NewItem::named("Widget")).await.unwrap();

    assert_eq!(item.name, "Widget");
    assert!(item.created_at >= before);
    assert!(item.updated_at >= before);

    let items = service.get_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, item.id);
}

#[tokio::test]
async fn test_search_items_substring_case_insensitive() {
    let (service, _db) = setup().await;
    for name in ["Widget", "WIDGETRY", "Gadget"] {
        service.add_item(NewItem::named(name)).await.unwrap();
    }

    let mut names: Vec<String> = service
        .search_items("wid")
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    names.sort();

    assert_eq!(names, vec!["WIDGETRY".to_string(), "Widget".to_string()]);
}

#[tokio::test]
async fn test_search_items_non_ascii_same_case() {
    let (service, _db) = setup().await;
    for name in ["Café", "Cafeteria", "École"] {
        service.add_item(NewItem::named(name)).await.unwrap();
    }

    let found = service.search_items("é").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Café");

    // SQLite folds ASCII only, so "É" and "é" do not match each other here
    let ascii_folded = service.search_items("CAF").await.unwrap();
    assert_eq!(ascii_folded.len(), 2);
}

#[tokio::test]
async fn test_update_item_refreshes_updated_at() {
    let (service, _db) = setup().await;
    let item = service
        .add_item(NewItem {
            name: "Bolt".to_string(),
            quantity: 10,
            ..Default::default()
        })
        .await
        .unwrap();
    tick().await;

    let updated = service
        .update_item(
            item.id,
            ItemChanges {
                quantity: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.quantity, 4);
    assert_eq!(updated.name, "Bolt");
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);
}

#[tokio::test]
async fn test_update_missing_item_is_backend_error() {
    let (service, _db) = setup().await;

    let err = service
        .update_item(999, ItemChanges::default())
        .await
        .unwrap_err();
    assert!(err.is_backend());
}

#[tokio::test]
async fn test_delete_item() {
    let (service, _db) = setup().await;
    let item = service.add_item(NewItem::named("Nut")).await.unwrap();

    assert!(service.delete_item(item.id).await.unwrap().success);
    assert!(service.get_items().await.unwrap().is_empty());
    // No existence check
    assert!(service.delete_item(item.id).await.unwrap().success);
}

// =============================================================================
// Employees
// =============================================================================

#[tokio::test]
async fn test_employee_pin_stored_as_digest() {
    let (service, _db) = setup().await;
    let employee = service
        .add_employee(NewEmployee::new("Ada", " Ada@Example.com ", "2468"))
        .await
        .unwrap();

    assert_eq!(employee.email, "ada@example.com");
    assert_eq!(employee.pin_hash, PinHasher::hash("2468"));
    assert_eq!(employee.created_at, employee.updated_at);
}

#[tokio::test]
async fn test_update_employee_pin_handling() {
    let (service, _db) = setup().await;
    let employee = service
        .add_employee(NewEmployee::new("Ada", "ada@example.com", "1111"))
        .await
        .unwrap();

    let renamed = service
        .update_employee(
            employee.id,
            EmployeeChanges {
                name: Some("Ada L.".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Ada L.");
    assert_eq!(renamed.pin_hash, employee.pin_hash);

    service
        .update_employee(
            employee.id,
            EmployeeChanges {
                pin: Some("2222".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(service.login("ada@example.com", "1111").await.is_err());
    assert_eq!(
        service.login("ada@example.com", "2222").await.unwrap().id,
        employee.id
    );
}

#[tokio::test]
async fn test_get_and_delete_employees() {
    let (service, _db) = setup().await;
    let first = service
        .add_employee(NewEmployee::new("Ada", "ada@example.com", "1"))
        .await
        .unwrap();
    tick().await;
    let second = service
        .add_employee(NewEmployee::new("Grace", "grace@example.com", "2"))
        .await
        .unwrap();

    let ids: Vec<i32> = service
        .get_employees()
        .await
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);

    service.delete_employee(first.id).await.unwrap();
    assert_eq!(service.get_employees().await.unwrap().len(), 1);
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn test_history_filters_combine() {
    let (service, _db) = setup().await;
    service.add_history(history(Some(1), Some(10), "restock")).await.unwrap();
    tick().await;
    service.add_history(history(Some(1), Some(20), "sale")).await.unwrap();
    tick().await;
    service.add_history(history(Some(2), Some(10), "sale")).await.unwrap();

    let all = service.get_history(HistoryFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].item_id, Some(2));

    assert_eq!(service.get_history(HistoryFilter::for_item(1)).await.unwrap().len(), 2);
    assert_eq!(service.get_history(HistoryFilter::for_employee(10)).await.unwrap().len(), 2);

    let both = service
        .get_history(HistoryFilter {
            item_id: Some(1),
            employee_id: Some(10),
        })
        .await
        .unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].action, "restock");
}

#[tokio::test]
async fn test_update_and_delete_history() {
    let (service, _db) = setup().await;
    let record = service.add_history(history(Some(1), None, "count")).await.unwrap();
    assert!(record.updated_at.is_none());

    let updated = service
        .update_history(
            record.id,
            HistoryChanges {
                notes: Some(Some("recounted".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.notes.as_deref(), Some("recounted"));
    assert!(updated.updated_at.is_some());

    assert!(service.delete_history(record.id).await.unwrap().success);
    assert!(service
        .get_history(HistoryFilter::default())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_update_history_reassigns_links_and_clears_notes() {
    let (service, _db) = setup().await;
    let record = service
        .add_history(NewHistoryRecord {
            item_id: Some(1),
            employee_id: Some(10),
            action: "sale".to_string(),
            quantity_change: Some(-2),
            notes: Some("till 3".to_string()),
        })
        .await
        .unwrap();

    let updated = service
        .update_history(
            record.id,
            HistoryChanges {
                item_id: Some(Some(2)),
                employee_id: Some(None),
                notes: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.item_id, Some(2));
    assert_eq!(updated.employee_id, None);
    assert_eq!(updated.notes, None);
    assert_eq!(updated.quantity_change, Some(-2));
    assert_eq!(updated.action, "sale");

    assert!(service.get_history(HistoryFilter::for_item(1)).await.unwrap().is_empty());
    assert_eq!(service.get_history(HistoryFilter::for_item(2)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_item_clears_nullable_fields() {
    let (service, _db) = setup().await;
    let item = service
        .add_item(NewItem {
            name: "Hinge".to_string(),
            category: Some("hardware".to_string()),
            quantity: 3,
            location: Some("B2".to_string()),
        })
        .await
        .unwrap();

    let updated = service
        .update_item(
            item.id,
            ItemChanges {
                category: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.category, None);
    assert_eq!(updated.location.as_deref(), Some("B2"));
}

// =============================================================================
// Tasks
// =============================================================================

#[tokio::test]
async fn test_task_lifecycle() {
    let (service, _db) = setup().await;
    let task = service.add_task(NewTask::new(5, "Count aisle 3")).await.unwrap();

    assert!(task.task_id.starts_with("TASK"));
    assert!(task.updated_at.is_none());

    let updated = service
        .update_task(
            &task.task_id,
            TaskChanges {
                status: Some("done".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "done");
    assert!(updated.updated_at.is_some());

    let tasks = service.get_tasks(5).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(service.get_tasks(6).await.unwrap().is_empty());

    assert!(service.delete_task(&task.task_id).await.unwrap().success);
    assert!(service.get_tasks(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_back_to_back_tasks_get_distinct_ids() {
    let (service, _db) = setup().await;
    let first = service.add_task(NewTask::new(1, "a")).await.unwrap();
    let second = service.add_task(NewTask::new(1, "b")).await.unwrap();

    assert_ne!(first.task_id, second.task_id);
    assert_eq!(service.get_tasks(1).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_nonexistent_task_succeeds() {
    let (service, _db) = setup().await;

    let result = service.delete_task("TASK123").await.unwrap();
    assert!(result.success);
}

// =============================================================================
// Settings
// =============================================================================

#[tokio::test]
async fn test_low_stock_threshold_upsert() {
    let (service, db) = setup().await;
    assert!(service.get_low_stock_threshold().await.unwrap().is_none());

    let first = service.update_low_stock_threshold(5).await.unwrap();
    assert_eq!(first.setting_key, LOW_STOCK_THRESHOLD_KEY);
    assert_eq!(first.setting_value, 5);
    assert_eq!(
        service.get_low_stock_threshold().await.unwrap().unwrap().setting_value,
        5
    );

    service.update_low_stock_threshold(9).await.unwrap();
    let current = service.get_low_stock_threshold().await.unwrap().unwrap();
    assert_eq!(current.setting_value, 9);

    use inventory_service_lib::repository::entities::setting;
    use sea_orm::{EntityTrait, PaginatorTrait};
    let rows = setting::Entity::find().count(db.connection()).await.unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_migration_status_all_applied() {
    let (_service, db) = setup().await;

    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 5);
    assert!(status.iter().all(|(_, applied)| *applied));
}
