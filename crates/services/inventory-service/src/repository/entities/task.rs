//! Task database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Task;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    /// Generated identifier, see `TaskIdGenerator`
    #[sea_orm(primary_key, auto_increment = false)]
    pub task_id: String,
    pub employee_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Task {
            task_id: model.task_id,
            employee_id: model.employee_id,
            title: model.title,
            description: model.description,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
