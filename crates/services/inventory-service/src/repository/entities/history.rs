//! History database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::HistoryRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub action: String,
    pub quantity_change: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HistoryRecord {
    fn from(model: Model) -> Self {
        HistoryRecord {
            id: model.id,
            item_id: model.item_id,
            employee_id: model.employee_id,
            action: model.action,
            quantity_change: model.quantity_change,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
