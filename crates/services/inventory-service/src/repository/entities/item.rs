//! Item database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Item;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Item {
            id: model.id,
            name: model.name,
            category: model.category,
            quantity: model.quantity,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
