//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Hex digest of the PIN; the PIN itself is never stored
    pub pin_hash: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            pin_hash: model.pin_hash,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
