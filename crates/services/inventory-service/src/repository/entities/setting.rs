//! Setting database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Setting;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub setting_key: String,
    pub setting_value: i64,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Setting {
    fn from(model: Model) -> Self {
        Setting {
            setting_key: model.setting_key,
            setting_value: model.setting_value,
            updated_at: model.updated_at,
        }
    }
}
