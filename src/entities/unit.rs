//! SeaORM Entity for units of measure

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display string, e.g. "per kg"
    pub unit_display: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::item_price::Entity")]
    ItemPrice,
}

impl Related<super::item_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
