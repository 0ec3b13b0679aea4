//! SeaORM Entity for per-date price observations
//!
//! Time series of price snapshots, many rows per item. Series order within
//! one item is the database-assigned insertion order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub item_id: i32,
    /// Observation time as epoch seconds
    pub date: i64,
    pub price: f64,
    /// Availability status string as reported by the store
    pub availability: String,
    pub price_per_unit: f64,
    /// Unit of measure behind price_per_unit, missing when the store
    /// listed no unit
    pub unit_id: Option<i32>,
    /// Store popularity ordinal, lower = more popular
    pub sales_rank: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item::Entity",
        from = "Column::ItemId",
        to = "super::item::Column::Id"
    )]
    Item,
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id"
    )]
    Unit,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Item.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
