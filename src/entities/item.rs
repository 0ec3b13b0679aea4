//! SeaORM Entity for tracked store items
//!
//! One row per distinct product; populated by the external ingestion
//! pipeline, read-only from this service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier assigned by the store the item was scraped from
    #[sea_orm(unique)]
    pub store_id: String,
    /// Product title as listed by the store
    pub title: String,
    /// Store category, missing for uncategorized listings
    pub category: Option<String>,
    /// Product image URL
    pub image_url: Option<String>,
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
