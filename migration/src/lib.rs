pub use sea_orm_migration::prelude::*;

mod m20260820_000001_create_items;
mod m20260820_000002_create_units;
mod m20260820_000003_create_item_prices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_000001_create_items::Migration),
            Box::new(m20260820_000002_create_units::Migration),
            Box::new(m20260820_000003_create_item_prices::Migration),
        ]
    }
}
