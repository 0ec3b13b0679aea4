use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemPrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItemPrices::ItemId).integer().not_null())
                    .col(ColumnDef::new(ItemPrices::Date).big_integer().not_null())
                    .col(ColumnDef::new(ItemPrices::Price).double().not_null())
                    .col(ColumnDef::new(ItemPrices::Availability).string().not_null())
                    .col(ColumnDef::new(ItemPrices::PricePerUnit).double().not_null())
                    .col(ColumnDef::new(ItemPrices::UnitId).integer().null())
                    .col(ColumnDef::new(ItemPrices::SalesRank).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_prices_item_id")
                            .from(ItemPrices::Table, ItemPrices::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_prices_unit_id")
                            .from(ItemPrices::Table, ItemPrices::UnitId)
                            .to(Units::Table, Units::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Series lookup per item
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_item_prices_item_id")
                    .table(ItemPrices::Table)
                    .col(ItemPrices::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemPrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ItemPrices {
    Table,
    Id,
    ItemId,
    Date,
    Price,
    Availability,
    PricePerUnit,
    UnitId,
    SalesRank,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
}

#[derive(Iden)]
enum Units {
    Table,
    Id,
}
