use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::StoreId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Items::Title).string().not_null())
                    .col(ColumnDef::new(Items::Category).string().null())
                    .col(ColumnDef::new(Items::ImageUrl).string().null())
                    .to_owned(),
            )
            .await?;

        // Category browsing filters on exact category values
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_category")
                    .table(Items::Table)
                    .col(Items::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    StoreId,
    Title,
    Category,
    ImageUrl,
}
