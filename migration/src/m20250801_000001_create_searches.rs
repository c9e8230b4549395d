use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create searches table
        manager
            .create_table(
                Table::create()
                    .table(Searches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Searches::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // The unique key is the ON CONFLICT target of the upsert
                    .col(
                        ColumnDef::new(Searches::Term)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Searches::Count)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Searches::MovieId).string().not_null())
                    .col(
                        ColumnDef::new(Searches::PosterUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Trending queries sort on count
        manager
            .create_index(
                Index::create()
                    .name("idx_searches_count")
                    .table(Searches::Table)
                    .col(Searches::Count)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Searches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Searches {
    Table,
    Id,
    Term,
    Count,
    MovieId,
    PosterUrl,
}
