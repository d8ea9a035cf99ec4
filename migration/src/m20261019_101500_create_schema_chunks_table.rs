use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchemaChunks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchemaChunks::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(SchemaChunks::ChunkId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SchemaChunks::SchemaName).string().not_null())
                    .col(ColumnDef::new(SchemaChunks::TableName).string().not_null())
                    .col(ColumnDef::new(SchemaChunks::Content).text().not_null())
                    .col(ColumnDef::new(SchemaChunks::Embedding).text().not_null())
                    .col(
                        ColumnDef::new(SchemaChunks::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schema_chunks_schema_name")
                    .table(SchemaChunks::Table)
                    .col(SchemaChunks::SchemaName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchemaChunks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SchemaChunks {
    Table,
    Id,
    ChunkId,
    SchemaName,
    TableName,
    Content,
    Embedding,
    CreatedAt,
}
