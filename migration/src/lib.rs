pub use sea_orm_migration::prelude::*;

mod m20261019_101500_create_schema_chunks_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(
            m20261019_101500_create_schema_chunks_table::Migration,
        )]
    }
}
