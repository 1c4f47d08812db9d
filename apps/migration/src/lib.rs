//! Schema migrations for the Quill blog database.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blog_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_blog_schema::Migration)]
    }
}
