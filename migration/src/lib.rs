pub use sea_orm_migration::prelude::*;

mod m20230901_000001_create_catalog_tables;
mod m20230902_000001_create_users_tables;
mod m20230903_000001_create_playlists_tables;
mod m20230905_000001_create_collaborations_table;
mod m20230906_000001_create_playlists_activities_table;
mod m20230910_000001_create_albums_users_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230901_000001_create_catalog_tables::Migration),
            Box::new(m20230902_000001_create_users_tables::Migration),
            Box::new(m20230903_000001_create_playlists_tables::Migration),
            Box::new(m20230905_000001_create_collaborations_table::Migration),
            Box::new(m20230906_000001_create_playlists_activities_table::Migration),
            Box::new(m20230910_000001_create_albums_users_table::Migration),
        ]
    }
}
