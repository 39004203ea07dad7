use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"CREATE TABLE users
(
    id varchar(50) not null primary key,
    username varchar(50) not null unique,
    password text not null,
    fullname text not null
);

CREATE TABLE authentications
(
    token text not null
);"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"DROP TABLE authentications;
DROP TABLE users;"#,
        )
        .await?;
        Ok(())
    }
}
