use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"CREATE TABLE albums_users
(
    id varchar(50) not null primary key,
    album_id varchar(50) not null,
    user_id varchar(50) not null,
    CONSTRAINT fk_albums_users_album
        FOREIGN KEY (album_id)
        REFERENCES albums(id)
        ON DELETE CASCADE,
    CONSTRAINT fk_albums_users_user
        FOREIGN KEY (user_id)
        REFERENCES users(id)
        ON DELETE CASCADE,
    CONSTRAINT unique_album_id_and_user_id
        UNIQUE (album_id, user_id)
);"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(r#"DROP TABLE albums_users;"#)
            .await?;
        Ok(())
    }
}
