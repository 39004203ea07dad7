use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // song_id and user_id carry no foreign key, rows outlive their song and user
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"CREATE TABLE playlists_activities
(
    id varchar(50) not null primary key,
    playlist_id varchar(50) not null,
    song_id varchar(50) not null,
    user_id varchar(50) not null,
    action text not null,
    time timestamptz not null,
    CONSTRAINT fk_playlists_activities_playlist
        FOREIGN KEY (playlist_id)
        REFERENCES playlists(id)
        ON DELETE CASCADE
);"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(r#"DROP TABLE playlists_activities;"#)
            .await?;
        Ok(())
    }
}
