use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"CREATE TABLE playlists
(
    id varchar(50) not null primary key,
    name text not null,
    owner varchar(50) not null,
    CONSTRAINT fk_playlists_owner
        FOREIGN KEY (owner)
        REFERENCES users(id)
        ON DELETE CASCADE
);

CREATE TABLE playlists_songs
(
    id varchar(50) not null primary key,
    playlist_id varchar(50) not null,
    song_id varchar(50) not null,
    CONSTRAINT fk_playlists_songs_playlist
        FOREIGN KEY (playlist_id)
        REFERENCES playlists(id)
        ON DELETE CASCADE,
    CONSTRAINT fk_playlists_songs_song
        FOREIGN KEY (song_id)
        REFERENCES songs(id)
        ON DELETE CASCADE,
    CONSTRAINT unique_playlist_id_and_song_id
        UNIQUE (playlist_id, song_id)
);"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"DROP TABLE playlists_songs;
DROP TABLE playlists;"#,
        )
        .await?;
        Ok(())
    }
}
