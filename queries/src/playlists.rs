use async_trait::async_trait;
use entities::playlist::{Playlist, PlaylistSong, PlaylistSummary};
use entities::song::SongSummary;

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait PlaylistStore: Send + Sync {
    async fn insert_playlist(&self, playlist: &Playlist) -> StoreResult<()>;

    async fn get_playlist_by_id(&self, playlist_id: &str) -> StoreResult<Option<Playlist>>;

    async fn get_playlist_summary(&self, playlist_id: &str)
        -> StoreResult<Option<PlaylistSummary>>;

    /// Playlists owned by the user or shared with them through a collaboration.
    async fn get_playlists_for_user(&self, user_id: &str) -> StoreResult<Vec<PlaylistSummary>>;

    /// Removes songs, collaborations and activities of the playlist as well.
    async fn delete_playlist_by_id(&self, playlist_id: &str) -> StoreResult<bool>;

    async fn insert_playlist_song(&self, entry: &PlaylistSong) -> StoreResult<()>;

    async fn delete_playlist_song(&self, playlist_id: &str, song_id: &str) -> StoreResult<bool>;

    async fn get_songs_by_playlist_id(&self, playlist_id: &str) -> StoreResult<Vec<SongSummary>>;
}

#[async_trait]
impl PlaylistStore for PgStore {
    async fn insert_playlist(&self, playlist: &Playlist) -> StoreResult<()> {
        sqlx::query("insert into playlists (id, name, owner) values ($1, $2, $3)")
            .bind(&playlist.id)
            .bind(&playlist.name)
            .bind(&playlist.owner)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_playlist_by_id(&self, playlist_id: &str) -> StoreResult<Option<Playlist>> {
        let playlist = sqlx::query_as::<_, Playlist>("select * from playlists where id = $1")
            .bind(playlist_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(playlist)
    }

    async fn get_playlist_summary(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Option<PlaylistSummary>> {
        let playlist = sqlx::query_as::<_, PlaylistSummary>(
            r#"select playlists.id, playlists.name, users.username
        from playlists
        left join users on users.id = playlists.owner
        where playlists.id = $1"#,
        )
        .bind(playlist_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(playlist)
    }

    async fn get_playlists_for_user(&self, user_id: &str) -> StoreResult<Vec<PlaylistSummary>> {
        let playlists = sqlx::query_as::<_, PlaylistSummary>(
            r#"select playlists.id, playlists.name, users.username
        from playlists
        left join collaborations on collaborations.playlist_id = playlists.id
        left join users on users.id = playlists.owner
        where playlists.owner = $1 or collaborations.user_id = $1
        group by playlists.id, playlists.name, users.username"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(playlists)
    }

    async fn delete_playlist_by_id(&self, playlist_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from playlists where id = $1")
            .bind(playlist_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn insert_playlist_song(&self, entry: &PlaylistSong) -> StoreResult<()> {
        sqlx::query("insert into playlists_songs (id, playlist_id, song_id) values ($1, $2, $3)")
            .bind(&entry.id)
            .bind(&entry.playlist_id)
            .bind(&entry.song_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_playlist_song(&self, playlist_id: &str, song_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from playlists_songs where playlist_id = $1 and song_id = $2")
            .bind(playlist_id)
            .bind(song_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn get_songs_by_playlist_id(&self, playlist_id: &str) -> StoreResult<Vec<SongSummary>> {
        let songs = sqlx::query_as::<_, SongSummary>(
            r#"select songs.id, songs.title, songs.performer
        from playlists_songs
        inner join songs on songs.id = playlists_songs.song_id
        where playlists_songs.playlist_id = $1"#,
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }
}
