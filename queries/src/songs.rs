use async_trait::async_trait;
use entities::song::{Song, SongFilter, SongSummary};

use crate::{PgStore, StoreResult};

#[async_trait]
pub trait SongStore: Send + Sync {
    async fn insert_song(&self, song: &Song) -> StoreResult<()>;

    async fn get_songs(&self, filter: &SongFilter) -> StoreResult<Vec<SongSummary>>;

    async fn get_song_by_id(&self, song_id: &str) -> StoreResult<Option<Song>>;

    async fn get_songs_by_album_id(&self, album_id: &str) -> StoreResult<Vec<SongSummary>>;

    /// Overwrites every column of the song with the given id.
    async fn update_song(&self, song: &Song) -> StoreResult<bool>;

    async fn delete_song_by_id(&self, song_id: &str) -> StoreResult<bool>;
}

/// `%value%` with the LIKE metacharacters in `value` escaped, so the
/// filter is matched literally.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl SongStore for PgStore {
    async fn insert_song(&self, song: &Song) -> StoreResult<()> {
        sqlx::query(
            r#"
        insert into songs (id, title, year, genre, performer, duration, album_id)
        values ($1, $2, $3, $4, $5, $6, $7)
        "#,
        )
        .bind(&song.id)
        .bind(&song.title)
        .bind(song.year)
        .bind(&song.genre)
        .bind(&song.performer)
        .bind(song.duration)
        .bind(&song.album_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_songs(&self, filter: &SongFilter) -> StoreResult<Vec<SongSummary>> {
        let query = match (&filter.title, &filter.performer) {
            (Some(title), Some(performer)) => sqlx::query_as::<_, SongSummary>(
                "select id, title, performer from songs where title ilike $1 escape '\\' and performer ilike $2 escape '\\'",
            )
            .bind(like_pattern(title))
            .bind(like_pattern(performer)),
            (Some(title), None) => sqlx::query_as::<_, SongSummary>(
                "select id, title, performer from songs where title ilike $1 escape '\\'",
            )
            .bind(like_pattern(title)),
            (None, Some(performer)) => sqlx::query_as::<_, SongSummary>(
                "select id, title, performer from songs where performer ilike $1 escape '\\'",
            )
            .bind(like_pattern(performer)),
            (None, None) => {
                sqlx::query_as::<_, SongSummary>("select id, title, performer from songs")
            }
        };
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn get_song_by_id(&self, song_id: &str) -> StoreResult<Option<Song>> {
        let song = sqlx::query_as::<_, Song>("select * from songs where id = $1")
            .bind(song_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(song)
    }

    async fn get_songs_by_album_id(&self, album_id: &str) -> StoreResult<Vec<SongSummary>> {
        let songs = sqlx::query_as::<_, SongSummary>(
            "select id, title, performer from songs where album_id = $1",
        )
        .bind(album_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(songs)
    }

    async fn update_song(&self, song: &Song) -> StoreResult<bool> {
        let ret = sqlx::query(
            r#"
        update songs
        set title = $1, year = $2, genre = $3, performer = $4, duration = $5, album_id = $6
        where id = $7
        "#,
        )
        .bind(&song.title)
        .bind(song.year)
        .bind(&song.genre)
        .bind(&song.performer)
        .bind(song.duration)
        .bind(&song.album_id)
        .bind(&song.id)
        .execute(&self.pool)
        .await?;
        Ok(ret.rows_affected() > 0)
    }

    async fn delete_song_by_id(&self, song_id: &str) -> StoreResult<bool> {
        let ret = sqlx::query("delete from songs where id = $1")
            .bind(song_id)
            .execute(&self.pool)
            .await?;
        Ok(ret.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_metacharacters_are_literal() {
        assert_eq!(like_pattern("lov"), "%lov%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }
}
