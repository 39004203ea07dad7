use async_trait::async_trait;
use entities::activity::{ActivityEntry, PlaylistActivity};

use crate::{PgStore, StoreResult};

/// Append-only log of playlist membership changes.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn insert_activity(&self, activity: &PlaylistActivity) -> StoreResult<()>;

    /// Oldest first, joined against the current usernames and song titles.
    async fn get_activities_by_playlist_id(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Vec<ActivityEntry>>;
}

#[async_trait]
impl ActivityStore for PgStore {
    async fn insert_activity(&self, activity: &PlaylistActivity) -> StoreResult<()> {
        sqlx::query(
            r#"
        insert into playlists_activities (id, playlist_id, song_id, user_id, action, time)
        values ($1, $2, $3, $4, $5, $6)
        "#,
        )
        .bind(&activity.id)
        .bind(&activity.playlist_id)
        .bind(&activity.song_id)
        .bind(&activity.user_id)
        .bind(activity.action.as_str())
        .bind(activity.time)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_activities_by_playlist_id(
        &self,
        playlist_id: &str,
    ) -> StoreResult<Vec<ActivityEntry>> {
        let activities = sqlx::query_as::<_, ActivityEntry>(
            r#"select users.username, songs.title, playlists_activities.action, playlists_activities.time
        from playlists_activities
        left join users on users.id = playlists_activities.user_id
        left join songs on songs.id = playlists_activities.song_id
        where playlists_activities.playlist_id = $1
        order by playlists_activities.time"#,
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }
}
