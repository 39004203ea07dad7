use std::sync::Arc;

use chrono::{DateTime, Utc};
use entities::activity::{ActivityAction, ActivityEntry, PlaylistActivity};
use queries::Store;

use crate::error::ApiResult;
use crate::services::prefixed_id;

/// Append-only history of song additions and removals per playlist.
#[derive(Clone)]
pub struct ActivitiesService {
    store: Arc<dyn Store>,
}

impl ActivitiesService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn record(
        &self,
        playlist_id: &str,
        song_id: &str,
        user_id: &str,
        action: ActivityAction,
        time: DateTime<Utc>,
    ) -> ApiResult<()> {
        let activity = PlaylistActivity {
            id: prefixed_id("activity"),
            playlist_id: playlist_id.to_string(),
            song_id: song_id.to_string(),
            user_id: user_id.to_string(),
            action,
            time,
        };
        self.store.insert_activity(&activity).await?;
        Ok(())
    }

    /// Entries oldest first. Usernames and titles reflect the current rows
    /// and are empty once the user or song is gone.
    pub async fn get_activities(&self, playlist_id: &str) -> ApiResult<Vec<ActivityEntry>> {
        Ok(self.store.get_activities_by_playlist_id(playlist_id).await?)
    }
}
