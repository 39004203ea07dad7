use std::sync::Arc;

use entities::collaboration::Collaboration;
use queries::{Store, StoreError};

use crate::error::{ApiResult, ClientError};
use crate::services::{prefixed_id, UsersService};

/// Grants and revokes playlist access for users other than the owner.
#[derive(Clone)]
pub struct CollaborationsService {
    store: Arc<dyn Store>,
    users: UsersService,
}

impl CollaborationsService {
    pub fn new(store: Arc<dyn Store>, users: UsersService) -> Self {
        Self { store, users }
    }

    pub async fn add_collaboration(&self, playlist_id: &str, user_id: &str) -> ApiResult<String> {
        self.users.get_user_by_id(user_id).await?;
        let collaboration = Collaboration {
            id: prefixed_id("collab"),
            playlist_id: playlist_id.to_string(),
            user_id: user_id.to_string(),
        };
        match self.store.insert_collaboration(&collaboration).await {
            Ok(()) => Ok(collaboration.id),
            Err(StoreError::UniqueViolation(_)) => Err(ClientError::Invariant(
                "User is already a collaborator of this playlist".to_string(),
            )
            .into()),
            Err(StoreError::ForeignKeyViolation(_)) => {
                Err(ClientError::NotFound("Playlist not found".to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn delete_collaboration(&self, playlist_id: &str, user_id: &str) -> ApiResult<()> {
        if !self.store.delete_collaboration(playlist_id, user_id).await? {
            return Err(ClientError::Invariant("Failed to delete collaboration".to_string()).into());
        }
        Ok(())
    }

    pub async fn collaboration_exists(&self, playlist_id: &str, user_id: &str) -> ApiResult<bool> {
        Ok(self.store.collaboration_exists(playlist_id, user_id).await?)
    }
}
