use std::sync::Arc;

use queries::Store;

use crate::cache::CacheStore;
use crate::producer::MessageProducer;
use crate::services::{
    ActivitiesService, AlbumsService, AuthenticationsService, CollaborationsService,
    PlaylistsService, SongsService, UsersService,
};
use crate::storage::StorageService;
use crate::token_manager::TokenManager;

/// Shared by every handler. Cloning is cheap: services hold `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub users: UsersService,
    pub authentications: AuthenticationsService,
    pub albums: AlbumsService,
    pub songs: SongsService,
    pub playlists: PlaylistsService,
    pub collaborations: CollaborationsService,
    pub activities: ActivitiesService,
    pub tokens: TokenManager,
    pub producer: Arc<dyn MessageProducer>,
    pub storage: StorageService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        cache: Arc<dyn CacheStore>,
        producer: Arc<dyn MessageProducer>,
        tokens: TokenManager,
        storage: StorageService,
        hash_cost: u32,
    ) -> Self {
        let users = UsersService::new(store.clone(), hash_cost);
        let collaborations = CollaborationsService::new(store.clone(), users.clone());
        AppState {
            authentications: AuthenticationsService::new(store.clone(), users.clone(), tokens.clone()),
            albums: AlbumsService::new(store.clone(), cache),
            songs: SongsService::new(store.clone()),
            playlists: PlaylistsService::new(store.clone(), collaborations.clone()),
            activities: ActivitiesService::new(store),
            users,
            collaborations,
            tokens,
            producer,
            storage,
        }
    }
}
