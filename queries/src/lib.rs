use sqlx::{Pool, Postgres};

pub mod activities;
pub mod album_likes;
pub mod albums;
pub mod authentications;
pub mod collaborations;
pub mod error;
pub mod memory;
pub mod playlists;
pub mod songs;
pub mod users;

pub use activities::ActivityStore;
pub use album_likes::AlbumLikeStore;
pub use albums::AlbumStore;
pub use authentications::AuthenticationStore;
pub use collaborations::CollaborationStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use playlists::PlaylistStore;
pub use songs::SongStore;
pub use users::UserStore;

/// Everything the services need from the relational database.
pub trait Store:
    UserStore
    + AuthenticationStore
    + AlbumStore
    + SongStore
    + PlaylistStore
    + CollaborationStore
    + ActivityStore
    + AlbumLikeStore
    + Send
    + Sync
{
}

impl<T> Store for T where
    T: UserStore
        + AuthenticationStore
        + AlbumStore
        + SongStore
        + PlaylistStore
        + CollaborationStore
        + ActivityStore
        + AlbumLikeStore
        + Send
        + Sync
{
}

/// PostgreSQL backed store. Every query uses positional parameters and runs
/// outside of any transaction.
#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
