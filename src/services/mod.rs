use rand::distributions::Alphanumeric;
use rand::Rng;

pub mod activities;
pub mod albums;
pub mod authentications;
pub mod collaborations;
pub mod playlists;
pub mod songs;
#[cfg(test)]
pub mod stale_store;
pub mod users;

pub use activities::ActivitiesService;
pub use albums::AlbumsService;
pub use authentications::AuthenticationsService;
pub use collaborations::CollaborationsService;
pub use playlists::PlaylistsService;
pub use songs::SongsService;
pub use users::UsersService;

const ID_LENGTH: usize = 16;

/// 16 random alphanumeric characters.
pub fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// `{prefix}-{random_id}`, e.g. `album-Qx3k...`.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, random_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_prefix_and_fixed_length() {
        let id = prefixed_id("song");
        let suffix = id.strip_prefix("song-").unwrap();
        assert_eq!(suffix.len(), ID_LENGTH);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(random_id(), random_id());
    }
}
