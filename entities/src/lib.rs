pub mod activity;
pub mod album;
pub mod album_like;
pub mod collaboration;
pub mod playlist;
pub mod song;
pub mod user;
