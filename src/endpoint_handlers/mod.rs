pub mod albums;
pub mod authentications;
pub mod collaborations;
pub mod exports;
pub mod playlists;
pub mod songs;
pub mod users;
