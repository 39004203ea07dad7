pub mod api_response;
pub mod catalog_response;
pub mod playlist_response;
pub mod user_response;

pub use api_response::ApiResponse;
