use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::auth_middleware::auth_middleware;
use crate::endpoint_handlers::albums::{
    delete_album, delete_album_like, get_album, get_album_cover, get_album_likes, get_albums,
    post_album, post_album_cover, post_album_like, put_album,
};
use crate::endpoint_handlers::authentications::{
    delete_authentication, post_authentication, put_authentication,
};
use crate::endpoint_handlers::collaborations::{delete_collaboration, post_collaboration};
use crate::endpoint_handlers::exports::post_export_playlist;
use crate::endpoint_handlers::playlists::{
    delete_playlist, delete_playlist_song, get_playlist_activities, get_playlist_songs,
    get_playlists, post_playlist, post_playlist_song,
};
use crate::endpoint_handlers::songs::{delete_song, get_song, get_songs, post_song, put_song};
use crate::endpoint_handlers::users::{get_user, post_user};

pub fn router(state: AppState) -> Router {
    // Every route here needs a bearer access token.
    let authenticated: Router<AppState> = Router::new()
        .route(
            "/albums/:id/likes",
            post(post_album_like).delete(delete_album_like),
        )
        .route("/playlists", post(post_playlist).get(get_playlists))
        .route("/playlists/:id", delete(delete_playlist))
        .route(
            "/playlists/:id/songs",
            post(post_playlist_song)
                .get(get_playlist_songs)
                .delete(delete_playlist_song),
        )
        .route("/playlists/:id/activities", get(get_playlist_activities))
        .route(
            "/collaborations",
            post(post_collaboration).delete(delete_collaboration),
        )
        .route("/export/playlists/:id", post(post_export_playlist))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/users", post(post_user))
        .route("/users/:id", get(get_user))
        .route(
            "/authentications",
            post(post_authentication)
                .put(put_authentication)
                .delete(delete_authentication),
        )
        .route("/albums", post(post_album).get(get_albums))
        .route(
            "/albums/:id",
            get(get_album).put(put_album).delete(delete_album),
        )
        .route("/albums/:id/covers", post(post_album_cover))
        .route("/albums/covers/:file", get(get_album_cover))
        .route("/albums/:id/likes", get(get_album_likes))
        .route("/songs", post(post_song).get(get_songs))
        .route(
            "/songs/:id",
            get(get_song).put(put_song).delete(delete_song),
        )
        .merge(authenticated)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
