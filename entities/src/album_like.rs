use sqlx::FromRow;

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug)]
pub struct AlbumLike {
    pub id: String,
    pub album_id: String,
    pub user_id: String,
}
