use sqlx::FromRow;

#[derive(FromRow, PartialEq, Eq, Hash, Clone, Debug)]
pub struct Collaboration {
    pub id: String,
    pub playlist_id: String,
    pub user_id: String,
}
