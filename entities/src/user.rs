use serde::Serialize;
use sqlx::FromRow;

#[derive(FromRow, PartialEq, Eq, Clone, Debug, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    /// Password digest, never the plain password.
    #[serde(skip_serializing)]
    pub password: String,
    pub fullname: String,
}
