use entities::user::User;
use serde::Serialize;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserIdData {
    pub(crate) user_id: String,
}

#[derive(Serialize, Clone)]
pub struct UserData {
    pub(crate) user: User,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokensData {
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenData {
    pub(crate) access_token: String,
}
