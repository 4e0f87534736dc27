use serde::Serialize;
use sqlx::FromRow;

/// Row from the `users` table. Only ever looked up by name for login.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    #[serde(rename = "iduser")]
    #[sqlx(rename = "iduser")]
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub profile_picture: Option<String>,
}
