use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct House {
    #[serde(rename = "hou_id")]
    #[sqlx(rename = "hou_id")]
    pub id: i32,
    #[serde(rename = "hou_name")]
    #[sqlx(rename = "hou_name")]
    pub name: String,
}
