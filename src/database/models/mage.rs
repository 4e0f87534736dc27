use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::house::House;

/// Stored mage record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Mage {
    #[serde(rename = "mag_id")]
    #[sqlx(rename = "mag_id")]
    pub id: i32,
    #[serde(rename = "mag_name")]
    #[sqlx(rename = "mag_name")]
    pub name: String,
    #[serde(rename = "mag_birthdate")]
    #[sqlx(rename = "mag_birthdate")]
    pub birth_date: NaiveDate,
    #[serde(rename = "mag_hou_id")]
    #[sqlx(rename = "mag_hou_id")]
    pub house_id: i32,
    #[serde(rename = "mag_aaln")]
    #[sqlx(rename = "mag_aaln")]
    pub aaln: String,
    #[serde(rename = "mag_inscription")]
    #[sqlx(rename = "mag_inscription")]
    pub registered_at: DateTime<Utc>,
}

/// Client supplied fields for creating or replacing a mage
#[derive(Debug, Clone, Deserialize)]
pub struct MageInput {
    #[serde(rename = "mag_name")]
    pub name: String,
    #[serde(rename = "mag_birthdate", deserialize_with = "crate::types::deserialize_date")]
    pub birth_date: NaiveDate,
    #[serde(rename = "mag_hou_id")]
    pub house_id: i32,
    #[serde(rename = "mag_aaln")]
    pub aaln: String,
}

impl Mage {
    /// Overwrite the client editable fields, keeping id and registration time
    pub fn apply(&mut self, input: MageInput) {
        self.name = input.name;
        self.birth_date = input.birth_date;
        self.house_id = input.house_id;
        self.aaln = input.aaln;
    }
}

/// Mage joined with its house, as read for listings
#[derive(Debug, Clone, FromRow)]
pub struct MageWithHouse {
    pub mag_id: i32,
    pub mag_name: String,
    pub mag_birthdate: NaiveDate,
    pub mag_aaln: String,
    pub mag_inscription: DateTime<Utc>,
    pub hou_id: i32,
    pub hou_name: String,
}

/// Listing row with the age computed at read time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MageListEntry {
    #[serde(rename = "mag_id")]
    pub id: i32,
    #[serde(rename = "mag_aaln")]
    pub aaln: String,
    #[serde(rename = "mag_name")]
    pub name: String,
    #[serde(rename = "mag_house")]
    pub house: House,
    #[serde(rename = "mag_age")]
    pub age: i32,
    #[serde(rename = "mag_inscription")]
    pub registered_at: DateTime<Utc>,
}

impl MageListEntry {
    pub fn from_row(row: MageWithHouse, today: NaiveDate) -> Self {
        Self {
            age: crate::validation::current_age(row.mag_birthdate, today),
            id: row.mag_id,
            aaln: row.mag_aaln,
            name: row.mag_name,
            house: House {
                id: row.hou_id,
                name: row.hou_name,
            },
            registered_at: row.mag_inscription,
        }
    }
}
