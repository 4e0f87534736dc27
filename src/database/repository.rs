use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{House, Mage, MageInput, MageWithHouse, User};

/// Persistence operations the services rely on
#[async_trait]
pub trait Repository: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn list_houses(&self) -> Result<Vec<House>, DatabaseError>;

    async fn find_house(&self, id: i32) -> Result<Option<House>, DatabaseError>;

    /// All mages joined with their house, ordered by mage name
    async fn list_mages_with_house(&self) -> Result<Vec<MageWithHouse>, DatabaseError>;

    async fn find_mage(&self, id: i32) -> Result<Option<Mage>, DatabaseError>;

    /// Whether another mage already holds an AALN ending in `number`
    async fn aaln_number_in_use(&self, number: &str, exclude_id: Option<i32>) -> Result<bool, DatabaseError>;

    async fn insert_mage(&self, input: &MageInput, registered_at: DateTime<Utc>) -> Result<Mage, DatabaseError>;

    /// Persist the editable fields; `None` when the row no longer exists
    async fn update_mage(&self, mage: &Mage) -> Result<Option<Mage>, DatabaseError>;

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, DatabaseError>;

    async fn insert_user(
        &self,
        name: &str,
        password_hash: &str,
        role: &str,
        profile_picture: Option<&str>,
    ) -> Result<User, DatabaseError>;
}

const MAGE_COLUMNS: &str = "mag_id, mag_name, mag_birthdate, mag_hou_id, mag_aaln, mag_inscription";

/// PostgreSQL backed repository
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }

    async fn list_houses(&self) -> Result<Vec<House>, DatabaseError> {
        let houses = sqlx::query_as::<_, House>("SELECT hou_id, hou_name FROM houses ORDER BY hou_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(houses)
    }

    async fn find_house(&self, id: i32) -> Result<Option<House>, DatabaseError> {
        let house = sqlx::query_as::<_, House>("SELECT hou_id, hou_name FROM houses WHERE hou_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(house)
    }

    async fn list_mages_with_house(&self) -> Result<Vec<MageWithHouse>, DatabaseError> {
        let rows = sqlx::query_as::<_, MageWithHouse>(
            "SELECT m.mag_id, m.mag_name, m.mag_birthdate, m.mag_aaln, m.mag_inscription,
                    h.hou_id, h.hou_name
             FROM mages m
             JOIN houses h ON m.mag_hou_id = h.hou_id
             ORDER BY m.mag_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_mage(&self, id: i32) -> Result<Option<Mage>, DatabaseError> {
        let mage = sqlx::query_as::<_, Mage>(&format!("SELECT {} FROM mages WHERE mag_id = $1", MAGE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(mage)
    }

    async fn aaln_number_in_use(&self, number: &str, exclude_id: Option<i32>) -> Result<bool, DatabaseError> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM mages
                WHERE split_part(mag_aaln, '-', 3) = $1
                AND ($2::INT IS NULL OR mag_id <> $2)
            )",
        )
        .bind(number)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn insert_mage(&self, input: &MageInput, registered_at: DateTime<Utc>) -> Result<Mage, DatabaseError> {
        let mage = sqlx::query_as::<_, Mage>(&format!(
            "INSERT INTO mages (mag_name, mag_birthdate, mag_hou_id, mag_aaln, mag_inscription)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            MAGE_COLUMNS
        ))
        .bind(&input.name)
        .bind(input.birth_date)
        .bind(input.house_id)
        .bind(&input.aaln)
        .bind(registered_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(mage)
    }

    async fn update_mage(&self, mage: &Mage) -> Result<Option<Mage>, DatabaseError> {
        let updated = sqlx::query_as::<_, Mage>(&format!(
            "UPDATE mages
             SET mag_name = $2, mag_birthdate = $3, mag_hou_id = $4, mag_aaln = $5
             WHERE mag_id = $1
             RETURNING {}",
            MAGE_COLUMNS
        ))
        .bind(mage.id)
        .bind(&mage.name)
        .bind(mage.birth_date)
        .bind(mage.house_id)
        .bind(&mage.aaln)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT iduser, name, password, role, profile_picture
             FROM users
             WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(
        &self,
        name: &str,
        password_hash: &str,
        role: &str,
        profile_picture: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, password, role, profile_picture)
             VALUES ($1, $2, $3, $4)
             RETURNING iduser, name, password, role, profile_picture",
        )
        .bind(name)
        .bind(password_hash)
        .bind(role)
        .bind(profile_picture)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}
