//! In-memory fixtures for exercising services and the router without PostgreSQL

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::auth::password::hash_password;
use crate::auth::Role;
use crate::config::AppConfig;
use crate::database::manager::DatabaseError;
use crate::database::models::{House, Mage, MageInput, MageWithHouse, User};
use crate::database::Repository;
use crate::state::AppState;

pub const TEST_SIGNING_KEY: &str = "gringotts-test-signing-key-long-enough-for-hs512-signatures";
pub const TEST_PASSWORD_SALT: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Development config with fixed secrets so tokens and hashes are reproducible
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::from_env();
    config.api.enable_request_logging = false;
    config.security.jwt_signing_key = TEST_SIGNING_KEY.to_string();
    config.security.jwt_issuer = "Peticionario".to_string();
    config.security.jwt_audience = "Public".to_string();
    config.security.jwt_expiry_days = 220;
    config.security.password_salt = TEST_PASSWORD_SALT.to_string();
    config
}

#[derive(Default)]
struct Tables {
    houses: Vec<House>,
    mages: Vec<Mage>,
    users: Vec<User>,
    next_mage_id: i32,
    next_user_id: i32,
}

/// `Repository` backed by vectors behind an async lock
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
    unavailable: bool,
    stale_aaln_lookups: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five houses the initial migration seeds
    pub fn with_default_houses() -> Self {
        let houses = ["Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin", "Others"]
            .iter()
            .enumerate()
            .map(|(i, name)| House {
                id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                houses,
                ..Default::default()
            }),
            ..Self::default()
        }
    }

    /// Every call fails as if the database could not be reached
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// `aaln_number_in_use` always answers false, as when another writer
    /// commits the same number between the check and the write
    pub fn with_stale_aaln_lookups(mut self) -> Self {
        self.stale_aaln_lookups = true;
        self
    }

    pub async fn add_user(&self, name: &str, password: &str, role: Role) -> User {
        let mut tables = self.tables.write().await;
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            name: name.to_string(),
            password: hash_password(password, TEST_PASSWORD_SALT),
            role: role.as_str().to_string(),
            profile_picture: None,
        };
        tables.users.push(user.clone());
        user
    }

    /// Insert a mage without validation, registered at the given instant
    pub async fn add_mage(
        &self,
        name: &str,
        birth_date: NaiveDate,
        house_id: i32,
        aaln: &str,
        registered_at: DateTime<Utc>,
    ) -> Mage {
        let input = MageInput {
            name: name.to_string(),
            birth_date,
            house_id,
            aaln: aaln.to_string(),
        };
        let mut tables = self.tables.write().await;
        insert(&mut tables, &input, registered_at)
    }

    pub async fn mage_count(&self) -> usize {
        self.tables.read().await.mages.len()
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.unavailable {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

const AALN_NUMBER_INDEX: &str = "uq_mages_aaln_number";

fn aaln_number(aaln: &str) -> Option<&str> {
    aaln.split('-').nth(2)
}

/// Mirrors the unique index on the AALN number
fn check_unique_number(tables: &Tables, aaln: &str, own_id: Option<i32>) -> Result<(), DatabaseError> {
    let taken = tables
        .mages
        .iter()
        .any(|m| Some(m.id) != own_id && aaln_number(&m.aaln) == aaln_number(aaln));
    if taken {
        return Err(DatabaseError::UniqueViolation(AALN_NUMBER_INDEX.to_string()));
    }
    Ok(())
}

fn insert(tables: &mut Tables, input: &MageInput, registered_at: DateTime<Utc>) -> Mage {
    tables.next_mage_id += 1;
    let mage = Mage {
        id: tables.next_mage_id,
        name: input.name.clone(),
        birth_date: input.birth_date,
        house_id: input.house_id,
        aaln: input.aaln.clone(),
        registered_at,
    };
    tables.mages.push(mage.clone());
    mage
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.check()
    }

    async fn list_houses(&self) -> Result<Vec<House>, DatabaseError> {
        self.check()?;
        Ok(self.tables.read().await.houses.clone())
    }

    async fn find_house(&self, id: i32) -> Result<Option<House>, DatabaseError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.houses.iter().find(|h| h.id == id).cloned())
    }

    async fn list_mages_with_house(&self) -> Result<Vec<MageWithHouse>, DatabaseError> {
        self.check()?;
        let tables = self.tables.read().await;
        let mut rows: Vec<MageWithHouse> = tables
            .mages
            .iter()
            .filter_map(|m| {
                let house = tables.houses.iter().find(|h| h.id == m.house_id)?;
                Some(MageWithHouse {
                    mag_id: m.id,
                    mag_name: m.name.clone(),
                    mag_birthdate: m.birth_date,
                    mag_aaln: m.aaln.clone(),
                    mag_inscription: m.registered_at,
                    hou_id: house.id,
                    hou_name: house.name.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.mag_name.cmp(&b.mag_name));
        Ok(rows)
    }

    async fn find_mage(&self, id: i32) -> Result<Option<Mage>, DatabaseError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.mages.iter().find(|m| m.id == id).cloned())
    }

    async fn aaln_number_in_use(&self, number: &str, exclude_id: Option<i32>) -> Result<bool, DatabaseError> {
        self.check()?;
        if self.stale_aaln_lookups {
            return Ok(false);
        }
        let tables = self.tables.read().await;
        Ok(tables
            .mages
            .iter()
            .any(|m| Some(m.id) != exclude_id && aaln_number(&m.aaln) == Some(number)))
    }

    async fn insert_mage(&self, input: &MageInput, registered_at: DateTime<Utc>) -> Result<Mage, DatabaseError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        check_unique_number(&tables, &input.aaln, None)?;
        Ok(insert(&mut tables, input, registered_at))
    }

    async fn update_mage(&self, mage: &Mage) -> Result<Option<Mage>, DatabaseError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        check_unique_number(&tables, &mage.aaln, Some(mage.id))?;
        let Some(stored) = tables.mages.iter_mut().find(|m| m.id == mage.id) else {
            return Ok(None);
        };
        stored.name = mage.name.clone();
        stored.birth_date = mage.birth_date;
        stored.house_id = mage.house_id;
        stored.aaln = mage.aaln.clone();
        Ok(Some(stored.clone()))
    }

    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, DatabaseError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.name == name).cloned())
    }

    async fn insert_user(
        &self,
        name: &str,
        password_hash: &str,
        role: &str,
        profile_picture: Option<&str>,
    ) -> Result<User, DatabaseError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            name: name.to_string(),
            password: password_hash.to_string(),
            role: role.to_string(),
            profile_picture: profile_picture.map(str::to_string),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

/// Application state over the given in-memory repository and `test_config()`
pub fn test_state(repo: Arc<MemoryRepository>) -> AppState {
    AppState::new(test_config(), repo)
}
