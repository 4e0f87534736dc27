use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use super::ServiceError;
use crate::database::models::{Mage, MageInput, MageListEntry};
use crate::database::{DatabaseError, Repository};
use crate::filter::MageFilter;
use crate::validation::{age::check_minimum_age, Aaln, ValidationError};

pub struct MageService {
    repo: Arc<dyn Repository>,
}

impl MageService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Validate and insert a new mage registered now
    pub async fn create(&self, input: MageInput) -> Result<Mage, ServiceError> {
        self.create_at(input, Utc::now()).await
    }

    pub async fn create_at(&self, input: MageInput, now: DateTime<Utc>) -> Result<Mage, ServiceError> {
        self.validate(&input, now.date_naive(), None).await?;

        let mage = self
            .repo
            .insert_mage(&input, now)
            .await
            .map_err(duplicate_on_unique_violation)?;
        info!("Registered mage {} '{}' with AALN {}", mage.id, mage.name, mage.aaln);
        Ok(mage)
    }

    /// All mages ordered by name, with ages as of today, narrowed by `filter`
    pub async fn list(&self, filter: &MageFilter) -> Result<Vec<MageListEntry>, ServiceError> {
        self.list_at(filter, Utc::now().date_naive()).await
    }

    pub async fn list_at(&self, filter: &MageFilter, today: NaiveDate) -> Result<Vec<MageListEntry>, ServiceError> {
        let rows = self.repo.list_mages_with_house().await?;
        let total = rows.len();

        let entries = rows
            .into_iter()
            .map(|row| MageListEntry::from_row(row, today))
            .collect();
        let mages = filter.apply(entries);

        debug!("Mage listing matched {} of {}", mages.len(), total);
        Ok(mages)
    }

    pub async fn get(&self, id: i32) -> Result<Mage, ServiceError> {
        self.repo
            .find_mage(id)
            .await?
            .ok_or(ServiceError::MageNotFound(id))
    }

    /// Replace the editable fields of an existing mage
    pub async fn update(&self, id: i32, input: MageInput) -> Result<Mage, ServiceError> {
        self.update_at(id, input, Utc::now().date_naive()).await
    }

    pub async fn update_at(&self, id: i32, input: MageInput, today: NaiveDate) -> Result<Mage, ServiceError> {
        let mut mage = self.get(id).await?;
        self.validate(&input, today, Some(id)).await?;
        mage.apply(input);

        let updated = self
            .repo
            .update_mage(&mage)
            .await
            .map_err(duplicate_on_unique_violation)?
            .ok_or(ServiceError::MageNotFound(id))?;
        info!("Updated mage {} '{}' with AALN {}", updated.id, updated.name, updated.aaln);
        Ok(updated)
    }

    /// Age, AALN format, house and school groups, then number uniqueness
    async fn validate(&self, input: &MageInput, today: NaiveDate, exclude_id: Option<i32>) -> Result<(), ServiceError> {
        check_minimum_age(input.birth_date, today)?;

        let aaln = Aaln::parse(&input.aaln)?;

        let house = self
            .repo
            .find_house(input.house_id)
            .await?
            .ok_or(ValidationError::UnknownHouse(input.house_id))?;
        aaln.check_house(&house.name)?;

        if self.repo.aaln_number_in_use(&aaln.number, exclude_id).await? {
            return Err(ValidationError::DuplicateAaln.into());
        }

        Ok(())
    }
}

/// The unique index on the AALN number also rejects writes that raced past the check
fn duplicate_on_unique_violation(err: DatabaseError) -> ServiceError {
    if err.is_unique_violation() {
        ValidationError::DuplicateAaln.into()
    } else {
        err.into()
    }
}
