use std::sync::Arc;

use super::ServiceError;
use crate::database::models::House;
use crate::database::Repository;

pub struct HouseService {
    repo: Arc<dyn Repository>,
}

impl HouseService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<House>, ServiceError> {
        Ok(self.repo.list_houses().await?)
    }
}
