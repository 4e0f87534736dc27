use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Repository;
use crate::services::{AuthService, HouseService, MageService};

/// Shared handler state: configuration plus the persistence backend
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn Repository>,
}

impl AppState {
    pub fn new<R: Repository + 'static>(config: AppConfig, repo: Arc<R>) -> Self {
        Self {
            config: Arc::new(config),
            repo,
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.config.clone(), self.repo.clone())
    }

    pub fn house_service(&self) -> HouseService {
        HouseService::new(self.repo.clone())
    }

    pub fn mage_service(&self) -> MageService {
        MageService::new(self.repo.clone())
    }
}
