use std::sync::Arc;

use tracing::{info, warn};

use super::ServiceError;
use crate::auth::{generate_jwt, password::verify_password, validate_jwt, Claims};
use crate::config::AppConfig;
use crate::database::Repository;

pub struct AuthService {
    config: Arc<AppConfig>,
    repo: Arc<dyn Repository>,
}

impl AuthService {
    pub fn new(config: Arc<AppConfig>, repo: Arc<dyn Repository>) -> Self {
        Self { config, repo }
    }

    /// Check the password against the stored hash and issue a signed token
    pub async fn login(&self, name: &str, password: &str) -> Result<String, ServiceError> {
        let Some(user) = self.repo.find_user_by_name(name).await? else {
            warn!("Login failed: unknown user '{}'", name);
            return Err(ServiceError::InvalidCredentials);
        };

        if !verify_password(password, &user.password, &self.config.security.password_salt) {
            warn!("Login failed: wrong password for '{}'", name);
            return Err(ServiceError::InvalidCredentials);
        }

        let token = generate_jwt(&user, &self.config.security)?;
        info!("User '{}' logged in as {}", user.name, user.role);
        Ok(token)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        Ok(validate_jwt(token, &self.config.security)?)
    }
}
