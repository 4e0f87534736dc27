pub mod auth_service;
pub mod house_service;
pub mod mage_service;

pub use auth_service::AuthService;
pub use house_service::HouseService;
pub use mage_service::MageService;

use crate::auth::JwtError;
use crate::database::manager::DatabaseError;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("There is no mage with this id")]
    MageNotFound(i32),

    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Jwt(#[from] JwtError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
