//! Business rules applied to a mage before it is written

pub mod aaln;
pub mod age;
pub mod error;

pub use aaln::{house_initials, Aaln};
pub use age::{current_age, is_younger, MINIMUM_AGE};
pub use error::ValidationError;
