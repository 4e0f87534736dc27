use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The mage must be at least 16 years old")]
    TooYoung,

    #[error("Invalid AALN format. The format should be: AZ-AZ-123456")]
    InvalidAalnFormat,

    #[error("There is no house with id {0}")]
    UnknownHouse(i32),

    #[error("The house indicated in the aaln does not coincide with the house of the mage")]
    HouseMismatch,

    #[error("For the OT house, the school initials should be OT")]
    OtherSchoolRequired,

    #[error("For {0} house, the school initials should be HG")]
    HogwartsSchoolRequired(String),

    #[error("AALN already exists")]
    DuplicateAaln,
}
