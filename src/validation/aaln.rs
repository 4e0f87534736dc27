use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;

static AALN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{2})-([A-Z]{2})-(\d{6})$").expect("AALN pattern compiles"));

/// School code every house uses except the "OT" house
pub const HOGWARTS_SCHOOL: &str = "HG";
/// Initials of the house whose mages carry their own school code
pub const OTHER_HOUSE: &str = "OT";

/// A license number split into its three groups: `SCHOOL-HOUSE-NUMBER`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aaln {
    pub school: String,
    pub house: String,
    pub number: String,
}

impl Aaln {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let caps = AALN_PATTERN
            .captures(raw)
            .ok_or(ValidationError::InvalidAalnFormat)?;

        Ok(Self {
            school: caps[1].to_string(),
            house: caps[2].to_string(),
            number: caps[3].to_string(),
        })
    }

    /// Check the house and school groups against the owning house's name
    pub fn check_house(&self, house_name: &str) -> Result<(), ValidationError> {
        let initials = house_initials(house_name);

        if initials != self.house {
            return Err(ValidationError::HouseMismatch);
        }

        if initials == OTHER_HOUSE {
            if self.school != OTHER_HOUSE {
                return Err(ValidationError::OtherSchoolRequired);
            }
        } else if self.school != HOGWARTS_SCHOOL {
            return Err(ValidationError::HogwartsSchoolRequired(initials));
        }

        Ok(())
    }
}

impl std::fmt::Display for Aaln {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.school, self.house, self.number)
    }
}

/// First two characters of a house name, upper-cased
pub fn house_initials(house_name: &str) -> String {
    house_name.chars().take(2).collect::<String>().to_uppercase()
}
