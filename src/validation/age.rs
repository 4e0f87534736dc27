use chrono::{Datelike, NaiveDate};

use super::error::ValidationError;

pub const MINIMUM_AGE: i32 = 16;

/// Whole years between `birth` and `today`
pub fn current_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn is_younger(birth: NaiveDate, today: NaiveDate) -> bool {
    current_age(birth, today) < MINIMUM_AGE
}

pub fn check_minimum_age(birth: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if is_younger(birth, today) {
        return Err(ValidationError::TooYoung);
    }
    Ok(())
}
