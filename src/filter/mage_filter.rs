use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::database::models::MageListEntry;

/// Optional predicates for narrowing the mage listing.
///
/// Accepted both as a query string (`GET /mages`) and as a JSON body
/// (`POST /mage/list`). Every present field must match; absent fields
/// match everything. Age and registration bounds are inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MageFilter {
    /// Case-insensitive substring of the mage's name
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_text")]
    pub mage_name: Option<String>,
    /// Exact license number
    #[serde(rename = "AALN", default, deserialize_with = "crate::types::deserialize_optional_text")]
    pub aaln: Option<String>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_i32")]
    pub min_age: Option<i32>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_i32")]
    pub max_age: Option<i32>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_i32")]
    pub house_id: Option<i32>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_instant")]
    pub min_reg_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::types::deserialize_optional_instant")]
    pub max_reg_date: Option<DateTime<Utc>>,
}

impl MageFilter {
    pub fn is_empty(&self) -> bool {
        self.mage_name.is_none()
            && self.aaln.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.house_id.is_none()
            && self.min_reg_date.is_none()
            && self.max_reg_date.is_none()
    }

    pub fn matches(&self, mage: &MageListEntry) -> bool {
        if let Some(ref name) = self.mage_name {
            if !mage.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(ref aaln) = self.aaln {
            if &mage.aaln != aaln {
                return false;
            }
        }
        if self.min_age.is_some_and(|min| mage.age < min) {
            return false;
        }
        if self.max_age.is_some_and(|max| mage.age > max) {
            return false;
        }
        if self.house_id.is_some_and(|id| mage.house.id != id) {
            return false;
        }
        if self.min_reg_date.is_some_and(|min| mage.registered_at < min) {
            return false;
        }
        if self.max_reg_date.is_some_and(|max| mage.registered_at > max) {
            return false;
        }
        true
    }

    /// Keep the matching entries, preserving their order
    pub fn apply(&self, mages: Vec<MageListEntry>) -> Vec<MageListEntry> {
        if self.is_empty() {
            return mages;
        }
        mages.into_iter().filter(|m| self.matches(m)).collect()
    }
}
