// ============================================================
// FILTER CRITERIA
// ============================================================
// Thresholds for the "experienced contractors" view

use serde::{Deserialize, Serialize};

use super::{ColumnBindings, ContractorRow};

pub const MIN_EXPERIENCE_YEARS: f64 = 25.0;
pub const REQUIRED_CERTIFICATION: &str = "complete";
pub const MIN_BID_AMOUNT: f64 = 20_522_848.0;

/// Predicate applied to each row of the loaded table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive lower bound on the experience column
    pub min_experience: f64,

    /// Certification status, compared case-insensitively
    pub certification: String,

    /// Inclusive lower bound on the bid amount column
    pub min_bid_amount: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_experience: MIN_EXPERIENCE_YEARS,
            certification: REQUIRED_CERTIFICATION.to_string(),
            min_bid_amount: MIN_BID_AMOUNT,
        }
    }
}

impl FilterCriteria {
    /// Evaluate the row. Unbound columns and null numbers never match.
    pub fn matches(&self, row: &ContractorRow, bindings: &ColumnBindings) -> bool {
        let (Some(experience), Some(certifications), Some(bid_amount)) = (
            bindings.experience,
            bindings.certifications,
            bindings.bid_amount,
        ) else {
            return false;
        };

        let experienced = row
            .number(experience)
            .is_some_and(|years| years >= self.min_experience);
        let certified = row
            .text(certifications)
            .is_some_and(|status| status.to_lowercase() == self.certification.to_lowercase());
        let funded = row
            .number(bid_amount)
            .is_some_and(|amount| amount >= self.min_bid_amount);

        experienced && certified && funded
    }
}
