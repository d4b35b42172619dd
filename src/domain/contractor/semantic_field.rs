// ============================================================
// SEMANTIC FIELDS
// ============================================================
// The three columns the filter depends on, located by header name

use serde::{Deserialize, Serialize};

/// A column the service understands by meaning rather than position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    Experience,
    Certifications,
    BidAmount,
}

impl SemanticField {
    /// Matching priority when a header contains more than one needle
    pub const ALL: [SemanticField; 3] = [
        SemanticField::Experience,
        SemanticField::Certifications,
        SemanticField::BidAmount,
    ];

    /// Lowercase substring searched for in header names
    pub fn needle(&self) -> &'static str {
        match self {
            SemanticField::Experience => "experience",
            SemanticField::Certifications => "certifications",
            SemanticField::BidAmount => "bid amount",
        }
    }

    /// Whether cells of this column are coerced to numbers at load time
    pub fn is_numeric(&self) -> bool {
        !matches!(self, SemanticField::Certifications)
    }

    /// Returns the first field whose needle occurs in the header
    pub fn detect(header: &str) -> Option<SemanticField> {
        let lower = header.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| lower.contains(field.needle()))
    }
}

/// Header index bound to each semantic field, fixed at load time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnBindings {
    pub experience: Option<usize>,
    pub certifications: Option<usize>,
    pub bid_amount: Option<usize>,
}

impl ColumnBindings {
    /// Bind each field to the first header that mentions it.
    ///
    /// A header is only considered for the highest-priority field it
    /// mentions, so "Experience / Certifications" binds Experience alone.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut bindings = Self::default();

        for (index, header) in headers.iter().enumerate() {
            if let Some(field) = SemanticField::detect(header.as_ref()) {
                let slot = bindings.slot_mut(field);
                if slot.is_none() {
                    *slot = Some(index);
                }
            }
        }

        bindings
    }

    pub fn get(&self, field: SemanticField) -> Option<usize> {
        match field {
            SemanticField::Experience => self.experience,
            SemanticField::Certifications => self.certifications,
            SemanticField::BidAmount => self.bid_amount,
        }
    }

    fn slot_mut(&mut self, field: SemanticField) -> &mut Option<usize> {
        match field {
            SemanticField::Experience => &mut self.experience,
            SemanticField::Certifications => &mut self.certifications,
            SemanticField::BidAmount => &mut self.bid_amount,
        }
    }

    /// True only when every semantic field found a header
    pub fn is_complete(&self) -> bool {
        SemanticField::ALL
            .iter()
            .all(|field| self.get(*field).is_some())
    }

    /// Whether the column at `index` holds coerced numeric cells
    pub fn is_numeric_column(&self, index: usize) -> bool {
        SemanticField::ALL
            .iter()
            .filter(|field| field.is_numeric())
            .any(|field| self.get(*field) == Some(index))
    }

    /// Fields that did not match any header
    pub fn unresolved(&self) -> Vec<SemanticField> {
        SemanticField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }
}
