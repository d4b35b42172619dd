// ============================================================
// CONTRACTOR DOMAIN LAYER
// ============================================================
// Core types for the contractor dataset
// No I/O, no async

mod contractor_row;
mod filter_criteria;
mod semantic_field;

pub use contractor_row::{Cell, ContractorRow, ContractorTable, TableView};
pub use filter_criteria::FilterCriteria;
pub use semantic_field::{ColumnBindings, SemanticField};
