mod app;
mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use app::run;
pub use domain::contractor::{Cell, ContractorRow, ContractorTable, FilterCriteria, SemanticField};
pub use domain::error::{AppError, Result};
