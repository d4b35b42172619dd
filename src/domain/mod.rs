pub mod error;

// Contractor dataset module
pub mod contractor;
