pub mod contractor_query;
pub mod load_contractors;
