pub mod use_cases;

pub use use_cases::contractor_query::ContractorQueryUseCase;
pub use use_cases::load_contractors::LoadContractorsUseCase;
