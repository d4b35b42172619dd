use std::sync::Arc;

use tracing::error;

use crate::application::{ContractorQueryUseCase, LoadContractorsUseCase};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ServerConfig;
use crate::infrastructure::csv::CsvParser;
use crate::interfaces::http::HttpState;

/// Load the contractor table and build the shared HTTP state.
///
/// Runs the file read on the blocking pool; any failure here keeps the
/// server from starting.
pub async fn setup(config: &ServerConfig) -> Result<HttpState> {
    let parser = CsvParser::new()
        .with_delimiter(config.delimiter_byte())
        .with_trim(config.trim);
    let loader = LoadContractorsUseCase::new(parser);
    let data_path = config.data_path.clone();

    let table = tokio::task::spawn_blocking(move || loader.execute(&data_path))
        .await
        .map_err(|err| AppError::Internal(format!("Loader task failed: {}", err)))?
        .map_err(|err| {
            error!(
                error = %err,
                data_path = %config.data_path.display(),
                "Failed to load contractor data"
            );
            err
        })?;

    Ok(HttpState::new(ContractorQueryUseCase::new(Arc::new(table))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[actix_web::test]
    async fn test_setup_builds_state() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Name;Experience\nAcme;30\nBolt;12\n").unwrap();

        let config = ServerConfig {
            data_path: file.path().to_path_buf(),
            delimiter: ';',
            ..Default::default()
        };
        let state = setup(&config).await.unwrap();

        assert_eq!(state.query.table().len(), 2);
        assert_eq!(state.query.table().rows()[1].number(1), Some(12.0));
    }

    #[actix_web::test]
    async fn test_setup_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            data_path: dir.path().join("contrator.csv"),
            ..Default::default()
        };

        assert!(matches!(setup(&config).await, Err(AppError::IoError(_))));
    }
}
