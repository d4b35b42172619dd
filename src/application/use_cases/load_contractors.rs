use std::path::Path;

use tracing::{info, warn};

use crate::domain::contractor::{ContractorTable, SemanticField};
use crate::domain::error::Result;
use crate::infrastructure::csv::CsvParser;

pub struct LoadContractorsUseCase {
    parser: CsvParser,
}

impl LoadContractorsUseCase {
    pub fn new(parser: CsvParser) -> Self {
        Self { parser }
    }

    /// Read the dataset once. Unresolved columns and unparseable numbers
    /// are logged, never fatal.
    pub fn execute(&self, path: &Path) -> Result<ContractorTable> {
        let table = self.parser.parse_file(path)?;

        for field in SemanticField::ALL {
            if let Some(header) = table.header_for(field) {
                info!(field = ?field, header = %header, "Bound semantic column");
            }
        }

        let unresolved = table.bindings().unresolved();
        if !unresolved.is_empty() {
            warn!(
                unresolved = ?unresolved,
                "No header matched; filtered view will be empty"
            );
        }

        info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers().len(),
            null_numeric_cells = table.null_numeric_cells(),
            "Contractor data loaded"
        );

        Ok(table)
    }
}
