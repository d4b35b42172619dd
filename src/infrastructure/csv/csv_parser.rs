// ============================================================
// CSV PARSER
// ============================================================
// Load the contractor CSV with encoding fallback and build the table

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use encoding_rs::WINDOWS_1252;

use crate::domain::contractor::ContractorTable;
use crate::domain::error::{AppError, Result};

const UTF8_BOM: &str = "\u{feff}";

/// CSV parser producing a [`ContractorTable`]
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read and parse a CSV file. A missing or unreadable file is an error.
    pub fn parse_file(&self, path: &Path) -> Result<ContractorTable> {
        let bytes = fs::read(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let content = decode(&bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string. The first record is the header row.
    pub fn parse_content(&self, content: &str) -> Result<ContractorTable> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Ok(ContractorTable::from_records(headers, records))
    }
}

/// Decode as UTF-8, falling back to Windows-1252 for legacy exports
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(content) => Cow::Borrowed(content),
        Err(_) => {
            let (content, _, _) = WINDOWS_1252.decode(bytes);
            content
        }
    }
}
