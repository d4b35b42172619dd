// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV reading and encoding detection

mod csv_parser;

pub use csv_parser::CsvParser;
