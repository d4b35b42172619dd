// ============================================================
// CONTRACTOR TABLE TYPES
// ============================================================
// The loaded dataset: headers, typed cells and row order

use serde::Serialize;

use super::{ColumnBindings, FilterCriteria, SemanticField};

/// A single cell after type coercion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Source text, kept as read
    Text(String),

    /// Coerced numeric value; `None` when the source did not parse
    Number(Option<f64>),
}

impl Cell {
    /// Coerce raw text to a number, degrading to null on failure
    pub fn parse_number(raw: &str) -> Self {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan());
        Cell::Number(value)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => *value,
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            Cell::Number(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Number(None))
    }

    /// Display form used by the HTML tables
    pub fn display(&self) -> String {
        match self {
            Cell::Text(value) => value.clone(),
            Cell::Number(Some(value)) => value.to_string(),
            Cell::Number(None) => "NaN".to_string(),
        }
    }
}

/// One record of the source file, cells aligned with the table headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractorRow {
    /// Row index in the source file (0-based, header excluded)
    pub index: usize,

    pub cells: Vec<Cell>,
}

impl ContractorRow {
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn number(&self, column: usize) -> Option<f64> {
        self.get(column).and_then(Cell::as_number)
    }

    pub fn text(&self, column: usize) -> Option<&str> {
        self.get(column).and_then(Cell::as_text)
    }
}

/// The whole dataset, immutable once built
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContractorTable {
    headers: Vec<String>,
    rows: Vec<ContractorRow>,
    bindings: ColumnBindings,
}

impl ContractorTable {
    /// Build a table from raw records, resolving semantic columns and
    /// coercing the numeric ones. Short records are padded with empty
    /// cells and extra cells are dropped.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let bindings = ColumnBindings::resolve(&headers);
        let width = headers.len();

        let rows = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.resize(width, String::new());
                let cells = record
                    .into_iter()
                    .enumerate()
                    .map(|(column, raw)| {
                        if bindings.is_numeric_column(column) {
                            Cell::parse_number(&raw)
                        } else {
                            Cell::Text(raw)
                        }
                    })
                    .collect();
                ContractorRow { index, cells }
            })
            .collect();

        Self {
            headers,
            rows,
            bindings,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[ContractorRow] {
        &self.rows
    }

    pub fn bindings(&self) -> &ColumnBindings {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header name bound to a semantic field, if any
    pub fn header_for(&self, field: SemanticField) -> Option<&str> {
        self.bindings
            .get(field)
            .and_then(|index| self.headers.get(index))
            .map(String::as_str)
    }

    /// Count of numeric cells that failed coercion
    pub fn null_numeric_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_null())
            .count()
    }

    /// Every row, in file order
    pub fn all(&self) -> TableView<'_> {
        TableView {
            headers: &self.headers,
            rows: self.rows.iter().collect(),
        }
    }

    /// Rows passing the criteria, in file order.
    ///
    /// When any semantic column is unresolved the view has no columns
    /// and no rows.
    pub fn filter(&self, criteria: &FilterCriteria) -> TableView<'_> {
        if !self.bindings.is_complete() {
            return TableView::empty();
        }

        TableView {
            headers: &self.headers,
            rows: self
                .rows
                .iter()
                .filter(|row| criteria.matches(row, &self.bindings))
                .collect(),
        }
    }
}

/// A borrowed selection of rows ready for rendering
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub headers: &'a [String],
    pub rows: Vec<&'a ContractorRow>,
}

impl<'a> TableView<'a> {
    pub fn empty() -> Self {
        Self {
            headers: &[],
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Cell::parse_number("30"), Cell::Number(Some(30.0)));
        assert_eq!(Cell::parse_number(" 12.5 "), Cell::Number(Some(12.5)));
        assert_eq!(Cell::parse_number("N/A"), Cell::Number(None));
        assert_eq!(Cell::parse_number(""), Cell::Number(None));
        assert_eq!(Cell::parse_number("NaN"), Cell::Number(None));
        assert_eq!(Cell::parse_number("1,000"), Cell::Number(None));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Number(Some(21000000.0)).display(), "21000000");
        assert_eq!(Cell::Number(Some(2.5)).display(), "2.5");
        assert_eq!(Cell::Number(None).display(), "NaN");
        assert_eq!(Cell::Text("Complete".to_string()).display(), "Complete");
    }

    #[test]
    fn test_from_records_coerces_semantic_numeric_columns() {
        let table = ContractorTable::from_records(
            strings(&["Name", "Experience", "Certifications", "Bid Amount"]),
            vec![
                strings(&["Acme", "30", "Complete", "21000000"]),
                strings(&["Bolt", "ten", "Pending", "abc"]),
            ],
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].cells[0], Cell::Text("Acme".to_string()));
        assert_eq!(table.rows()[0].number(1), Some(30.0));
        assert_eq!(table.rows()[0].text(2), Some("Complete"));
        assert_eq!(table.rows()[1].get(1), Some(&Cell::Number(None)));
        assert_eq!(table.null_numeric_cells(), 2);
    }

    #[test]
    fn test_from_records_pads_and_truncates() {
        let table = ContractorTable::from_records(
            strings(&["Name", "City"]),
            vec![strings(&["Acme"]), strings(&["Bolt", "Austin", "extra"])],
        );

        assert_eq!(table.rows()[0].cells.len(), 2);
        assert_eq!(table.rows()[0].text(1), Some(""));
        assert_eq!(table.rows()[1].cells.len(), 2);
    }

    #[test]
    fn test_filter_without_bindings_is_empty_view() {
        let table = ContractorTable::from_records(
            strings(&["Name", "Years"]),
            vec![strings(&["Acme", "40"])],
        );

        let view = table.filter(&FilterCriteria::default());
        assert!(view.is_empty());
        assert!(view.headers.is_empty());
        assert_eq!(table.all().len(), 1);
    }

    #[test]
    fn test_header_for() {
        let table = ContractorTable::from_records(strings(&["Experience (Years)"]), Vec::new());

        assert_eq!(
            table.header_for(SemanticField::Experience),
            Some("Experience (Years)")
        );
        assert_eq!(table.header_for(SemanticField::BidAmount), None);
    }
}
