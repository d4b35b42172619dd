use std::sync::Arc;

use crate::domain::contractor::{ContractorTable, FilterCriteria, TableView};

/// Read-only queries over the table loaded at startup
pub struct ContractorQueryUseCase {
    table: Arc<ContractorTable>,
    criteria: FilterCriteria,
}

impl ContractorQueryUseCase {
    pub fn new(table: Arc<ContractorTable>) -> Self {
        Self::with_criteria(table, FilterCriteria::default())
    }

    pub fn with_criteria(table: Arc<ContractorTable>, criteria: FilterCriteria) -> Self {
        Self { table, criteria }
    }

    pub fn table(&self) -> &ContractorTable {
        &self.table
    }

    pub fn all_contractors(&self) -> TableView<'_> {
        self.table.all()
    }

    pub fn filtered_contractors(&self) -> TableView<'_> {
        self.table.filter(&self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::csv::CsvParser;

    fn use_case(content: &str) -> ContractorQueryUseCase {
        let table = CsvParser::new().parse_content(content).unwrap();
        ContractorQueryUseCase::new(Arc::new(table))
    }

    #[test]
    fn test_all_returns_every_row_in_order() {
        let query = use_case("Name,Score\nc,1\na,2\nb,3\n");
        let names: Vec<_> = query
            .all_contractors()
            .rows
            .iter()
            .filter_map(|row| row.text(0))
            .collect();

        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filtered_keeps_matching_rows() {
        let query = use_case(
            "Name,Experience,Certifications,Bid Amount\n\
             Acme,30,Complete,21000000\n\
             Bolt,10,Complete,21000000\n\
             Crane,40,complete,bad\n\
             Delta,26,complete,30000000\n",
        );

        let filtered = query.filtered_contractors();
        let names: Vec<_> = filtered.rows.iter().filter_map(|row| row.text(0)).collect();

        assert_eq!(names, vec!["Acme", "Delta"]);
        assert_eq!(filtered.headers.len(), 4);
        assert_eq!(query.all_contractors().len(), 4);
    }

    #[test]
    fn test_filtered_without_semantic_columns_is_empty() {
        let query = use_case("Name,Years,Status,Quote\nAcme,30,Complete,21000000\n");

        assert!(query.filtered_contractors().is_empty());
        assert_eq!(query.all_contractors().len(), 1);
    }

    #[test]
    fn test_custom_criteria() {
        let table = CsvParser::new()
            .parse_content("Experience,Certifications,Bid Amount\n5,Pending,100\n")
            .unwrap();
        let query = ContractorQueryUseCase::with_criteria(
            Arc::new(table),
            FilterCriteria {
                min_experience: 1.0,
                certification: "pending".to_string(),
                min_bid_amount: 50.0,
            },
        );

        assert_eq!(query.filtered_contractors().len(), 1);
    }
}
