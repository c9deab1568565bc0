mod normalizer;
mod parser;

use crate::pipeline::domain::ClaimRecord;
use std::io::Read;
use std::path::Path;

/// Failure taxonomy for the ingest stage. `FileAccess` covers a source that
/// cannot be opened, `EmptyInput` a zero-line or header-only source, and
/// `Processing` everything else the reader surfaces mid-parse.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open claims source: {0}")]
    FileAccess(#[source] std::io::Error),
    #[error("claims source contained no data rows")]
    EmptyInput,
    #[error("could not process claims data: {0}")]
    Processing(#[from] csv::Error),
}

/// Reads a delimited claims export and produces normalized records.
pub struct ClaimsImporter;

impl ClaimsImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ClaimRecord>, IngestError> {
        let file = std::fs::File::open(path).map_err(IngestError::FileAccess)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ClaimRecord>, IngestError> {
        let rows = parser::parse_rows(reader)?;
        if rows.is_empty() {
            return Err(IngestError::EmptyInput);
        }

        Ok(rows.into_iter().map(normalizer::normalize_row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::domain::{City, Identifier};
    use std::io::Cursor;

    #[test]
    fn importer_yields_one_record_per_data_line() {
        let csv = "CLAIM_ID,CLAIM_DATE,CUSTOMER_ID,CLAIM_AMOUNT,PREMIUM_COLLECTED,PAID_AMOUNT,CITY,REJECTION_REMARKS\n\
CLM1,2024-01-15,CUST1,1000,500,250,Pune,\n\
CLM2,2024-02-20,CUST2,2000,800,0,Kolkata,Policy_expired\n";
        let records = ClaimsImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city, City::Pune);
        assert_eq!(records[0].claim_amount, 1000.0);
        assert_eq!(records[0].rejection_remarks, None);
        assert_eq!(
            records[1].rejection_remarks.as_deref(),
            Some("Policy_expired")
        );
    }

    #[test]
    fn short_lines_normalize_with_sentinels_and_defaults() {
        let csv = "CLAIM_ID,CLAIM_DATE,CUSTOMER_ID,CLAIM_AMOUNT,PREMIUM_COLLECTED,PAID_AMOUNT,CITY,REJECTION_REMARKS\n\
CLM7,2024-03-01\n";
        let records = ClaimsImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(record.claim_id.is_valid());
        assert_eq!(record.customer_id, Identifier::Missing);
        assert_eq!(record.premium_collected, 0.0);
        assert_eq!(record.city, City::Unknown);
    }

    #[test]
    fn missing_file_reports_file_access() {
        let error = ClaimsImporter::from_path("./does-not-exist.csv").expect_err("open fails");
        assert!(matches!(error, IngestError::FileAccess(_)));
    }

    #[test]
    fn empty_source_reports_empty_input() {
        let error = ClaimsImporter::from_reader(Cursor::new("")).expect_err("no rows");
        assert!(matches!(error, IngestError::EmptyInput));
    }

    #[test]
    fn header_only_source_reports_empty_input() {
        let csv = "CLAIM_ID,CITY\n";
        let error = ClaimsImporter::from_reader(Cursor::new(csv)).expect_err("no data rows");
        assert!(matches!(error, IngestError::EmptyInput));
    }

    #[test]
    fn invalid_encoding_reports_processing() {
        let bytes: &[u8] = b"CLAIM_ID,CITY\nCLM1,\xff\xfe\n";
        let error = ClaimsImporter::from_reader(bytes).expect_err("bad utf-8");
        assert!(matches!(error, IngestError::Processing(_)));
    }
}
