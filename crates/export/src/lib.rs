//! Spreadsheet-facing serialization of parsed statement entries.
//!
//! Thin by design: columns follow [`StatementEntry`] field order, absent
//! fields become empty cells, and the download name carries the issuing
//! institution plus a millisecond timestamp.

use std::io::Write;

use chrono::Utc;
use mutasi_core::StatementEntry;
use thiserror::Error;

/// Issuing institution; names the sheet and the download file.
pub const INSTITUTION: &str = "BCA";

/// Column headers, in entry field-declaration order.
const HEADERS: [&str; 6] = ["date", "description", "category", "amount", "type", "balance"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write entries as a CSV sheet, one row per entry plus a header row.
pub fn write_csv<W: Write>(entries: &[StatementEntry], out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADERS)?;
    for entry in entries {
        let amount = entry.amount.to_string();
        let balance = entry.balance.map(|b| b.to_string()).unwrap_or_default();
        writer.write_record([
            entry.date.as_str(),
            entry.description.as_str(),
            entry.category.as_deref().unwrap_or(""),
            amount.as_str(),
            entry.direction.map(|d| d.as_str()).unwrap_or(""),
            balance.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Timestamped download name, e.g. `BCA_Statement_1717221000000.csv`.
pub fn download_file_name() -> String {
    format!(
        "{}_Statement_{}.csv",
        INSTITUTION,
        Utc::now().timestamp_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutasi_core::{Direction, Rupiah};

    fn entry(
        date: &str,
        description: &str,
        category: Option<&str>,
        amount: i64,
        direction: Option<Direction>,
        balance: Option<i64>,
    ) -> StatementEntry {
        StatementEntry {
            date: date.to_string(),
            description: description.to_string(),
            category: category.map(str::to_string),
            amount: Rupiah::new(amount),
            direction,
            balance: balance.map(Rupiah::new),
        }
    }

    fn render(entries: &[StatementEntry]) -> String {
        let mut out = Vec::new();
        write_csv(entries, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_header_and_rows_in_column_order() {
        let rows = vec![entry(
            "01/05",
            "TRSF E-BANKING",
            Some("Transfer"),
            150_000,
            Some(Direction::Debit),
            Some(1_200_000),
        )];
        let csv = render(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("date,description,category,amount,type,balance")
        );
        assert_eq!(
            lines.next(),
            Some("01/05,TRSF E-BANKING,Transfer,150.000,DB,1.200.000")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn absent_fields_become_empty_cells() {
        let rows = vec![entry("02/05", "PT MAJU MUNDUR", None, 50_000, None, None)];
        let csv = render(&rows);
        assert_eq!(csv.lines().nth(1), Some("02/05,PT MAJU MUNDUR,,50.000,,"));
    }

    #[test]
    fn empty_input_writes_header_only() {
        let csv = render(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn download_name_carries_institution_and_timestamp() {
        let name = download_file_name();
        assert!(name.starts_with("BCA_Statement_"));
        assert!(name.ends_with(".csv"));
        let stamp = &name["BCA_Statement_".len()..name.len() - ".csv".len()];
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
