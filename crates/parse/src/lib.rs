//! Parsing and categorization of BCA mutasi (account statement) text.
//!
//! Input is one UTF-8 blob of already-extracted statement text; output is an
//! ordered list of [`StatementEntry`] values. The pipeline is pure and
//! synchronous: segment the blob into candidate lines, run each through the
//! line grammar, categorize via the ordered keyword table. Lines that do not
//! look like transactions are dropped silently, never reported as errors.

pub mod extract;
pub mod rules;
pub mod segment;

pub use extract::EntryExtractor;
pub use rules::{CategoryRule, CategoryRuleTable, RuleTableError};
pub use segment::segment_lines;

pub use mutasi_core::{Direction, Rupiah, StatementEntry};

/// Statement parsing pipeline: compiled line grammar plus rule table.
///
/// Read-only after construction, so one parser can be shared across
/// concurrent parses.
pub struct StatementParser {
    extractor: EntryExtractor,
    rules: CategoryRuleTable,
}

impl StatementParser {
    pub fn new(rules: CategoryRuleTable) -> Self {
        Self {
            extractor: EntryExtractor::new(),
            rules,
        }
    }

    /// Parser using the curated rule table bundled with the crate.
    pub fn with_builtin_rules() -> Self {
        Self::new(CategoryRuleTable::builtin())
    }

    /// Parse one extracted-text blob into entries, in document order.
    pub fn parse(&self, text: &str) -> Vec<StatementEntry> {
        segment::segment_lines(text)
            .into_iter()
            .filter_map(|line| self.extractor.extract(line, &self.rules))
            .collect()
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutasi_core::Direction;

    const STATEMENT: &str = "\
REKENING TAHAPAN BCA
PERIODE : MEI 2024
01/05 TRSF E-BANKING 150.000,00 DB 1.200.000,00 02/05 INDOMARET CIKINI 45.500,00 DB 1.154.500,00
03/05 GAJI MEI 10.000.000,00 CR 11.154.500,00
SALDO AWAL 1.350.000,00
Bersambung ke halaman berikut
";

    #[test]
    fn parses_a_page_with_glued_lines_and_noise() {
        let parser = StatementParser::with_builtin_rules();
        let entries = parser.parse(STATEMENT);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].date, "01/05");
        assert_eq!(entries[0].description, "TRSF E-BANKING");
        assert_eq!(entries[0].category.as_deref(), Some("Transfer"));
        assert_eq!(entries[0].direction, Some(Direction::Debit));

        assert_eq!(entries[1].date, "02/05");
        assert_eq!(entries[1].description, "INDOMARET CIKINI");
        assert_eq!(entries[1].category.as_deref(), Some("Groceries"));
        assert_eq!(entries[1].amount.to_string(), "45.500");

        assert_eq!(entries[2].date, "03/05");
        assert_eq!(entries[2].direction, Some(Direction::Credit));
        assert_eq!(entries[2].balance.unwrap().to_string(), "11.154.500");
    }

    #[test]
    fn header_only_blob_yields_no_entries() {
        let parser = StatementParser::with_builtin_rules();
        assert!(parser.parse("BANK CENTRAL ASIA\nHALAMAN 1\n").is_empty());
    }

    #[test]
    fn output_never_exceeds_candidate_count() {
        let parser = StatementParser::with_builtin_rules();
        let candidates = segment_lines(STATEMENT).len();
        assert!(parser.parse(STATEMENT).len() <= candidates);
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<StatementParser>();
    }
}
