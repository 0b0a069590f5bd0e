use mutasi_core::{Direction, Rupiah, StatementEntry};
use regex::Regex;

use crate::rules::CategoryRuleTable;

/// Whole-line grammar for one statement row, anchored at both ends:
/// date, non-greedy description, amount, optional DB/CR flag, optional
/// running balance. The lazy description keeps trailing numeric columns out
/// of descriptions that themselves end near numbers.
const LINE_PATTERN: &str = r"^(\d{2}/\d{2})\s+(.+?)\s+([\d.,]+)\s*(DB|CR)?\s*([\d.,]+)?$";

/// Boilerplate markers BCA injects into descriptions, stripped in this
/// order before categorization. Each pattern is removed once, at its first
/// occurrence, with a trim after every removal.
const CLEANUP_PATTERNS: [&str; 3] = [
    // Leading QR payment reference: "QR 12345 100,00".
    r"^QR\s*\d+\s+[\d.,]+",
    // Leading QRC reference with zero-padded amount: "QRC12345 0100,00".
    r"^QRC\d+\s*0*[\d.,]*",
    // Clearing reference, anywhere in the text: "CBG 12345".
    r"CBG\s*\d+",
];

/// Applies the line grammar to candidate lines and assembles entries.
///
/// Best-effort by contract: a line that fails the grammar yields `None`,
/// never an error. Statement text routinely contains date-prefixed noise.
pub struct EntryExtractor {
    line: Regex,
    cleanup: Vec<Regex>,
}

impl EntryExtractor {
    pub fn new() -> Self {
        Self {
            line: Regex::new(LINE_PATTERN).expect("line pattern compiles"),
            cleanup: CLEANUP_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("cleanup pattern compiles"))
                .collect(),
        }
    }

    /// Extract one entry from a candidate line, or `None` if the line does
    /// not match the transaction grammar.
    pub fn extract(&self, line: &str, rules: &CategoryRuleTable) -> Option<StatementEntry> {
        let caps = self.line.captures(line)?;

        let description = self.clean_description(&caps[2]);
        let category = rules.resolve(&description).map(str::to_string);

        Some(StatementEntry {
            date: caps[1].to_string(),
            description,
            category,
            amount: Rupiah::parse_statement(&caps[3]),
            direction: caps.get(4).and_then(|m| Direction::from_token(m.as_str())),
            balance: caps.get(5).map(|m| Rupiah::parse_statement(m.as_str())),
        })
    }

    fn clean_description(&self, raw: &str) -> String {
        let mut description = raw.trim().to_string();
        for pattern in &self.cleanup {
            description = pattern.replace(&description, "").trim().to_string();
        }
        description
    }
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self::new()
    }
}
