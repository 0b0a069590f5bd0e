use serde::Serialize;

use super::money::Rupiah;

/// Debit/credit flag of a statement line. Some lines omit it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[serde(rename = "DB")]
    Debit,
    #[serde(rename = "CR")]
    Credit,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DB" => Some(Direction::Debit),
            "CR" => Some(Direction::Credit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Debit => "DB",
            Direction::Credit => "CR",
        }
    }
}

/// One parsed statement line.
///
/// Immutable value object; every entry corresponds to exactly one candidate
/// line that matched the transaction grammar. Field order here is the column
/// order the spreadsheet writer emits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementEntry {
    /// `DD/MM` as printed; BCA statements never print the year.
    pub date: String,
    /// Merchant/reference text with boilerplate markers stripped.
    pub description: String,
    /// First-match rule label, if any keyword hit.
    pub category: Option<String>,
    pub amount: Rupiah,
    #[serde(rename = "type")]
    pub direction: Option<Direction>,
    /// Running balance after the transaction, when the line carries one.
    pub balance: Option<Rupiah>,
}
