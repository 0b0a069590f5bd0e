use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

/// Whole-rupiah amount as it appears in a BCA statement column.
///
/// Statement columns always print two fractional digits ("150.000,00");
/// normalization drops them, so the canonical value is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rupiah(i64);

impl Rupiah {
    pub fn new(value: i64) -> Self {
        Rupiah(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn zero() -> Self {
        Rupiah(0)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Parse a statement-formatted number ("1.200.000,00").
    ///
    /// Grouping and fraction separators are ambiguous in the source, so every
    /// non-digit is dropped and the last two digits are taken as the implied
    /// fraction. Assumes the source always prints exactly two fractional
    /// digits; a format without them would come out scaled by 100.
    /// Unparseable or empty digit strings count as zero.
    pub fn parse_statement(raw: &str) -> Self {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        let minor = digits.parse::<i64>().unwrap_or(0);
        Rupiah(minor / 100)
    }
}

impl fmt::Display for Rupiah {
    /// id-ID grouping: dot every three digits, no fractional part.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                f.write_str(".")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Rupiah {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Add for Rupiah {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Rupiah(self.0 + rhs.0)
    }
}

impl Sub for Rupiah {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Rupiah(self.0 - rhs.0)
    }
}

/// Canonical display form of a raw statement number.
///
/// Empty input yields an empty string: this is how "no balance column" is
/// kept distinct from "balance is zero".
pub fn normalize_amount(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    Rupiah::parse_statement(raw).to_string()
}
