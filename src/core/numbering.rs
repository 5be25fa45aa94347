use chrono::{Datelike, NaiveDate};

use super::error::DocumentError;

/// Purchase-order number sequence.
///
/// Produces `{prefix}{counter}` (e.g. "PO-0001") or, with a year segment,
/// `{prefix}{year}-{counter}` (e.g. "PO-2024-0001"). Year-scoped sequences
/// reset the counter when a new year starts.
#[derive(Debug, Clone)]
pub struct PoNumberSequence {
    prefix: String,
    year: Option<i32>,
    next_number: u64,
    zero_pad: usize,
}

impl PoNumberSequence {
    /// Create a sequence starting at 1 without a year segment.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            year: None,
            next_number: 1,
            zero_pad: 4,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, next_number: u64) -> Self {
        Self {
            next_number,
            ..Self::new(prefix)
        }
    }

    /// Scope the sequence to a year ("PO-2024-0001").
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    /// Generate the next PO number.
    pub fn next_number(&mut self) -> String {
        let formatted = self.format(self.next_number);
        self.next_number += 1;
        formatted
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    /// Year segment, if the sequence is year-scoped.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Next raw counter value.
    pub fn next_raw(&self) -> u64 {
        self.next_number
    }

    /// Move a year-scoped sequence to a later year, resetting the counter.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), DocumentError> {
        match self.year {
            None => Err(DocumentError::Builder(
                "sequence has no year segment to advance".into(),
            )),
            Some(current) if new_year <= current => Err(DocumentError::Builder(format!(
                "new year {new_year} must be greater than current year {current}"
            ))),
            Some(_) => {
                self.year = Some(new_year);
                self.next_number = 1;
                Ok(())
            }
        }
    }

    /// Reset a year-scoped sequence if `date` falls in a later year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        match self.year {
            Some(current) if date.year() > current => {
                self.year = Some(date.year());
                self.next_number = 1;
                true
            }
            _ => false,
        }
    }

    fn format(&self, number: u64) -> String {
        match self.year {
            Some(year) => format!(
                "{}{}-{:0>width$}",
                self.prefix,
                year,
                number,
                width = self.zero_pad
            ),
            None => format!("{}{:0>width$}", self.prefix, number, width = self.zero_pad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_numbering() {
        let mut seq = PoNumberSequence::new("PO-");
        assert_eq!(seq.next_number(), "PO-0001");
        assert_eq!(seq.next_number(), "PO-0002");
        assert_eq!(seq.next_raw(), 3);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = PoNumberSequence::new("MRO-");
        assert_eq!(seq.peek(), "MRO-0001");
        assert_eq!(seq.peek(), "MRO-0001");
        assert_eq!(seq.next_number(), "MRO-0001");
        assert_eq!(seq.peek(), "MRO-0002");
    }

    #[test]
    fn starting_at() {
        let mut seq = PoNumberSequence::starting_at("PO-", 128);
        assert_eq!(seq.next_number(), "PO-0128");
        let mut seq = PoNumberSequence::starting_at("EU-", 5801).with_padding(3);
        assert_eq!(seq.next_number(), "EU-5801");
    }

    #[test]
    fn year_scoped_sequence() {
        let mut seq = PoNumberSequence::new("PO-").with_year(2024);
        assert_eq!(seq.next_number(), "PO-2024-0001");
        seq.advance_year(2025).unwrap();
        assert_eq!(seq.year(), Some(2025));
        assert_eq!(seq.next_number(), "PO-2025-0001");
    }

    #[test]
    fn year_advance_rejects_past_and_unscoped() {
        let mut seq = PoNumberSequence::new("PO-").with_year(2024);
        assert!(seq.advance_year(2023).is_err());
        assert!(seq.advance_year(2024).is_err());
        assert!(PoNumberSequence::new("PO-").advance_year(2025).is_err());
    }

    #[test]
    fn auto_advance_year() {
        let mut seq = PoNumberSequence::new("PO-").with_year(2024);
        seq.next_number();

        let jan_2025 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(seq.auto_advance(jan_2025));
        assert_eq!(seq.next_number(), "PO-2025-0001");

        let feb_2025 = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert!(!seq.auto_advance(feb_2025));
        assert_eq!(seq.next_number(), "PO-2025-0002");

        let mut unscoped = PoNumberSequence::new("PO-");
        assert!(!unscoped.auto_advance(jan_2025));
    }
}
