//! PO number sequences, with and without a year segment.

use chrono::NaiveDate;
use pokit::core::*;

fn main() -> Result<(), DocumentError> {
    let mut plain = PoNumberSequence::starting_at("PO-", 998).with_padding(3);
    for _ in 0..3 {
        println!("{}", plain.next_number());
    }

    let mut yearly = PoNumberSequence::new("ACME-").with_year(2024);
    println!("{}", yearly.next_number());
    println!("{}", yearly.next_number());

    let new_year = NaiveDate::from_ymd_opt(2025, 1, 2).ok_or_else(|| {
        DocumentError::Builder("invalid date".into())
    })?;
    if yearly.auto_advance(new_year) {
        println!("advanced to {:?}", yearly.year());
    }
    println!("{}", yearly.next_number());

    // Going backwards is refused.
    if let Err(e) = yearly.advance_year(2023) {
        println!("error: {e}");
    }
    Ok(())
}
