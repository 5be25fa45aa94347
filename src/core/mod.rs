//! Core purchase-order types, totals, formatting and numbering.
//!
//! Everything here is pure: no I/O, no shared mutable state. The exporters in
//! [`crate::pdf`] and [`crate::docx`] build on these helpers so totals and
//! display text are identical across formats.

mod builder;
mod config;
pub mod currencies;
mod error;
mod format;
pub mod layout;
mod numbering;
mod totals;
mod types;

pub use builder::*;
pub use config::*;
pub use currencies::{currency_symbol, format_money};
pub use error::*;
pub use format::*;
pub use numbering::*;
pub use totals::*;
pub use types::*;
