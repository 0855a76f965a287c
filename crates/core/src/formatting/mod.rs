//! Per-currency amount formatting and input parsing.
//!
//! Two related jobs: pretty-printing a known numeric value for read-only
//! display, and keeping a live, correctly punctuated text representation of
//! a number while the user types, with an exact round trip back to the
//! numeric value.
//!
//! Everything here is pure and synchronous, and parsing never fails - empty
//! or unparseable input becomes zero or the empty string, depending on the
//! operation.

mod amount;
mod currency;
mod profile;

pub use amount::{
    format_amount_input, format_display, format_raw_input, on_input_change, parse_amount_input,
};
pub use currency::{display_name, symbol_for};
pub use profile::{profile_for, FormatProfile};
