//! Dompet Core - Multi-currency conversion and amount formatting.
//!
//! Every amount Dompet stores is denominated in the base currency (IDR);
//! this crate owns the pieces that turn stored amounts into what the user
//! sees and back:
//!
//! - [`fx::RateCache`] - fetches and caches base-relative exchange rates,
//!   with staleness tolerance, in-flight de-duplication, and
//!   fallback-on-failure
//! - [`fx::CurrencyConverter`] - converts amounts between the base currency
//!   and any display currency over the cache's current table
//! - [`formatting`] - per-currency display formatting and keystroke-level
//!   input normalization, with an exact format/parse round trip
//!
//! Nothing in here is fatal: a failed fetch degrades to the last-known
//! table, an unknown currency code passes amounts through 1:1, and
//! unparseable input becomes zero or the empty string. Currency display is
//! never allowed to block the rest of the application.

pub mod constants;
pub mod formatting;
pub mod fx;

// Re-export the facade types collaborators wire up
pub use fx::{CurrencyConverter, RateCache};
