//! Shared types for rate quotes.

use rust_decimal::Decimal;
use std::collections::HashMap;

/// Currency code (ISO 4217), e.g. "USD", "IDR".
pub type CurrencyCode = String;

/// Mapping from currency code to a positive rate value.
///
/// Which way the rate points depends on the side of the boundary: providers
/// return "1 base unit = N foreign units" quotes straight from the source,
/// while the core cache stores the reciprocal "1 foreign unit = N base units"
/// table. A table is replaced wholesale on refresh, never patched.
pub type RateTable = HashMap<CurrencyCode, Decimal>;
