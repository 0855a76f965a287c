use std::sync::Arc;

use log::warn;
use rust_decimal::Decimal;

use crate::formatting;

use super::RateCache;

/// Converts amounts between the base currency and any display currency
/// using the cache's current table.
///
/// The converter reads snapshots only and never triggers a refresh;
/// staleness is the caller's concern (the scheduled refresh task, or an
/// explicit user-initiated refresh). Unknown currency codes convert 1:1
/// with a logged warning - a typo in a currency code must not take a
/// budgeting screen down with it.
pub struct CurrencyConverter {
    cache: Arc<RateCache>,
}

impl CurrencyConverter {
    pub fn new(cache: Arc<RateCache>) -> Self {
        Self { cache }
    }

    /// Converts `amount` in `from_currency` into the base currency.
    pub fn to_base(&self, amount: Decimal, from_currency: &str) -> Decimal {
        if from_currency == self.cache.base_currency() {
            return amount;
        }
        match self.cache.current_rates().get(from_currency) {
            Some(rate) => amount * rate,
            None => {
                warn!("No exchange rate for {}, converting 1:1", from_currency);
                amount
            }
        }
    }

    /// Converts `base_amount` into `to_currency`. Same unknown-currency
    /// policy as [`to_base`](Self::to_base).
    pub fn from_base(&self, base_amount: Decimal, to_currency: &str) -> Decimal {
        if to_currency == self.cache.base_currency() {
            return base_amount;
        }
        match self.cache.current_rates().get(to_currency) {
            Some(rate) => base_amount / rate,
            None => {
                warn!("No exchange rate for {}, converting 1:1", to_currency);
                base_amount
            }
        }
    }

    /// Converts between any two tracked currencies.
    ///
    /// Equal codes return the amount untouched, with no rate lookup or
    /// rounding. Cross-currency pairs route through the base - no direct
    /// cross-rate table is maintained.
    pub fn convert(&self, amount: Decimal, from_currency: &str, to_currency: &str) -> Decimal {
        if from_currency == to_currency {
            return amount;
        }
        let base = self.cache.base_currency();
        if to_currency == base {
            return self.to_base(amount, from_currency);
        }
        if from_currency == base {
            return self.from_base(amount, to_currency);
        }
        self.from_base(self.to_base(amount, from_currency), to_currency)
    }

    /// Formats `amount` for read-only display in `currency_code`.
    pub fn format(&self, amount: Decimal, currency_code: &str) -> String {
        formatting::format_display(amount, currency_code)
    }
}
