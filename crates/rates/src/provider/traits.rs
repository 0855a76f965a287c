//! Rate-quote provider trait definition.

use async_trait::async_trait;

use crate::errors::RatesError;
use crate::models::RateTable;

/// Trait for exchange-rate quote sources.
///
/// Implement this trait to add support for a new rate source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use dompet_rates::{RateQuoteProvider, RateTable, RatesError};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl RateQuoteProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, RatesError> {
///         // ... one GET against the source
///     }
/// }
/// ```
#[async_trait]
pub trait RateQuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "EXCHANGE_RATE_API".
    /// Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the latest quotes for the given base currency.
    ///
    /// # Arguments
    ///
    /// * `base_currency` - ISO code the quotes are relative to
    ///
    /// # Returns
    ///
    /// A mapping from currency code to "how many units of that currency one
    /// unit of `base_currency` buys". The mapping may include the base
    /// currency itself (typically at 1); callers decide how to treat it.
    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, RatesError>;
}
