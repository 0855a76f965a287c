use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use dompet_rates::{RateQuoteProvider, RateTable};

use crate::constants::{BASE_CURRENCY, RATES_TTL_MINUTES};

/// The one refresh all concurrent callers await together.
type SharedRefresh = Shared<BoxFuture<'static, Arc<RateTable>>>;

/// Hardcoded defaults used before any successful fetch, or kept after a
/// failed fetch when no better data exists. Values are "1 unit = N IDR".
pub fn fallback_rates() -> RateTable {
    RateTable::from([
        ("USD".to_string(), dec!(15500)),
        ("EUR".to_string(), dec!(16800)),
        ("JPY".to_string(), dec!(100)),
        ("SGD".to_string(), dec!(11500)),
        ("AUD".to_string(), dec!(10200)),
        ("GBP".to_string(), dec!(19700)),
    ])
}

/// Cache snapshot for the UI ("rates last updated at ...", refresh spinner).
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatus {
    pub base_currency: String,
    pub last_updated: Option<DateTime<Utc>>,
    pub refreshing: bool,
    pub currency_count: usize,
}

struct CacheState {
    rates: Arc<RateTable>,
    last_fetched_at: Option<DateTime<Utc>>,
    in_flight: Option<SharedRefresh>,
}

/// Caches base-relative exchange rates with a staleness window.
///
/// One instance is shared by every conversion in the application: the
/// composition root constructs it against a [`RateQuoteProvider`] and hands
/// out an `Arc`. The cache starts on the hardcoded fallback table and
/// degrades back to the last-known table whenever a fetch fails, so
/// [`refresh_rates`](Self::refresh_rates) never errors.
pub struct RateCache {
    provider: Arc<dyn RateQuoteProvider>,
    base_currency: String,
    ttl: Duration,
    state: Arc<Mutex<CacheState>>,
}

impl RateCache {
    /// Cache with the application defaults: IDR base and the hardcoded
    /// fallback table.
    pub fn new(provider: Arc<dyn RateQuoteProvider>) -> Self {
        Self::with_fallback(provider, BASE_CURRENCY, fallback_rates())
    }

    /// Cache with an explicit base currency and fallback table.
    pub fn with_fallback(
        provider: Arc<dyn RateQuoteProvider>,
        base_currency: impl Into<String>,
        fallback: RateTable,
    ) -> Self {
        Self {
            provider,
            base_currency: base_currency.into(),
            ttl: Duration::minutes(RATES_TTL_MINUTES),
            state: Arc::new(Mutex::new(CacheState {
                rates: Arc::new(fallback),
                last_fetched_at: None,
                in_flight: None,
            })),
        }
    }

    /// Overrides the staleness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// Current table snapshot, without touching the network.
    pub fn current_rates(&self) -> Arc<RateTable> {
        Arc::clone(&lock_state(&self.state).rates)
    }

    /// When the table was last replaced by a successful fetch.
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        lock_state(&self.state).last_fetched_at
    }

    /// Whether a fetch is outstanding right now.
    pub fn is_refreshing(&self) -> bool {
        lock_state(&self.state).in_flight.is_some()
    }

    pub fn status(&self) -> CacheStatus {
        let state = lock_state(&self.state);
        CacheStatus {
            base_currency: self.base_currency.clone(),
            last_updated: state.last_fetched_at,
            refreshing: state.in_flight.is_some(),
            currency_count: state.rates.len() + 1,
        }
    }

    /// Base currency code plus every currency in the current table.
    pub fn available_currency_codes(&self) -> Vec<String> {
        let rates = self.current_rates();
        let mut codes: Vec<String> = rates.keys().cloned().collect();
        codes.sort_unstable();
        codes.insert(0, self.base_currency.clone());
        codes
    }

    /// Returns a fresh-enough rate table, fetching only when needed.
    ///
    /// Inside the staleness window this is a plain cache read. When a
    /// refresh is already in flight the caller awaits that refresh instead
    /// of starting a second one, so at most one fetch is ever outstanding.
    /// A failed fetch logs, keeps the previous table, and does not advance
    /// the fetch timestamp - the next caller retries immediately instead of
    /// waiting out the window.
    pub async fn refresh_rates(&self) -> Arc<RateTable> {
        let refresh = {
            let mut state = lock_state(&self.state);
            if let Some(at) = state.last_fetched_at {
                if Utc::now() - at < self.ttl && !state.rates.is_empty() {
                    return Arc::clone(&state.rates);
                }
            }
            match state.in_flight.clone() {
                Some(in_flight) => in_flight,
                None => {
                    let refresh = Self::run_refresh(
                        Arc::clone(&self.provider),
                        self.base_currency.clone(),
                        Arc::clone(&self.state),
                    )
                    .boxed()
                    .shared();
                    state.in_flight = Some(refresh.clone());
                    refresh
                }
            }
        };
        refresh.await
    }

    /// The single in-flight fetch behind [`refresh_rates`](Self::refresh_rates).
    ///
    /// Clears the in-flight handle on both outcomes before resolving, so a
    /// failed fetch never wedges future refreshes.
    async fn run_refresh(
        provider: Arc<dyn RateQuoteProvider>,
        base_currency: String,
        state: Arc<Mutex<CacheState>>,
    ) -> Arc<RateTable> {
        match provider.latest_rates(&base_currency).await {
            Ok(quotes) => {
                let table = Arc::new(invert_quotes(quotes, &base_currency));
                debug!("Refreshed {} exchange rates", table.len());
                let mut state = lock_state(&state);
                state.rates = Arc::clone(&table);
                state.last_fetched_at = Some(Utc::now());
                state.in_flight = None;
                table
            }
            Err(e) => {
                warn!("Exchange rate fetch failed, keeping previous table: {}", e);
                let mut state = lock_state(&state);
                state.in_flight = None;
                Arc::clone(&state.rates)
            }
        }
    }
}

// A poisoned lock still holds a valid table; recover it.
fn lock_state(state: &Mutex<CacheState>) -> MutexGuard<'_, CacheState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Flips provider quotes ("1 base = X foreign") into the cached orientation
/// ("1 foreign = Y base"). The base currency itself and non-positive quotes
/// are dropped, keeping the table's all-positive invariant.
fn invert_quotes(quotes: RateTable, base_currency: &str) -> RateTable {
    quotes
        .into_iter()
        .filter(|(code, quote)| code != base_currency && *quote > Decimal::ZERO)
        .map(|(code, quote)| (code, Decimal::ONE / quote))
        .collect()
}
