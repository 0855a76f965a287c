//! ExchangeRate-API rate-quote provider implementation.
//!
//! This module fetches quotes from the ExchangeRate-API v6 `latest`
//! endpoint: a single HTTPS GET per refresh, parameterized by the base
//! currency. The response nests the quote map under `conversion_rates`,
//! keyed by currency code with "1 base unit = N foreign units" values;
//! older payloads named the field `rates`, which is accepted as an alias.
//!
//! Note: the free tier refreshes its quotes once a day, which is far inside
//! the cache's staleness tolerance.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::RatesError;
use crate::models::RateTable;

use super::RateQuoteProvider;

const BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// ExchangeRate-API rate-quote provider.
pub struct ExchangeRateApiProvider {
    client: Client,
    api_key: String,
}

/// `latest` endpoint response.
///
/// On success `result` is `"success"` and `conversion_rates` holds the
/// quote map; on failure `result` is `"error"` and `error-type` names the
/// cause (e.g. `"invalid-key"`, `"quota-reached"`).
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default, alias = "rates")]
    conversion_rates: Option<RateTable>,
}

impl ExchangeRateApiProvider {
    /// Create a provider with its own HTTP client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Create a provider on a pre-built client, e.g. one shared with other
    /// outbound services.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl RateQuoteProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self, base_currency: &str) -> Result<RateTable, RatesError> {
        let url = format!("{}/{}/latest/{}", BASE_URL, self.api_key, base_currency);
        debug!("Fetching latest {} quotes from {}", base_currency, PROVIDER_ID);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RatesError::Status {
                provider: PROVIDER_ID,
                status: status.as_u16(),
            });
        }

        let body: LatestRatesResponse = response.json().await?;
        if body.result.as_deref() == Some("error") {
            return Err(RatesError::Provider {
                provider: PROVIDER_ID,
                message: body.error_type.unwrap_or_else(|| "unknown".to_string()),
            });
        }

        match body.conversion_rates {
            Some(rates) if !rates.is_empty() => Ok(rates),
            _ => Err(RatesError::MissingRates),
        }
    }
}
