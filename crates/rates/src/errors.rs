//! Error types for the rates crate.

use thiserror::Error;

/// Errors that can occur while fetching rate quotes.
///
/// None of these variants reach application code: the core cache absorbs
/// every failed fetch into its fallback policy and logs the error text.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The HTTP request failed in transit (connect, TLS, body decode).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Unexpected status {status} from {provider}")]
    Status {
        /// The provider that returned the status
        provider: &'static str,
        /// The HTTP status code
        status: u16,
    },

    /// The provider reported an application-level error in its payload.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: &'static str,
        /// The error message from the provider
        message: String,
    },

    /// The response parsed but carried no usable rate mapping.
    #[error("Response missing rate table")]
    MissingRates,
}
