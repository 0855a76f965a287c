//! Dompet Rates Crate
//!
//! This crate provides source-agnostic exchange-rate fetching for the
//! Dompet application.
//!
//! # Overview
//!
//! Everything Dompet stores is denominated in one base currency; display in
//! any other currency needs a quote table. This crate owns the outbound side
//! of that: the [`RateQuoteProvider`] trait and the concrete HTTP
//! implementation against ExchangeRate-API. Staleness, de-duplication, and
//! fallback policy live in the core crate's cache, not here — a provider's
//! only job is one fetch.
//!
//! # Core Types
//!
//! - [`RateQuoteProvider`] - Source-agnostic fetch trait
//! - [`ExchangeRateApiProvider`] - ExchangeRate-API v6 implementation
//! - [`RateTable`] - Currency code to rate mapping
//! - [`RatesError`] - Error enum for fetch failures

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{CurrencyCode, RateTable};

// Re-export error types
pub use errors::RatesError;

// Re-export provider types
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::RateQuoteProvider;
