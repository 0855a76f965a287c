/// Currency all amounts are stored in
pub const BASE_CURRENCY: &str = "IDR";

/// How long a fetched rate table is reused before a new fetch is attempted
pub const RATES_TTL_MINUTES: i64 = 30;

/// Period of the background rate refresh task
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60 * 60);
