use std::time::Duration;

/// Time between scheduled refresh cycles (15 minutes)
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Upper bound for a single provider query
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Provider queries in flight at once during a refresh cycle
pub const DEFAULT_CONCURRENCY: usize = 4;
