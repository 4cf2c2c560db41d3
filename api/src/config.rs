use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 10;
const DEFAULT_RATE_LIMIT_BURST: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path to a JSON array of spots; the reference spots are served when unset
    pub spots_file: Option<String>,
    /// Sustained requests per second per client IP on /spots (0 disables limiting)
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

/// Per-IP quota applied to the spots routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Sustained requests per second once the burst is spent
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimit {
    /// Time for one request of quota to come back.
    ///
    /// The governor is configured by replenish period, not by rate.
    pub fn replenish_interval(&self) -> Duration {
        let nanos = 1_000_000_000 / self.per_second.max(1);
        Duration::from_nanos(nanos.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            spots_file: None,
            rate_limit_per_second: DEFAULT_RATE_LIMIT_PER_SECOND,
            rate_limit_burst: DEFAULT_RATE_LIMIT_BURST,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port),
            spots_file: env::var("SPOTS_FILE").ok().filter(|p| !p.is_empty()),
            rate_limit_per_second: parse_var(
                "RATE_LIMIT_PER_SECOND",
                defaults.rate_limit_per_second,
            ),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),
        }
    }

    /// Where the spots come from: the dataset path, or `reference`
    pub fn dataset_source(&self) -> &str {
        self.spots_file.as_deref().unwrap_or("reference")
    }

    /// The configured rate limit, or `None` when limiting is switched off
    pub fn rate_limit(&self) -> Option<RateLimit> {
        if self.rate_limit_per_second == 0 {
            return None;
        }
        Some(RateLimit {
            per_second: self.rate_limit_per_second,
            burst_size: self.rate_limit_burst.max(1),
        })
    }
}

fn parse_var<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => parse_or(name, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + std::fmt::Display>(name: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Ignoring malformed {}={:?}, using default {}",
            name,
            raw,
            default
        );
        default
    })
}
