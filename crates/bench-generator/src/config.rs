//! Generator configuration.
//!
//! Configuration arrives as string-keyed options (the shape the surrounding
//! benchmark harness passes through). Missing or malformed values fall back
//! to documented defaults rather than failing the provider; malformed input
//! is logged at warn level.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

/// Option key for the total row count.
pub const ROW_COUNT_KEY: &str = "table_row_count";

/// Option key for the number of services per application.
pub const SERVICES_PER_APP_KEY: &str = "service_num_per_app";

/// Option key for the RNG seed.
pub const SEED_KEY: &str = "seed";

/// Default total row count (10 billion).
pub const DEFAULT_ROW_COUNT: u64 = 10_000_000_000;

/// Default number of services per application (also the batch size).
pub const DEFAULT_SERVICES_PER_APP: usize = 20;

/// String-keyed provider options.
///
/// A thin wrapper over a string map with typed getters that never fail:
/// absent keys yield the default, unparseable values yield the default with
/// a warning.
#[derive(Debug, Clone, Default)]
pub struct ProviderOptions {
    options: HashMap<String, String>,
}

impl ProviderOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value for the key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Get a raw option value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|s| s.as_str())
    }

    /// Get an option parsed as `T`, falling back to `default` when the key
    /// is absent or the value does not parse.
    pub fn get_or<T: FromStr + Copy>(&self, key: &str, default: T) -> T {
        match self.options.get(key) {
            None => default,
            Some(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    warn!("Ignoring malformed value '{raw}' for option '{key}', using default");
                    default
                }
            },
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            options: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Configuration for the metrics workload generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Total number of rows the sequence yields.
    pub row_count: u64,
    /// Number of services per application; also the batch size.
    pub services_per_app: usize,
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            services_per_app: DEFAULT_SERVICES_PER_APP,
            seed: None,
        }
    }
}

impl MetricsConfig {
    /// Build a configuration from string-keyed options, applying defaults.
    ///
    /// A `services_per_app` of zero is treated as malformed (a batch must be
    /// non-empty) and replaced by the default.
    pub fn from_options(options: &ProviderOptions) -> Self {
        let row_count = options.get_or(ROW_COUNT_KEY, DEFAULT_ROW_COUNT);
        let mut services_per_app = options.get_or(SERVICES_PER_APP_KEY, DEFAULT_SERVICES_PER_APP);
        if services_per_app == 0 {
            warn!(
                "Ignoring zero value for option '{SERVICES_PER_APP_KEY}', \
                 using default {DEFAULT_SERVICES_PER_APP}"
            );
            services_per_app = DEFAULT_SERVICES_PER_APP;
        }
        let seed = options.get(SEED_KEY).and_then(|raw| match raw.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring malformed value '{raw}' for option '{SEED_KEY}'");
                None
            }
        });

        Self {
            row_count,
            services_per_app,
            seed,
        }
    }

    /// Set the total row count.
    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = row_count;
        self
    }

    /// Set the number of services per application.
    pub fn with_services_per_app(mut self, services_per_app: usize) -> Self {
        self.services_per_app = services_per_app;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
