//! Runtime settings for the storefront.

use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by the order service, toasts and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long the simulated order service takes to answer.
    pub submit_delay: Duration,
    /// Make the simulated order service fail every order.
    pub reject_orders: bool,
    /// How long a toast stays on screen.
    pub toast_duration: Duration,
    /// Directory for the JSONL order audit trail. `None` disables it.
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl StoreConfig {
    pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);
    pub const DEFAULT_LOG_FILTER: &'static str = "leessauce=info,leessauce_core=info";
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            reject_orders: false,
            toast_duration: Self::DEFAULT_TOAST_DURATION,
            log_dir: None,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_behaviour() {
        let config = StoreConfig::default();
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert!(!config.reject_orders);
        assert!(config.log_dir.is_none());
    }
}
