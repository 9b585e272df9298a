#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use leessauce_core::logging::LoggingBuilder;
use leessauce_core::StoreConfig;

/// Global storefront settings, set from command line
static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

/// Get the storefront settings (set from command line or default)
pub fn get_config() -> StoreConfig {
    STORE_CONFIG.get().cloned().unwrap_or_default()
}

/// Lee's Sauce - Handcrafted Heat Since 2017
#[derive(Parser, Debug)]
#[command(name = "leessauce-desktop")]
#[command(about = "Lee's Sauce storefront - handcrafted hot sauce, ordered from your desktop")]
struct Args {
    /// Simulated order processing time in milliseconds
    #[arg(long, default_value_t = 1500)]
    submit_delay_ms: u64,

    /// Make every simulated order fail (shows the error toast)
    #[arg(long)]
    reject_orders: bool,

    /// Directory for the JSONL order audit trail
    #[arg(short, long)]
    log_dir: Option<PathBuf>,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long, default_value_t = 5000)]
    toast_ms: u64,
}

impl Args {
    fn into_config(self) -> StoreConfig {
        StoreConfig {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            reject_orders: self.reject_orders,
            toast_duration: Duration::from_millis(self.toast_ms),
            log_dir: self.log_dir,
            ..StoreConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    let mut logging = LoggingBuilder::new().with_filter(&config.log_filter);
    if let Some(ref dir) = config.log_dir {
        logging = logging.with_audit_dir(dir);
    }
    if let Some(path) = logging.init()? {
        tracing::info!("Order audit trail at {:?}", path);
    }

    tracing::info!(
        "Starting storefront (order delay {:?}, rejecting orders: {})",
        config.submit_delay,
        config.reject_orders
    );

    // Store settings globally
    let _ = STORE_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Lee's Sauce - Handcrafted Heat")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
