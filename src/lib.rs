// Loadout - persistent settings profiles for a real-time game overlay
//
// This is the library crate holding the settings tree, its JSON codecs and the
// config store. The binary crate (main.rs) provides a command-line front end.

pub mod config;
pub mod document;
pub mod fonts;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use fonts::{FontBackend, FontCatalog, FontHandle, FontSet};
pub use metrics::StoreMetrics;
pub use models::Settings;
pub use store::{ConfigStore, StoreError, StoreState};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
