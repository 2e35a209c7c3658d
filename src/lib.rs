pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ClientSettings;
pub use core::app::{AppEvent, AppOutcome, PlacementApp, Snapshot};
pub use core::client::{ApiClient, ApiResponse, RequestOptions};
pub use domain::ports::PlacementApi;
pub use utils::error::{ClientError, Result};
