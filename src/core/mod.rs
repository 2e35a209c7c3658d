pub mod app;
pub mod client;
pub mod render;

pub use crate::domain::ports::{ConfigProvider, PlacementApi};
pub use crate::utils::error::Result;
