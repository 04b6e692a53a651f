pub mod config;
pub mod logging;
pub mod types;

pub use config::{BackendConfig, OpsmateConfig, UiConfig};
pub use types::{ChatMessage, PrRef, Sender, TrainingRecord};
