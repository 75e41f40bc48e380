//! Application module
//!
//! This module contains the core application state and logic.

pub mod config;
mod captured;
mod state;

pub use captured::CapturedImage;
pub use config::{Action, AppConfig};
pub use state::{AppState, CaptureMode, CaptureSettings, PreviewToggle, SaveRequest};
