//! Capture module for screenshot functionality
//!
//! The screenshot itself is taken by the operating system's screenshot tool,
//! which leaves its result on the shared clipboard. This module launches the
//! tool and reads the image back.

pub mod clipboard;
pub mod screencapture;

pub use clipboard::ClipboardReader;
pub use screencapture::{CaptureError, ScreenshotTool};
