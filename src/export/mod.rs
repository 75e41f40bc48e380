//! Writing held screenshots to disk

pub mod jpeg;

pub use jpeg::{finish_save, ExportError, SaveOutcome};
