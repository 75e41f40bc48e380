//! Application state types
//!
//! This module contains the core state types for the screenshot application.
//! Nothing in here touches GTK, so every rule about what the held image and
//! the capture settings may do is checked by plain unit tests.

use log::debug;
use std::rc::Rc;

use crate::app::config::{AppConfig, ShortcutConfig};
use crate::app::CapturedImage;

/// Which region the screenshot tool captures
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureMode {
    /// Capture the entire screen
    #[default]
    Full,
    /// Capture a window picked by the user
    Window,
    /// Capture an area dragged out by the user
    Area,
}

impl CaptureMode {
    pub const ALL: [CaptureMode; 3] = [CaptureMode::Full, CaptureMode::Window, CaptureMode::Area];

    /// Command-line flag understood by the screenshot tool
    pub fn flag(self) -> &'static str {
        match self {
            CaptureMode::Full => "-c",
            CaptureMode::Window => "-cw",
            CaptureMode::Area => "-cs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaptureMode::Full => "Full",
            CaptureMode::Window => "Window",
            CaptureMode::Area => "Area",
        }
    }
}

/// Whether the screenshot tool should open its own preview after capture
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewToggle {
    #[default]
    No,
    Yes,
}

impl PreviewToggle {
    pub const ALL: [PreviewToggle; 2] = [PreviewToggle::No, PreviewToggle::Yes];

    /// Character appended to the mode flag when the preview is requested
    pub const FLAG_SUFFIX: char = 'P';

    pub fn is_enabled(self) -> bool {
        self == PreviewToggle::Yes
    }

    pub fn toggled(self) -> Self {
        match self {
            PreviewToggle::No => PreviewToggle::Yes,
            PreviewToggle::Yes => PreviewToggle::No,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PreviewToggle::No => "No",
            PreviewToggle::Yes => "Yes",
        }
    }
}

/// The two independent selections that drive a capture
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureSettings {
    pub mode: CaptureMode,
    pub preview: PreviewToggle,
}

impl CaptureSettings {
    pub fn new(mode: CaptureMode, preview: PreviewToggle) -> Self {
        Self { mode, preview }
    }

    /// The single argument passed to the screenshot tool
    pub fn flag(&self) -> String {
        let mut flag = self.mode.flag().to_string();
        if self.preview.is_enabled() {
            flag.push(PreviewToggle::FLAG_SUFFIX);
        }
        flag
    }
}

/// What a save request should do next
#[derive(Debug, Clone)]
pub enum SaveRequest {
    /// No image is held: tell the user, never open the save dialog
    NotFound,
    /// Ask for a path, then write `image` as JPEG at `quality`
    Prompt {
        image: Rc<CapturedImage>,
        quality: u8,
    },
}

/// Main application state
pub struct AppState {
    /// Current capture mode and preview selection
    pub settings: CaptureSettings,
    /// The most recent image read back from the clipboard
    pub image: Option<Rc<CapturedImage>>,
    /// Whether the screenshot tool is currently running
    pub is_capturing: bool,
    pub config: AppConfig,
    pub shortcuts: ShortcutConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            settings: CaptureSettings::new(CaptureMode::default(), PreviewToggle::default()),
            image: None,
            is_capturing: false,
            config,
            shortcuts: ShortcutConfig::default(),
        }
    }

    pub fn set_mode(&mut self, mode: CaptureMode) {
        self.settings.mode = mode;
    }

    pub fn set_preview(&mut self, preview: PreviewToggle) {
        self.settings.preview = preview;
    }

    /// Mark a capture as started, returning the settings to capture with.
    ///
    /// Returns `None` while another capture is still running.
    pub fn begin_capture(&mut self) -> Option<CaptureSettings> {
        if self.is_capturing {
            debug!("Capture already in progress");
            return None;
        }
        self.is_capturing = true;
        Some(self.settings)
    }

    pub fn finish_capture(&mut self) {
        self.is_capturing = false;
    }

    /// Store the image read back from the clipboard.
    ///
    /// `None` leaves whatever was held before untouched. Returns whether the
    /// held image changed.
    pub fn apply_clipboard_image(&mut self, image: Option<CapturedImage>) -> bool {
        match image {
            Some(image) => {
                debug!("Holding new {}x{} image", image.width(), image.height());
                self.image = Some(Rc::new(image));
                true
            }
            None => false,
        }
    }

    /// Decide how a save request proceeds. The held image is shared, not
    /// copied, with the pending save.
    pub fn save_request(&self) -> SaveRequest {
        match self.image {
            Some(ref image) => SaveRequest::Prompt {
                image: Rc::clone(image),
                quality: self.config.jpeg_quality,
            },
            None => SaveRequest::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn sample(width: u32, height: u32) -> CapturedImage {
        CapturedImage::new(RgbaImage::new(width, height)).unwrap()
    }

    #[test]
    fn test_mode_flags() {
        let flags: Vec<String> = CaptureMode::ALL
            .iter()
            .map(|&mode| CaptureSettings::new(mode, PreviewToggle::No).flag())
            .collect();

        assert_eq!(flags, ["-c", "-cw", "-cs"]);
    }

    #[test]
    fn test_preview_appends_one_character() {
        for mode in CaptureMode::ALL {
            let plain = CaptureSettings::new(mode, PreviewToggle::No).flag();
            let preview = CaptureSettings::new(mode, PreviewToggle::Yes).flag();

            assert_eq!(preview.len(), plain.len() + 1);
            assert!(preview.starts_with(&plain));
            assert!(preview.ends_with(PreviewToggle::FLAG_SUFFIX));
        }
    }

    #[test]
    fn test_defaults() {
        let state = AppState::new();
        assert_eq!(state.settings.mode, CaptureMode::Full);
        assert_eq!(state.settings.preview, PreviewToggle::No);
        assert!(state.image.is_none());
        assert!(!state.is_capturing);
    }

    #[test]
    fn test_toggle_preview() {
        let mut state = AppState::new();
        state.set_preview(state.settings.preview.toggled());
        assert_eq!(state.settings.flag(), "-cP");

        state.set_preview(state.settings.preview.toggled());
        assert_eq!(state.settings.preview, PreviewToggle::No);
    }

    #[test]
    fn test_empty_clipboard_keeps_no_image() {
        let mut state = AppState::new();
        assert!(!state.apply_clipboard_image(None));
        assert!(state.image.is_none());
    }

    #[test]
    fn test_empty_clipboard_keeps_previous_image() {
        let mut state = AppState::new();
        state.apply_clipboard_image(Some(sample(4, 3)));

        assert!(!state.apply_clipboard_image(None));
        assert_eq!(state.image.as_ref().map(|i| i.dimensions()), Some((4, 3)));
    }

    #[test]
    fn test_new_image_replaces_previous() {
        let mut state = AppState::new();
        state.apply_clipboard_image(Some(sample(4, 3)));

        assert!(state.apply_clipboard_image(Some(sample(8, 6))));
        assert_eq!(state.image.as_ref().map(|i| i.dimensions()), Some((8, 6)));
    }

    #[test]
    fn test_save_without_image_is_not_found() {
        let state = AppState::new();
        assert!(matches!(state.save_request(), SaveRequest::NotFound));
    }

    #[test]
    fn test_save_without_image_after_empty_capture() {
        let mut state = AppState::new();
        state.apply_clipboard_image(None);
        assert!(matches!(state.save_request(), SaveRequest::NotFound));
    }

    #[test]
    fn test_save_with_image_prompts_with_held_image() {
        let mut state = AppState::with_config(AppConfig {
            jpeg_quality: 75,
            ..AppConfig::default()
        });
        state.apply_clipboard_image(Some(sample(2, 2)));

        match state.save_request() {
            SaveRequest::Prompt { image, quality } => {
                assert_eq!(image.dimensions(), (2, 2));
                assert_eq!(quality, 75);
                assert!(Rc::ptr_eq(&image, state.image.as_ref().unwrap()));
            }
            SaveRequest::NotFound => panic!("expected a save prompt"),
        }
    }

    #[test]
    fn test_single_capture_at_a_time() {
        let mut state = AppState::new();
        state.set_mode(CaptureMode::Area);

        let settings = state.begin_capture();
        assert_eq!(settings.map(|s| s.flag()), Some("-cs".to_string()));
        assert!(state.begin_capture().is_none());

        state.finish_capture();
        assert!(state.begin_capture().is_some());
    }
}
