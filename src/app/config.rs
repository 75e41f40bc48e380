use gtk::gdk;
use gtk4 as gtk;
use std::collections::HashMap;
use std::path::PathBuf;

/// Default location of the macOS screenshot tool
pub const DEFAULT_TOOL_PATH: &str = "/usr/sbin/screencapture";

/// Runtime settings for capturing and saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Executable launched to take a screenshot
    pub tool_path: PathBuf,
    /// JPEG encoder quality, 1-100
    pub jpeg_quality: u8,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tool_path: PathBuf::from(DEFAULT_TOOL_PATH),
            jpeg_quality: 90,
            default_width: 640,
            default_height: 560,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TakeScreenshot,
    Save,
    SwitchToFull,
    SwitchToWindow,
    SwitchToArea,
    TogglePreview,
    ShowShortcuts,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::TakeScreenshot,
        Action::Save,
        Action::SwitchToFull,
        Action::SwitchToWindow,
        Action::SwitchToArea,
        Action::TogglePreview,
        Action::ShowShortcuts,
    ];

    /// Whether the action changes the capture settings
    pub fn is_capture_setting(&self) -> bool {
        matches!(
            self,
            Action::SwitchToFull
                | Action::SwitchToWindow
                | Action::SwitchToArea
                | Action::TogglePreview
        )
    }

    pub fn label(&self) -> &str {
        match self {
            Action::TakeScreenshot => "Take a Screenshot",
            Action::Save => "Save Screenshot",
            Action::SwitchToFull => "Full Screen Mode",
            Action::SwitchToWindow => "Window Mode",
            Action::SwitchToArea => "Area Mode",
            Action::TogglePreview => "Toggle Display in Preview",
            Action::ShowShortcuts => "Keyboard Shortcuts",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: gdk::Key,
    pub modifiers: gdk::ModifierType,
}

#[derive(Debug, Clone)]
pub struct ShortcutConfig {
    bindings: HashMap<Action, Shortcut>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::TakeScreenshot,
            Shortcut {
                key: gdk::Key::t,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::Save,
            Shortcut {
                key: gdk::Key::s,
                modifiers: gdk::ModifierType::CONTROL_MASK,
            },
        );
        bindings.insert(
            Action::ShowShortcuts,
            Shortcut {
                key: gdk::Key::F1,
                modifiers: gdk::ModifierType::empty(),
            },
        );

        // Capture settings
        bindings.insert(
            Action::SwitchToFull,
            Shortcut {
                key: gdk::Key::f,
                modifiers: gdk::ModifierType::ALT_MASK,
            },
        );
        bindings.insert(
            Action::SwitchToWindow,
            Shortcut {
                key: gdk::Key::w,
                modifiers: gdk::ModifierType::ALT_MASK,
            },
        );
        bindings.insert(
            Action::SwitchToArea,
            Shortcut {
                key: gdk::Key::a,
                modifiers: gdk::ModifierType::ALT_MASK,
            },
        );
        bindings.insert(
            Action::TogglePreview,
            Shortcut {
                key: gdk::Key::p,
                modifiers: gdk::ModifierType::ALT_MASK,
            },
        );

        Self { bindings }
    }
}

impl ShortcutConfig {
    pub fn get_action(&self, key: gdk::Key, modifiers: gdk::ModifierType) -> Option<Action> {
        // Filter out lock modifiers like NumLock/CapsLock
        let mask = gdk::ModifierType::CONTROL_MASK
            | gdk::ModifierType::SHIFT_MASK
            | gdk::ModifierType::ALT_MASK
            | gdk::ModifierType::SUPER_MASK
            | gdk::ModifierType::META_MASK;

        let clean_mods = modifiers & mask;
        let key = key.to_lower();

        self.bindings
            .iter()
            .find(|(_, shortcut)| shortcut.key == key && shortcut.modifiers == clean_mods)
            .map(|(action, _)| *action)
    }

    pub fn get_shortcut_label(&self, action: Action) -> String {
        if let Some(sc) = self.shortcut(action) {
            return gtk::accelerator_get_label(sc.key, sc.modifiers).to_string();
        }
        String::new()
    }

    pub fn shortcut(&self, action: Action) -> Option<&Shortcut> {
        self.bindings.get(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tool_path, PathBuf::from("/usr/sbin/screencapture"));
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_every_action_is_bound() {
        let shortcuts = ShortcutConfig::default();
        for action in Action::ALL {
            assert!(shortcuts.shortcut(action).is_some(), "{:?} unbound", action);
        }
    }

    #[test]
    fn test_lookup_ignores_lock_modifiers() {
        let shortcuts = ShortcutConfig::default();
        let mods = gdk::ModifierType::CONTROL_MASK | gdk::ModifierType::LOCK_MASK;

        assert_eq!(
            shortcuts.get_action(gdk::Key::s, mods),
            Some(Action::Save)
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::S, mods),
            Some(Action::Save)
        );
    }

    #[test]
    fn test_lookup_requires_exact_modifiers() {
        let shortcuts = ShortcutConfig::default();
        assert_eq!(
            shortcuts.get_action(gdk::Key::s, gdk::ModifierType::empty()),
            None
        );
        assert_eq!(
            shortcuts.get_action(gdk::Key::p, gdk::ModifierType::ALT_MASK),
            Some(Action::TogglePreview)
        );
    }
}
