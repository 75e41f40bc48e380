use gtk::{gio, glib};
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, error, info, warn};

use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{Action, AppState, CaptureMode, SaveRequest};
use crate::capture::{CaptureError, ClipboardReader, ScreenshotTool};
use crate::export::{finish_save, SaveOutcome};
use crate::ui::dialogs;
use crate::ui::drawing::DrawingComponents;
use crate::ui::header::HeaderComponents;
use crate::ui::settings::SettingsComponents;
use crate::ui::shortcuts::show_shortcuts_dialog;

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub header: HeaderComponents,
    pub settings: SettingsComponents,
    pub drawing: DrawingComponents,
}

pub fn connect_screenshot_handler(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    components.header.take_screenshot_btn.connect_clicked({
        let state = state.clone();
        let components = components.clone();
        move |_| start_capture(&state, &components)
    });
}

pub fn connect_save_handler(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    components.header.save_btn.connect_clicked({
        let state = state.clone();
        let components = components.clone();
        move |_| request_save(&state, &components)
    });
}

pub fn connect_shortcuts_handler(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    components.header.shortcuts_btn.connect_clicked({
        let state = state.clone();
        let window = components.window.clone();
        move |_| show_shortcuts_dialog(&state, &window)
    });
}

pub fn connect_key_handler(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    let keys = gtk::EventControllerKey::new();

    keys.connect_key_pressed({
        let state = state.clone();
        let components = components.clone();
        move |_, key, _, modifiers| {
            let action = state.borrow().shortcuts.get_action(key, modifiers);
            match action {
                Some(action) => {
                    debug!("Shortcut triggered: {:?}", action);
                    run_action(&state, &components, action);
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        }
    });

    components.window.add_controller(keys);
}

fn run_action(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>, action: Action) {
    match action {
        Action::TakeScreenshot => start_capture(state, components),
        Action::Save => request_save(state, components),
        Action::SwitchToFull => components.settings.select_mode(CaptureMode::Full),
        Action::SwitchToWindow => components.settings.select_mode(CaptureMode::Window),
        Action::SwitchToArea => components.settings.select_mode(CaptureMode::Area),
        Action::TogglePreview => {
            let preview = state.borrow().settings.preview.toggled();
            components.settings.select_preview(preview);
        }
        Action::ShowShortcuts => show_shortcuts_dialog(state, &components.window),
    }
}

/// Run the screenshot tool off the main thread, then pick up its result
/// from the clipboard.
pub fn start_capture(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    let (settings, tool) = {
        let mut s = state.borrow_mut();
        let Some(settings) = s.begin_capture() else {
            return;
        };
        (settings, ScreenshotTool::new(s.config.tool_path.clone()))
    };

    info!("Taking screenshot: {} {}", tool.path().display(), settings.flag());
    components.header.take_screenshot_btn.set_sensitive(false);

    let state = state.clone();
    let components = components.clone();
    glib::spawn_future_local(async move {
        let result = gio::spawn_blocking(move || tool.run(&settings))
            .await
            .unwrap_or(Err(CaptureError::Worker));

        match result {
            Ok(()) => load_clipboard_image(&state, &components).await,
            Err(e) => error!("Could not take screenshot: {}", e),
        }

        state.borrow_mut().finish_capture();
        components.header.take_screenshot_btn.set_sensitive(true);
    });
}

async fn load_clipboard_image(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    let reader = ClipboardReader::from_widget(&components.window);
    let image = match reader.read_image().await {
        Ok(image) => image,
        Err(e) => {
            debug!("No screenshot picked up from clipboard: {}", e);
            None
        }
    };

    let mut s = state.borrow_mut();
    if s.apply_clipboard_image(image) {
        if let Some(ref image) = s.image {
            components.drawing.show_image(image);
        }
    } else {
        debug!("Clipboard unchanged, keeping current screenshot");
    }
}

/// Save the held image as JPEG, or tell the user there is nothing to save.
pub fn request_save(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    let request = state.borrow().save_request();
    let (image, quality) = match request {
        SaveRequest::Prompt { image, quality } => (image, quality),
        SaveRequest::NotFound => {
            warn!("Save requested with no screenshot held");
            dialogs::show_not_found_alert(&components.window);
            return;
        }
    };

    let components = components.clone();
    glib::spawn_future_local(async move {
        let choice = dialogs::choose_save_path(&components.window).await;

        match finish_save(&image, choice, quality) {
            Ok(SaveOutcome::Saved(path)) => debug!("Save finished: {:?}", path),
            Ok(SaveOutcome::Cancelled) => debug!("Save cancelled"),
            Err(e) => {
                error!("Could not save screenshot: {}", e);
                dialogs::show_save_error_alert(&components.window, &e);
            }
        }
    });
}

pub fn connect_all_handlers(state: &Rc<RefCell<AppState>>, components: &Rc<UiComponents>) {
    debug!("Initializing UI handlers");
    connect_screenshot_handler(state, components);
    connect_save_handler(state, components);
    connect_shortcuts_handler(state, components);
    connect_key_handler(state, components);
}
