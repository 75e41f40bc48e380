use gtk4 as gtk;

use gtk::{Align, Orientation};
use gtk4::prelude::*;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{AppState, CaptureMode, PreviewToggle};

pub struct SettingsComponents {
    pub settings_box: gtk::Box,
    pub mode_buttons: Vec<(CaptureMode, gtk::ToggleButton)>,
    pub preview_buttons: Vec<(PreviewToggle, gtk::ToggleButton)>,
}

impl SettingsComponents {
    /// Activate the toggle for `mode`; its handler updates the state
    pub fn select_mode(&self, mode: CaptureMode) {
        if let Some((_, btn)) = self.mode_buttons.iter().find(|(m, _)| *m == mode) {
            btn.set_active(true);
        }
    }

    pub fn select_preview(&self, preview: PreviewToggle) {
        if let Some((_, btn)) = self.preview_buttons.iter().find(|(p, _)| *p == preview) {
            btn.set_active(true);
        }
    }
}

pub fn create_settings_panel(state: &Rc<RefCell<AppState>>) -> SettingsComponents {
    let current = state.borrow().settings;

    let title = gtk::Label::new(Some("Screenshot Settings"));
    title.add_css_class("title-3");

    let (mode_box, mode_buttons) =
        create_linked_toggles(&CaptureMode::ALL, current.mode, CaptureMode::label);
    let (preview_box, preview_buttons) =
        create_linked_toggles(&PreviewToggle::ALL, current.preview, PreviewToggle::label);

    connect_mode_toggles(state, &mode_buttons);
    connect_preview_toggles(state, &preview_buttons);

    let grid = gtk::Grid::builder()
        .row_spacing(10)
        .column_spacing(12)
        .halign(Align::Center)
        .build();
    grid.attach(&dim_label("Type:"), 0, 0, 1, 1);
    grid.attach(&mode_box, 1, 0, 1, 1);
    grid.attach(&dim_label("Display in Preview:"), 0, 1, 1, 1);
    grid.attach(&preview_box, 1, 1, 1, 1);

    let settings_box = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(12)
        .margin_top(15)
        .margin_bottom(18)
        .margin_start(15)
        .margin_end(15)
        .build();
    settings_box.append(&title);
    settings_box.append(&grid);

    SettingsComponents {
        settings_box,
        mode_buttons,
        preview_buttons,
    }
}

fn dim_label(text: &str) -> gtk::Label {
    let label = gtk::Label::builder().label(text).halign(Align::End).build();
    label.add_css_class("dim-label");
    label
}

fn create_linked_toggles<T: Copy + PartialEq>(
    items: &[T],
    current: T,
    label: fn(T) -> &'static str,
) -> (gtk::Box, Vec<(T, gtk::ToggleButton)>) {
    let linked = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .homogeneous(true)
        .build();
    linked.add_css_class("linked");

    let mut buttons: Vec<(T, gtk::ToggleButton)> = Vec::with_capacity(items.len());
    for &item in items {
        let btn = gtk::ToggleButton::builder().label(label(item)).build();
        if let Some((_, first)) = buttons.first() {
            btn.set_group(Some(first));
        }
        linked.append(&btn);
        buttons.push((item, btn));
    }

    if let Some((_, btn)) = buttons.iter().find(|(item, _)| *item == current) {
        btn.set_active(true);
    }

    (linked, buttons)
}

fn connect_mode_toggles(
    state: &Rc<RefCell<AppState>>,
    mode_buttons: &[(CaptureMode, gtk::ToggleButton)],
) {
    for (mode, btn) in mode_buttons {
        let mode = *mode;
        btn.connect_toggled({
            let state = state.clone();
            move |btn| {
                if btn.is_active() {
                    debug!("Capture mode set to {:?}", mode);
                    state.borrow_mut().set_mode(mode);
                }
            }
        });
    }
}

fn connect_preview_toggles(
    state: &Rc<RefCell<AppState>>,
    preview_buttons: &[(PreviewToggle, gtk::ToggleButton)],
) {
    for (preview, btn) in preview_buttons {
        let preview = *preview;
        btn.connect_toggled({
            let state = state.clone();
            move |btn| {
                if btn.is_active() {
                    debug!("Preview set to {:?}", preview);
                    state.borrow_mut().set_preview(preview);
                }
            }
        });
    }
}
