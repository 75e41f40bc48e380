use adw::prelude::*;
use gtk4 as gtk;
use libadwaita as adw;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{Action, AppState};

pub fn show_shortcuts_dialog(state: &Rc<RefCell<AppState>>, parent: &impl IsA<gtk::Window>) {
    let window = adw::PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Keyboard Shortcuts")
        .default_width(420)
        .default_height(460)
        .search_enabled(false)
        .build();

    let page = adw::PreferencesPage::new();
    window.add(&page);

    let group_general = adw::PreferencesGroup::builder().title("General").build();
    let group_settings = adw::PreferencesGroup::builder()
        .title("Screenshot Settings")
        .build();

    for action in Action::ALL {
        if action.is_capture_setting() {
            add_action_row(state, &group_settings, action);
        } else {
            add_action_row(state, &group_general, action);
        }
    }

    page.add(&group_general);
    page.add(&group_settings);

    window.present();
}

fn add_action_row(state: &Rc<RefCell<AppState>>, group: &adw::PreferencesGroup, action: Action) {
    let shortcut_label = state.borrow().shortcuts.get_shortcut_label(action);

    let row = adw::ActionRow::builder().title(action.label()).build();

    let accel = gtk::Label::builder()
        .label(&shortcut_label)
        .valign(gtk::Align::Center)
        .build();
    accel.add_css_class("dim-label");

    if shortcut_label.is_empty() {
        accel.set_label("Disabled");
    }

    row.add_suffix(&accel);
    group.add(&row);
}
