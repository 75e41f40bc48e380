pub mod dialogs;
pub mod drawing;
pub mod handlers;
pub mod header;
pub mod settings;
pub mod shortcuts;

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{AppConfig, AppState};

pub fn build_ui(app: &adw::Application) {
    let config = AppConfig::default();
    let (default_width, default_height) = (config.default_width, config.default_height);
    let state = Rc::new(RefCell::new(AppState::with_config(config)));

    let header = header::create_header_bar();
    let settings = settings::create_settings_panel(&state);
    let drawing = drawing::create_drawing_area();

    let overlay = gtk::Overlay::builder()
        .child(&drawing.drawing_area)
        .vexpand(true)
        .build();
    overlay.add_overlay(&drawing.placeholder);

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&overlay);
    content.append(&gtk::Separator::new(Orientation::Horizontal));
    content.append(&settings.settings_box);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Snapshot Catcher")
        .content(&content)
        .default_width(default_width)
        .default_height(default_height)
        .build();

    let components = Rc::new(handlers::UiComponents {
        window: window.clone(),
        header,
        settings,
        drawing,
    });

    handlers::connect_all_handlers(&state, &components);

    window.present();
}
