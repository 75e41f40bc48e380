use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::gio;
use log::{error, warn};
use std::path::PathBuf;

use crate::export::ExportError;

const INITIAL_FILE_NAME: &str = "Screenshot.jpg";

pub fn show_not_found_alert(parent: &impl IsA<gtk::Widget>) {
    show_alert(
        parent,
        "Screenshot Not Found",
        "Take a screenshot and try again",
    );
}

pub fn show_save_error_alert(parent: &impl IsA<gtk::Widget>, err: &ExportError) {
    show_alert(parent, "Could Not Save Screenshot", &err.to_string());
}

fn show_alert(parent: &impl IsA<gtk::Widget>, heading: &str, body: &str) {
    let dialog = adw::AlertDialog::new(Some(heading), Some(body));
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(Some(parent));
}

fn jpeg_filter() -> gtk::FileFilter {
    let filter = gtk::FileFilter::new();
    filter.set_name(Some("JPEG Image"));
    filter.add_mime_type("image/jpeg");
    filter.add_suffix("jpg");
    filter.add_suffix("jpeg");
    filter
}

/// Ask the user where to save, `None` when the dialog is dismissed.
pub async fn choose_save_path(parent: &impl IsA<gtk::Window>) -> Option<PathBuf> {
    let filter = jpeg_filter();
    let filters = gio::ListStore::new::<gtk::FileFilter>();
    filters.append(&filter);

    let dialog = gtk::FileDialog::builder()
        .title("Save Screenshot")
        .accept_label("Save")
        .initial_name(INITIAL_FILE_NAME)
        .modal(true)
        .filters(&filters)
        .default_filter(&filter)
        .build();

    match dialog.save_future(Some(parent)).await {
        Ok(file) => local_save_target(file.path(), &file.uri()),
        Err(e) => {
            if !e.matches(gtk::DialogError::Dismissed) && !e.matches(gtk::DialogError::Cancelled)
            {
                error!("Save dialog failed: {}", e);
            }
            None
        }
    }
}

/// Only local files can be written; anything else is reported and dropped.
fn local_save_target(path: Option<PathBuf>, uri: &str) -> Option<PathBuf> {
    if path.is_none() {
        warn!("Save location {} is not a local file, nothing written", uri);
    }
    path
}
