mod app;
mod capture;
mod export;
mod ui;

use libadwaita as adw;

use adw::prelude::*;
use log::info;

const APP_ID: &str = "org.example.SnapshotCatcher";

fn main() -> gtk4::glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting Snapshot Catcher");

    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(ui::build_ui);
    app.run()
}
