use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub take_screenshot_btn: gtk::Button,
    pub save_btn: gtk::Button,
    pub shortcuts_btn: gtk::Button,
}

pub fn create_header_bar() -> HeaderComponents {
    let take_screenshot_btn = gtk::Button::builder()
        .label("Take a Screenshot")
        .tooltip_text("Take a Screenshot")
        .build();
    take_screenshot_btn.add_css_class("suggested-action");

    let save_btn = gtk::Button::builder()
        .label("Save Screenshot")
        .tooltip_text("Save Screenshot")
        .build();
    save_btn.add_css_class("suggested-action");

    let shortcuts_btn = gtk::Button::builder()
        .icon_name("preferences-desktop-keyboard-shortcuts-symbolic")
        .tooltip_text("Keyboard Shortcuts")
        .build();

    let title = adw::WindowTitle::new("Snapshot Catcher", "");

    let header_bar = adw::HeaderBar::builder().title_widget(&title).build();
    header_bar.pack_start(&take_screenshot_btn);
    header_bar.pack_end(&shortcuts_btn);
    header_bar.pack_end(&save_btn);

    HeaderComponents {
        header_bar,
        take_screenshot_btn,
        save_btn,
        shortcuts_btn,
    }
}
