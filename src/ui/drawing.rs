use gtk4 as gtk;
use libadwaita as adw;

use gtk::gdk;
use gtk::gdk_pixbuf::Pixbuf;
use gtk::DrawingArea;
use gtk4::prelude::*;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::CapturedImage;

const PLACEHOLDER_TEXT: &str = "No screenshots taken yet. For taking a screenshot, \
click on the \"Take a Screenshot\" button.";

pub struct DrawingComponents {
    pub drawing_area: DrawingArea,
    pub placeholder: adw::StatusPage,
    /// Pixbuf of the held image, rebuilt whenever the image changes
    pub preview: Rc<RefCell<Option<Pixbuf>>>,
}

impl DrawingComponents {
    pub fn show_image(&self, image: &CapturedImage) {
        self.preview.replace(Some(image_to_pixbuf(image)));
        self.placeholder.set_visible(false);
        self.drawing_area.queue_draw();
    }
}

pub fn create_drawing_area() -> DrawingComponents {
    let drawing_area = DrawingArea::builder().hexpand(true).vexpand(true).build();
    let preview: Rc<RefCell<Option<Pixbuf>>> = Rc::new(RefCell::new(None));

    setup_draw_function(&drawing_area, &preview);
    setup_drag_source(&drawing_area, &preview);

    let placeholder = adw::StatusPage::builder()
        .icon_name("image-x-generic-symbolic")
        .description(PLACEHOLDER_TEXT)
        .build();
    placeholder.add_css_class("compact");

    DrawingComponents {
        drawing_area,
        placeholder,
        preview,
    }
}

/// Convert the held RGBA image to a GDK Pixbuf
fn image_to_pixbuf(image: &CapturedImage) -> Pixbuf {
    let (width, height) = image.dimensions();
    let stride = width as i32 * 4; // RGBA = 4 bytes per pixel

    let bytes = gtk::glib::Bytes::from(image.pixels().as_raw());

    Pixbuf::from_bytes(
        &bytes,
        gtk::gdk_pixbuf::Colorspace::Rgb,
        true, // has_alpha
        8,    // bits_per_sample
        width as i32,
        height as i32,
        stride,
    )
}

fn setup_draw_function(drawing_area: &DrawingArea, preview: &Rc<RefCell<Option<Pixbuf>>>) {
    drawing_area.set_draw_func({
        let preview = preview.clone();
        move |_, cr, width, height| {
            draw_content(preview.borrow().as_ref(), cr, width, height);
        }
    });
}

fn draw_content(pixbuf: Option<&Pixbuf>, cr: &gtk::cairo::Context, width: i32, height: i32) {
    cr.set_source_rgb(0.14, 0.14, 0.14);
    cr.paint().expect("Invalid cairo surface state");

    let Some(pixbuf) = pixbuf else {
        return;
    };

    let da_width = width as f64;
    let da_height = height as f64;
    let img_width = pixbuf.width() as f64;
    let img_height = pixbuf.height() as f64;

    let scale = (da_width / img_width).min(da_height / img_height);
    let offset_x = (da_width - img_width * scale) / 2.0;
    let offset_y = (da_height - img_height * scale) / 2.0;

    cr.save().expect("Failed to save cairo context");
    cr.translate(offset_x, offset_y);
    cr.scale(scale, scale);
    cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
    cr.paint().expect("Failed to paint pixbuf");
    cr.restore().expect("Failed to restore cairo context");
}

/// Let the held image be dragged out into other applications
fn setup_drag_source(drawing_area: &DrawingArea, preview: &Rc<RefCell<Option<Pixbuf>>>) {
    let drag = gtk::DragSource::builder()
        .actions(gdk::DragAction::COPY)
        .build();

    drag.connect_prepare({
        let preview = preview.clone();
        move |_, _, _| {
            let preview = preview.borrow();
            let pixbuf = preview.as_ref()?;
            debug!("Dragging screenshot out of the window");
            let texture = gdk::Texture::for_pixbuf(pixbuf);
            Some(gdk::ContentProvider::for_value(&texture.to_value()))
        }
    });

    drawing_area.add_controller(drag);
}
