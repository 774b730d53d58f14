// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use pcda_presenter::{
    config::{ options::AppOptions, state::GuiState },
    gui,
    log,
    schools::SchoolDirectory,
};

const ICON_SIZE: u32 = 32;

/// Accent-colored disc on a transparent background.
fn app_icon() -> IconData {
    let img = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let c = (ICON_SIZE as f32 - 1.0) / 2.0;
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        if dx * dx + dy * dy <= c * c {
            image::Rgba([0x26, 0xa8, 0xe0, 0xff])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    IconData { rgba: img.into_raw(), width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    let options = AppOptions::default();
    if let Err(e) = log::init(&options.log) {
        eprintln!("Logging disabled: {e}");
    }

    let directory = match SchoolDirectory::bundled() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Cannot load school directory: {e}");
            std::process::exit(1);
        }
    };

    let gui_defaults = GuiState::default();
    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options, directory) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
