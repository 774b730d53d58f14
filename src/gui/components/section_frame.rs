// src/gui/components/section_frame.rs
use eframe::egui;

use crate::gui::{ app::App, sections::Section };

/// Bordered card with the section title. Scrolls into view when it is the nav target.
pub fn draw(ui: &mut egui::Ui, app: &mut App, idx: usize, section: &dyn Section) {
    if app.state.gui.nav_target == Some(idx) {
        ui.scroll_to_cursor(Some(egui::Align::TOP));
        app.state.gui.nav_target = None;
    }

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading(section.title());
            ui.add_space(6.0);
            section.draw(ui, app);
        });
}
