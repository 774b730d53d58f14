// src/gui/components/footer.rs
use eframe::egui;

use crate::gui::sections::MUTED;

const DISCLAIMER: &str = "Prototype. Replace or expand schools.json with your full NCAA/NAIA database. \
All figures shown are for demonstration only.";

pub fn draw(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(DISCLAIMER).small().color(MUTED));
    });
    ui.add_space(12.0);
}
