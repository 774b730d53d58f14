// src/gui/sections/colleges.rs
use eframe::egui;

use crate::gui::{ app::App, components::school_card };
use super::{ Section, MUTED };

pub struct Colleges;
pub static SECTION: Colleges = Colleges;

impl Section for Colleges {
    fn title(&self) -> &'static str { "III. College Selection & Data Display" }
    fn nav_label(&self) -> Option<&'static str> { Some("Colleges") }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let selected = app.directory.resolve(&app.session.form().schools);
        if selected.is_empty() {
            ui.label(egui::RichText::new("Select one or more schools above to see details.").color(MUTED));
            return;
        }

        // Two cards per row
        for pair in selected.chunks(2) {
            ui.columns(2, |cols| {
                for (col, school) in cols.iter_mut().zip(pair) {
                    school_card::draw(col, school);
                }
            });
            ui.add_space(8.0);
        }
    }
}
