// src/gui/components/school_card.rs
use eframe::egui::{ self, Color32 };

use crate::{ format::currency, gui::sections::MUTED, schools::SchoolRecord };

const BADGE_FG: Color32 = Color32::from_rgb(0x03, 0x69, 0xa1);
const BADGE_BG: Color32 = Color32::from_rgb(0xee, 0xf8, 0xfd);

pub fn draw(ui: &mut egui::Ui, school: &SchoolRecord) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.strong(&school.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::Frame::new()
                        .fill(BADGE_BG)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(&school.level).small().color(BADGE_FG));
                        });
                });
            });
            ui.label(egui::RichText::new(&school.location).color(MUTED));
            ui.add_space(6.0);

            ui.columns(2, |cols| {
                cols[0].label(egui::RichText::new("Estimated Cost of Attendance").small().color(MUTED));
                cols[0].strong(currency(school.cost));
                cols[1].label(egui::RichText::new("Average Class Size").small().color(MUTED));
                cols[1].strong(school.avg_class_size.to_string());
            });

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Previous 2 Years College Soccer Record").small().color(MUTED));
            ui.horizontal_wrapped(|ui| {
                for (season, record) in &school.records {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(season).small().color(MUTED));
                            ui.strong(record);
                        });
                    });
                }
            });
        });
}
