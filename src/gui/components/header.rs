// src/gui/components/header.rs
use eframe::egui;

use crate::{
    config::consts::{ APP_SUBTITLE, APP_TITLE },
    gui::{ app::App, sections::MUTED },
};
use super::{ action_buttons, tabs };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong(APP_TITLE);
            ui.label(egui::RichText::new(APP_SUBTITLE).small().color(MUTED));
        });
        ui.separator();
        tabs::draw(ui, app);
    });
    ui.separator();
    action_buttons::draw(ui, app);
    ui.add_space(4.0);
}
