// src/gui/components/tabs.rs
//
// Section navigation. Clicking a tab only records the target; the
// section frame scrolls itself into view on the next layout pass.

use eframe::egui;

use crate::gui::{ app::App, router };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for (idx, section) in router::all_sections().iter().enumerate() {
            let pending = app.state.gui.nav_target == Some(idx);
            if ui.selectable_label(pending, router::nav_label(*section)).clicked() {
                logd!("UI: Navigate → {}", section.title());
                app.state.gui.nav_target = Some(idx);
            }
        }
    });
}
