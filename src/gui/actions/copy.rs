// src/gui/actions/copy.rs
use eframe::egui;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let layout = app.state.options.export.csv_layout;
    match super::summary_csv(app, layout) {
        Ok(txt) => {
            logf!("Copy: layout={:?}, bytes={}", layout, txt.len());
            ui_ctx.copy_text(txt);
            app.status("Copied summary to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
