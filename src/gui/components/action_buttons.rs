// src/gui/components/action_buttons.rs

use eframe::egui::{ self, widgets::Spinner };

use crate::{
    config::options::CsvLayout,
    file,
    gui::{ actions, app::{ App, PdfPurpose }, sections::ACCENT },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output folder + CSV layout ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(260.0))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }

        ui.separator();
        ui.label("CSV:");
        let layout = &mut app.state.options.export.csv_layout;
        let before = *layout;
        ui.selectable_value(layout, CsvLayout::Wide, CsvLayout::Wide.label());
        ui.selectable_value(layout, CsvLayout::KeyValue, CsvLayout::KeyValue.label());
        if *layout != before {
            logf!("UI: CSV layout → {:?}", layout);
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // --- Actions ---
    ui.horizontal(|ui| {
        let idle = !app.pdf_busy();

        if ui.add_enabled(idle, egui::Button::new("Print / Save PDF")).clicked() {
            actions::request_pdf(app, ui.ctx(), PdfPurpose::Print);
        }

        let csv = egui::Button::new(egui::RichText::new("Download CSV").color(egui::Color32::WHITE)).fill(ACCENT);
        if ui.add(csv).clicked() {
            actions::export_csv(app);
        }

        let pdf = egui::Button::new(egui::RichText::new("Download PDF").color(ACCENT))
            .stroke(egui::Stroke::new(1.0, ACCENT));
        if ui.add_enabled(idle, pdf).clicked() {
            actions::request_pdf(app, ui.ctx(), PdfPurpose::Download);
        }

        if ui.button("Copy").on_hover_text("Copy the CSV summary").clicked() {
            actions::copy(app, ui.ctx());
        }

        if !idle {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}

/// Open the output folder in the system file explorer.
fn open_output_folder(app: &mut App) {
    actions::apply_out_dir(app);

    let folder = file::find_nearest_existing_parent(app.state.options.export.out_dir());
    let absolute = match std::fs::canonicalize(&folder) {
        Ok(p) => p,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    match file::open_in_system_viewer(&absolute) {
        Ok(()) => logf!("Opened folder: {}", absolute.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.status(format!("Failed to open folder: {}", e));
        }
    }
}
