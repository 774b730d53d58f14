// src/gui/components/school_picker.rs
//
// Search box, selected-school tags and the filtered directory table.
// Selection changes go straight to the session store.

use eframe::egui;
use egui_extras::{ Column, TableBuilder };

use crate::{
    gui::{ app::App, sections::MUTED },
    schools::filter_schools,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut toggled: Option<String> = None;
    let mut removed: Option<String> = None;

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.school_query)
                .hint_text("Search schools...")
                .desired_width(320.0),
        );
        if !app.session.form().schools.is_empty() && ui.small_button("Clear selection").clicked() {
            logf!("UI: Selection cleared");
            app.session.update(|f| f.schools.clear());
        }
    });

    // Tags in the order they were picked
    let tags = app.directory.resolve_in_selection_order(&app.session.form().schools);
    if !tags.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for school in tags {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::symmetric(6, 2))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(&school.name);
                            if ui.small_button("×").on_hover_text(format!("Remove {}", school.name)).clicked() {
                                removed = Some(school.id.clone());
                            }
                        });
                    });
            }
        });
    }

    let matches = filter_schools(&app.directory, &app.state.gui.school_query);
    if matches.is_empty() {
        ui.label(egui::RichText::new("No matches.").color(MUTED));
    } else {
        let selection = &app.session.form().schools;
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;

        TableBuilder::new(ui)
            .id_salt("school_picker")
            .striped(true)
            .max_scroll_height(220.0)
            .column(Column::exact(24.0))
            .column(Column::initial(260.0).resizable(true))
            .column(Column::initial(90.0))
            .column(Column::remainder())
            .header(row_h, |mut header| {
                header.col(|_| {});
                header.col(|ui| { ui.strong("School"); });
                header.col(|ui| { ui.strong("Level"); });
                header.col(|ui| { ui.strong("Location"); });
            })
            .body(|mut body| {
                for school in &matches {
                    body.row(row_h, |mut row| {
                        row.col(|ui| {
                            let mut checked = selection.contains(&school.id);
                            if ui.checkbox(&mut checked, "").changed() {
                                toggled = Some(school.id.clone());
                            }
                        });
                        row.col(|ui| {
                            if ui.selectable_label(selection.contains(&school.id), &school.name).clicked() {
                                toggled = Some(school.id.clone());
                            }
                        });
                        row.col(|ui| { ui.label(&school.level); });
                        row.col(|ui| { ui.label(&school.location); });
                    });
                }
            });
    }

    if let Some(id) = toggled {
        let now_selected = app.session.update(|f| f.schools.toggle(&id));
        logf!("UI: School {} {}", id, if now_selected { "selected" } else { "deselected" });
    }
    if let Some(id) = removed {
        app.session.update(|f| f.schools.remove(&id));
        logf!("UI: School {} removed", id);
    }
}
