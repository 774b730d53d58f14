// src/gui/sections/pathway.rs
use chrono::{ Local, NaiveDate };
use eframe::egui;
use egui_extras::DatePickerButton;

use crate::{
    gui::app::App,
    session::{ form::PathwayLength, pathway },
};
use super::{ Section, ACCENT, MUTED };

pub struct Pathway;
pub static SECTION: Pathway = Pathway;

impl Section for Pathway {
    fn title(&self) -> &'static str { "V. Personalized PCDA Journey Pathway" }
    fn nav_label(&self) -> Option<&'static str> { Some("Pathway") }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let mut length = app.session.form().financial.plan_length;
        let before = length;
        ui.horizontal(|ui| {
            ui.label("Pathway Length");
            egui::ComboBox::from_id_salt("pathway_length")
                .selected_text(length.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut length, PathwayLength::TwoSemester, PathwayLength::TwoSemester.label());
                    ui.selectable_value(&mut length, PathwayLength::ThreeSemester, PathwayLength::ThreeSemester.label());
                });

            let generate = egui::Button::new(
                egui::RichText::new("Generate / Refresh Pathway").color(egui::Color32::WHITE),
            )
            .fill(ACCENT);
            if ui.add(generate).clicked() {
                app.session.update(|f| pathway::generate(f, Local::now()));
                logf!("UI: Pathway generated ({} semesters)", length.semesters());
            }
            ui.label(
                egui::RichText::new("Adds a timestamp and uses your visit dates in the action items")
                    .small()
                    .color(MUTED),
            );
        });
        if length != before {
            app.session.update(|f| f.financial.plan_length = length);
        }

        ui.add_space(6.0);
        ui.label(egui::RichText::new(pathway::generated_label(app.session.form())).small().color(MUTED));
        ui.add_space(6.0);

        let visits = app.session.form().visits;
        ui.horizontal(|ui| {
            if let Some(d) = visit_date_field(ui, "Input Date for Potential Visit #1", "visit_1", visits.first) {
                app.session.update(|f| f.visits.first = d);
            }
            ui.add_space(24.0);
            if let Some(d) = visit_date_field(ui, "Input Date for Potential Visit #2", "visit_2", visits.second) {
                app.session.update(|f| f.visits.second = d);
            }
        });

        ui.add_space(8.0);
        let plan = pathway::render(app.session.form().financial.plan_length, &app.session.form().visits);
        for semester in &plan {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.strong(semester.title);
                ui.add_space(4.0);
                for item in &semester.items {
                    ui.label(format!("•  {item}"));
                }
            });
            ui.add_space(8.0);
        }
    }
}

/// Returns `Some(new)` when the date was picked or cleared.
fn visit_date_field(
    ui: &mut egui::Ui,
    label: &str,
    id: &str,
    value: Option<NaiveDate>,
) -> Option<Option<NaiveDate>> {
    let mut out = None;
    ui.vertical(|ui| {
        ui.label(label);
        match value {
            Some(mut date) => {
                ui.horizontal(|ui| {
                    if ui.add(DatePickerButton::new(&mut date).id_salt(id)).changed() {
                        out = Some(Some(date));
                    }
                    if ui.small_button("Clear").clicked() {
                        out = Some(None);
                    }
                });
            }
            None => {
                if ui.button("TBD (pick a date)").clicked() {
                    out = Some(Some(Local::now().date_naive()));
                }
            }
        }
    });
    out
}
