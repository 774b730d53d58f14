// src/gui/sections/financials.rs
use eframe::egui;

use crate::{
    format::{ currency, deduction },
    gui::app::App,
};
use super::{ amount_field, data_row, subheading, Section, MUTED };

pub struct Financials;
pub static SECTION: Financials = Financials;

impl Section for Financials {
    fn title(&self) -> &'static str { "IV. Financial Commitment Overview & Calculator" }
    fn nav_label(&self) -> Option<&'static str> { Some("Financials") }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let derived = *app.session.derived();
        let fin = app.session.form().financial.clone();

        subheading(ui, "A. PCDA Program Fees");
        data_row(ui, "Starting Fee", |ui| {
            ui.strong(currency(derived.total_fee));
        });
        data_row(ui, "Flexible Down Payment", |ui| {
            if let Some(v) = amount_field(ui, fin.down_payment, true) {
                app.session.update(|f| f.financial.down_payment = v);
            }
        });

        ui.separator();
        subheading(ui, "B. Financial Calculator Breakdown");

        breakdown_line(ui, "Total Program Fee", currency(derived.total_fee));
        breakdown_line(ui, "Less: Flexible Down Payment", deduction(fin.down_payment));

        breakdown_line(ui, "Potential FAFSA Reduction", deduction(derived.financials.fafsa_reduction));
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            // Ineligible: shown as 0 and locked; the typed estimate is kept.
            let shown = if derived.fafsa_eligible { fin.fafsa_reduction_estimate } else { 0.0 };
            if let Some(v) = amount_field(ui, shown, derived.fafsa_eligible) {
                app.session.update(|f| f.financial.fafsa_reduction_estimate = v);
            }
            let hint = if derived.fafsa_eligible { "Grant estimate" } else { "Ineligible" };
            ui.label(egui::RichText::new(format!("{hint} (based on residency status above)")).small().color(MUTED));
        });

        breakdown_line(
            ui,
            "Potential Work Opportunity Reduction",
            deduction(derived.financials.work_reduction_total),
        );
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new("X hours/week").small().color(MUTED));
            let mut hours = fin.hours_per_week;
            if ui.add(egui::DragValue::new(&mut hours).range(0.0..=80.0)).changed() {
                app.session.update(|f| f.financial.hours_per_week = hours);
            }
            ui.add_space(12.0);
            ui.label(egui::RichText::new("$Y reduction per semester").small().color(MUTED));
            if let Some(v) = amount_field(ui, fin.reduction_per_semester, true) {
                app.session.update(|f| f.financial.reduction_per_semester = v);
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            ui.strong("Net Remaining Balance");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(currency(derived.financials.net_remaining_balance))
                        .strong()
                        .size(16.0),
                );
            });
        });
    }
}

fn breakdown_line(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.strong(value);
        });
    });
}
