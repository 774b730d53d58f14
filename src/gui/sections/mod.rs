// src/gui/sections/mod.rs
//
// One section per numbered part of the presentation. Sections read derived
// values from the session store and write edits back through `update`.

use eframe::egui;

use crate::{ config::consts::MAX_AMOUNT, gui::app::App };

pub mod colleges;
pub mod financials;
pub mod intro;
pub mod pathway;
pub mod questionnaire;

pub trait Section: Send + Sync + 'static {
    /// Heading shown above the section body, e.g. "I. Introduction & Welcome".
    fn title(&self) -> &'static str;

    /// Optional shorter label for the navigation tabs.
    fn nav_label(&self) -> Option<&'static str> { None }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x26, 0xa8, 0xe0);
pub(crate) const MUTED: egui::Color32 = egui::Color32::from_rgb(0x71, 0x71, 0x7a);

/// Sub-heading inside a section ("A. Recruit Information").
pub(crate) fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(4.0);
    ui.label(egui::RichText::new(text).strong().size(15.0));
    ui.add_space(4.0);
}

/// Label on the left, editor on the right.
pub(crate) fn data_row<R>(
    ui: &mut egui::Ui,
    label: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.horizontal(|ui| {
        ui.add_sized([260.0, 20.0], egui::Label::new(egui::RichText::new(label).color(MUTED)));
        add_contents(ui)
    })
    .inner
}

/// Dollar amount editor. Returns the new value when edited.
/// Negative input is kept out by the widget's range.
pub(crate) fn amount_field(ui: &mut egui::Ui, value: f64, enabled: bool) -> Option<f64> {
    let mut v = value;
    let resp = ui.add_enabled(
        enabled,
        egui::DragValue::new(&mut v)
            .range(0.0..=MAX_AMOUNT)
            .speed(50.0)
            .prefix("$")
            .max_decimals(2),
    );
    resp.changed().then_some(v)
}

/// Single-line text editor. Returns the new text when edited.
pub(crate) fn text_field(ui: &mut egui::Ui, value: &str, hint: &str) -> Option<String> {
    let mut v = s!(value);
    let resp = ui.add(egui::TextEdit::singleline(&mut v).hint_text(hint).desired_width(180.0));
    resp.changed().then_some(v)
}

/// Colored callout box used for eligibility banners and the FAFSA badge.
pub(crate) fn banner(ui: &mut egui::Ui, text: &str, fg: egui::Color32, bg: egui::Color32) {
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(fg));
        });
}
