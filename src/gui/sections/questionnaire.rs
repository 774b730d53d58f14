// src/gui/sections/questionnaire.rs
//
// II. A-D: recruit info, aspirations, residency, credits.

use eframe::egui::{ self, Color32 };

use crate::{
    gui::{ app::App, components::{ school_picker, timeline } },
    session::form::{ DesiredLevel, EligibilityAwareness, ResidencyStatus },
};
use super::{ banner, data_row, subheading, text_field, Section };

pub struct Questionnaire;
pub static SECTION: Questionnaire = Questionnaire;

const GAP_TEXT: &str =
    "You still have 5 years of eligibility, and we can utilize your GAP year effectively.";
const REDSHIRT_TEXT: &str =
    "Your eligibility clock has started, and we will utilize your red shirt year.";

impl Section for Questionnaire {
    fn title(&self) -> &'static str { "II. Interactive Questionnaire" }
    fn nav_label(&self) -> Option<&'static str> { Some("Questionnaire") }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        recruit_info(ui, app);
        ui.separator();
        aspirations(ui, app);
        ui.separator();
        residency(ui, app);
        ui.separator();
        credits(ui, app);
    }
}

fn recruit_info(ui: &mut egui::Ui, app: &mut App) {
    subheading(ui, "A. Recruit Information");

    let gpa = app.session.form().profile.gpa.clone();
    data_row(ui, "Current High School GPA", |ui| {
        if let Some(v) = text_field(ui, &gpa, "e.g., 3.6") {
            app.session.update(|f| f.profile.gpa = v);
        }
    });

    let classes = app.session.form().profile.college_classes.clone();
    data_row(ui, "Number of Current College Classes", |ui| {
        if let Some(v) = text_field(ui, &classes, "e.g., 2") {
            app.session.update(|f| f.profile.college_classes = v);
        }
    });
}

fn aspirations(ui: &mut egui::Ui, app: &mut App) {
    subheading(ui, "B. College Aspirations");

    ui.label("Desired List of Schools (search & multi-select)");
    school_picker::draw(ui, app);
    ui.add_space(8.0);

    let mut level = app.session.form().desired_level;
    let before = level;
    data_row(ui, "Desired Level of College Soccer", |ui| {
        egui::ComboBox::from_id_salt("desired_level")
            .selected_text(level.map(|l| l.label()).unwrap_or("Select..."))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut level, None, "Select...");
                for l in DesiredLevel::ALL {
                    ui.selectable_value(&mut level, Some(l), l.label());
                }
            });
    });
    if level != before {
        logd!("UI: Desired level → {:?}", level);
        app.session.update(|f| f.desired_level = level);
    }

    let mut aware = app.session.form().eligibility_awareness;
    let before = aware;
    data_row(ui, "Do you know if you're academically eligible?", |ui| {
        ui.radio_value(&mut aware, EligibilityAwareness::Yes, "Yes");
        ui.radio_value(&mut aware, EligibilityAwareness::No, "No");
    });
    if aware != before {
        app.session.update(|f| f.eligibility_awareness = aware);
    }
}

fn residency(ui: &mut egui::Ui, app: &mut App) {
    subheading(ui, "C. Residency & FAFSA Eligibility");

    let mut residency = app.session.form().residency;
    let before = residency;
    data_row(ui, "Residency Status", |ui| {
        egui::ComboBox::from_id_salt("residency")
            .selected_text(residency.label())
            .show_ui(ui, |ui| {
                for r in ResidencyStatus::ALL {
                    ui.selectable_value(&mut residency, r, r.label());
                }
            });
    });
    if residency != before {
        logf!("UI: Residency → {}", residency.code());
        app.session.update(|f| f.residency = residency);
    }

    let eligible = app.session.derived().fafsa_eligible;
    data_row(ui, "FAFSA Eligibility (auto)", |ui| {
        if eligible {
            banner(ui, "FAFSA Eligible", Color32::from_rgb(0x16, 0x65, 0x34), Color32::from_rgb(0xf0, 0xfd, 0xf4));
        } else {
            banner(ui, "FAFSA Ineligible", Color32::from_rgb(0x9f, 0x12, 0x39), Color32::from_rgb(0xff, 0xf1, 0xf2));
        }
    });
}

fn credits(ui: &mut egui::Ui, app: &mut App) {
    subheading(ui, "D. College Eligibility Calculator (Visual Aid)");

    let mut credits = app.session.form().credits_taken;
    data_row(ui, "Credits Taken", |ui| {
        if ui.add(egui::DragValue::new(&mut credits).range(0..=200)).changed() {
            app.session.update(|f| f.credits_taken = credits);
        }
    });

    let window = app.session.derived().eligibility;
    if window.gap_year_usable {
        banner(ui, GAP_TEXT, Color32::from_rgb(0x0c, 0x4a, 0x6e), Color32::from_rgb(0xf0, 0xf9, 0xff));
    }
    if window.redshirt_triggered {
        banner(ui, REDSHIRT_TEXT, Color32::from_rgb(0x9f, 0x12, 0x39), Color32::from_rgb(0xff, 0xf1, 0xf2));
    }

    timeline::draw(ui, window);
}
