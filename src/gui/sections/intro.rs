// src/gui/sections/intro.rs
use eframe::egui;

use crate::gui::app::App;
use super::Section;

pub struct Intro;
pub static SECTION: Intro = Intro;

const WELCOME: &str = "Welcome to PCDA! In this live session, we'll gather your academic and athletic info, \
review eligibility, explore your target colleges, walk through program costs, and generate a personalized \
pathway for your success.";

const AGENDA: [&str; 5] = [
    "Recruit profile collection",
    "Academic eligibility visual calculator",
    "College list insights",
    "Financial overview & net balance",
    "Personalized 2- or 3-semester journey with action items",
];

impl Section for Intro {
    fn title(&self) -> &'static str { "I. Introduction & Welcome" }
    fn nav_label(&self) -> Option<&'static str> { Some("Introduction") }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.label(WELCOME);
        ui.add_space(6.0);
        for item in AGENDA {
            ui.label(format!("  •  {item}"));
        }
    }
}
