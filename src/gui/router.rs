// src/gui/router.rs
use super::sections::{ self, Section };

pub static SECTIONS: &[&'static dyn Section] = &[
    &sections::intro::SECTION,
    &sections::questionnaire::SECTION,
    &sections::colleges::SECTION,
    &sections::financials::SECTION,
    &sections::pathway::SECTION,
];

pub fn all_sections() -> &'static [&'static dyn Section] {
    SECTIONS
}

/// Short tab label: "III. College Selection & Data Display" → "College Selection".
pub fn nav_label(section: &dyn Section) -> &'static str {
    section.nav_label().unwrap_or_else(|| {
        let title = section.title();
        title.split_once(". ").map(|(_, rest)| rest).unwrap_or(title)
    })
}
