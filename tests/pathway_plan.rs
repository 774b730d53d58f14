// tests/pathway_plan.rs
use chrono::{ Local, NaiveDate, TimeZone };

use pcda_presenter::session::{
    form::{ PathwayLength, SessionForm, VisitDates },
    pathway::{ self, format_timestamp, generated_label, render },
};

#[test]
fn item_counts_per_length() {
    let two = render(PathwayLength::TwoSemester, &VisitDates::default());
    assert_eq!(two.iter().map(|s| s.items.len()).collect::<Vec<_>>(), [12, 10]);

    let three = render(PathwayLength::ThreeSemester, &VisitDates::default());
    assert_eq!(three.iter().map(|s| s.items.len()).collect::<Vec<_>>(), [6, 5, 6]);
    assert_eq!(three[1].title, "Semester 2: Spring/Summer 202Y");
}

#[test]
fn unset_visit_dates_render_tbd() {
    let plan = render(PathwayLength::TwoSemester, &VisitDates::default());
    assert_eq!(plan[0].items[6], "Schedule First College Visit (Potential Visit Date: TBD)");
    assert_eq!(plan[1].items[2], "Schedule Second College Visit (Potential Visit Date: TBD)");
}

#[test]
fn visit_dates_are_interpolated_at_render_time() {
    let visits = VisitDates {
        first: NaiveDate::from_ymd_opt(2025, 10, 3),
        second: NaiveDate::from_ymd_opt(2026, 2, 20),
    };
    let plan = render(PathwayLength::ThreeSemester, &visits);
    assert_eq!(plan[1].items[0], "Schedule First College Visit (Potential Visit Date: 2025-10-03)");
    assert_eq!(plan[2].items[1], "Schedule Second College Visit (Potential Visit Date: 2026-02-20)");

    // Templates are untouched by a render with dates.
    let again = render(PathwayLength::ThreeSemester, &VisitDates::default());
    assert!(again[1].items[0].ends_with("(Potential Visit Date: TBD)"));
}

#[test]
fn generate_stamps_without_changing_content() {
    let mut form = SessionForm::default();
    assert_eq!(generated_label(&form), "Generated: ");

    let before = render(form.financial.plan_length, &form.visits);
    let now = Local.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
    pathway::generate(&mut form, now);

    assert_eq!(form.pathway_generated_at, Some(now));
    assert_eq!(generated_label(&form), "Generated: 3/7/2025, 2:05:09 PM");
    assert_eq!(render(form.financial.plan_length, &form.visits), before);
}

#[test]
fn timestamp_uses_twelve_hour_clock() {
    let morning = Local.with_ymd_and_hms(2024, 12, 31, 0, 30, 0).unwrap();
    assert_eq!(format_timestamp(&morning), "12/31/2024, 12:30:00 AM");
}
