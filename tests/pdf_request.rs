// tests/pdf_request.rs
//
// Guards in front of the PDF export, driven without a window.

use eframe::egui::{ self, Pos2, Rect, Vec2 };

use pcda_presenter::config::{ consts::SUMMARY_REGION, state::AppState };
use pcda_presenter::gui::actions::{ request_pdf, CapturePhase };
use pcda_presenter::gui::app::{ App, PdfPurpose };
use pcda_presenter::schools::SchoolDirectory;

use std::sync::atomic::Ordering;

fn app() -> App {
    App::new(AppState::default(), SchoolDirectory::bundled().unwrap())
}

fn lay_out_summary(app: &mut App) {
    let content = Rect::from_min_size(Pos2::new(0.0, 90.0), Vec2::new(1100.0, 1000.0));
    app.regions.insert(SUMMARY_REGION, content);
    app.summary_viewport = Some(Rect::from_min_size(Pos2::new(0.0, 90.0), Vec2::new(1100.0, 700.0)));
}

#[test]
fn missing_summary_region_reports_and_stays_idle() {
    let mut app = app();
    let ctx = egui::Context::default();

    request_pdf(&mut app, &ctx, PdfPurpose::Download);

    assert_eq!(app.status_text(), "PDF error: nothing on screen named 'pcda-summary'");
    assert!(!app.pdf_busy());
    assert!(app.pdf_job.is_none());
}

#[test]
fn request_plans_a_scroll_stop_per_viewport() {
    let mut app = app();
    let ctx = egui::Context::default();
    lay_out_summary(&mut app);

    request_pdf(&mut app, &ctx, PdfPurpose::Print);

    assert!(app.pdf_busy());
    let job = app.pdf_job.as_ref().unwrap();
    assert_eq!(job.purpose, PdfPurpose::Print);
    assert_eq!(job.offsets, [0.0, 300.0]);
    assert!(matches!(job.phase, CapturePhase::Scrolling { .. }));
    assert_eq!(job.target_offset(), 0.0);
}

#[test]
fn second_request_while_busy_is_ignored() {
    let mut app = app();
    let ctx = egui::Context::default();
    lay_out_summary(&mut app);
    app.pdf_busy.store(true, Ordering::Release);

    request_pdf(&mut app, &ctx, PdfPurpose::Download);

    assert!(app.pdf_job.is_none());
    assert_eq!(app.status_text(), "Ready");
}
