// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod capture; // src/gui/actions/capture.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod pdf;     // src/gui/actions/pdf.rs

pub use copy::copy;
pub use export::{ apply_out_dir, export_csv };
pub use capture::{ capture_strip, scroll_offsets, stitch, ScrollView, Strip };
pub use pdf::{ advance_capture, crop_region, poll_screenshot, request_pdf, CaptureJob, CapturePhase };

use crate::{ config::options::CsvLayout, csv, gui::app::App };

/// Current summary as CSV text.
pub(super) fn summary_csv(app: &App, layout: CsvLayout) -> std::io::Result<String> {
    let fields = csv::summary_fields(app.session.form(), app.session.derived(), &app.directory);
    csv::to_csv_string(&fields, layout)
}
