// src/gui/actions/pdf.rs
//
// PDF export runs across several frames:
// 1) `request_pdf` marks the export busy and plans one scroll stop per viewport.
// 2) `advance_capture` (end of frame) scrolls to the next stop, lets the layout
//    settle, then asks the viewport for a screenshot.
// 3) `poll_screenshot` (start of frame) crops the visible part of the summary
//    out of each screenshot. After the last stop the strips are stitched and
//    encoding + writing move to a worker thread.
// The busy flag stays set until the worker is done.

use std::{
    path::PathBuf,
    sync::atomic::Ordering,
    thread,
    time::{ Duration, Instant },
};

use eframe::egui;
use image::RgbaImage;

use crate::{
    config::consts::{ JPEG_QUALITY, PDF_FILENAME, SUMMARY_REGION },
    file::{ self, ExportError },
    gui::{ app::{ App, PdfPurpose }, progress::GuiProgress },
    pdf,
};

use super::capture::{ capture_strip, scroll_offsets, stitch, ScrollView, Strip };

const SCREENSHOT_TIMEOUT: Duration = Duration::from_secs(5);

/// Frames to wait after a scroll before taking the screenshot.
const SETTLE_FRAMES: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CapturePhase {
    Scrolling { frames_left: u8 },
    Waiting { asked_at: Instant, view: ScrollView },
}

#[derive(Debug)]
pub struct CaptureJob {
    pub purpose: PdfPurpose,
    pub offsets: Vec<f32>,
    pub next: usize,
    pub phase: CapturePhase,
    pub strips: Vec<Strip>,
    /// Full content height in points, from the view at request time.
    pub content_h: f32,
    /// Scroll offset to return to once done.
    pub restore_offset: f32,
}

impl CaptureJob {
    /// Offset the summary should be scrolled to this frame.
    pub fn target_offset(&self) -> f32 {
        self.offsets.get(self.next).copied().unwrap_or(self.restore_offset)
    }
}

pub fn request_pdf(app: &mut App, ctx: &egui::Context, purpose: PdfPurpose) {
    if app.pdf_busy() {
        logd!("PDF: Clicked while busy");
        return;
    }
    let Some(content) = app.regions.get(SUMMARY_REGION).copied() else {
        let e = ExportError::RegionNotFound(s!(SUMMARY_REGION));
        loge!("PDF: {}", e);
        app.status(format!("PDF error: {e}"));
        return;
    };
    let view = ScrollView { content, viewport: app.summary_viewport.unwrap_or(content) };

    super::apply_out_dir(app);
    let offsets = scroll_offsets(content.height(), view.viewport.height());
    logf!("PDF: Requested ({:?}), {} scroll stop(s)", purpose, offsets.len());

    app.pdf_busy.store(true, Ordering::Release);
    app.pdf_job = Some(CaptureJob {
        purpose,
        offsets,
        next: 0,
        phase: CapturePhase::Scrolling { frames_left: SETTLE_FRAMES },
        strips: Vec::new(),
        content_h: content.height(),
        restore_offset: view.offset(),
    });
    app.status("Capturing summary...");
    ctx.request_repaint();
}

/// Called after the summary is laid out; `view` is where it sits this frame.
pub fn advance_capture(app: &mut App, ctx: &egui::Context, view: ScrollView) {
    let Some(job) = app.pdf_job.as_mut() else { return };
    if let CapturePhase::Scrolling { frames_left } = job.phase {
        if frames_left > 0 {
            job.phase = CapturePhase::Scrolling { frames_left: frames_left - 1 };
        } else {
            job.phase = CapturePhase::Waiting { asked_at: Instant::now(), view };
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
        }
        ctx.request_repaint();
    }
}

pub fn poll_screenshot(app: &mut App, ctx: &egui::Context) {
    let Some(job) = app.pdf_job.as_mut() else { return };
    let CapturePhase::Waiting { asked_at, view } = job.phase else { return };

    let shot = ctx.input(|i| {
        i.raw.events.iter().find_map(|e| match e {
            egui::Event::Screenshot { image, .. } => Some(image.clone()),
            _ => None,
        })
    });

    let Some(image) = shot else {
        if asked_at.elapsed() > SCREENSHOT_TIMEOUT {
            fail(app, "screen capture unavailable");
        } else {
            ctx.request_repaint();
        }
        return;
    };

    let ppp = ctx.pixels_per_point();
    match capture_strip(&image, view, ppp) {
        Ok(strip) => job.strips.push(strip),
        Err(e) => return fail(app, &e.to_string()),
    }
    job.next += 1;
    let (done, total) = (job.next, job.offsets.len());
    if done < total {
        job.phase = CapturePhase::Scrolling { frames_left: SETTLE_FRAMES };
    }
    app.status(format!("Capturing summary ({done}/{total})..."));
    if done < total {
        ctx.request_repaint();
        return;
    }

    let Some(job) = app.pdf_job.take() else { return };
    app.scroll_to = Some(job.restore_offset);
    let height_px = (job.content_h * ppp).round() as u32;
    let capture = match stitch(&job.strips, height_px) {
        Ok(c) => c,
        Err(e) => return fail(app, &e.to_string()),
    };

    let path = match job.purpose {
        PdfPurpose::Download => app.state.options.export.pdf_path(),
        PdfPurpose::Print => std::env::temp_dir().join(PDF_FILENAME),
    };
    spawn_worker(app, ctx, capture, path, job.purpose);
}

fn fail(app: &mut App, why: &str) {
    loge!("PDF: {}", why);
    if let Some(job) = app.pdf_job.take() {
        app.scroll_to = Some(job.restore_offset);
    }
    app.pdf_busy.store(false, Ordering::Release);
    app.status(format!("PDF error: {why}"));
}

fn spawn_worker(app: &App, ctx: &egui::Context, capture: RgbaImage, path: PathBuf, purpose: PdfPurpose) {
    let status = app.status.clone();
    let busy = app.pdf_busy.clone();
    let page = app.state.options.export.page;
    let ctx = ctx.clone();

    thread::spawn(move || {
        let mut progress = GuiProgress::new(status.clone());
        let result = pdf::render_pdf(&capture, page, JPEG_QUALITY, Some(&mut progress))
            .and_then(|bytes| file::write_export(&path, &bytes))
            .and_then(|written| {
                if purpose == PdfPurpose::Print {
                    file::open_in_system_viewer(&written)?;
                }
                Ok(written)
            });

        let msg = match result {
            Ok(p) => {
                logf!("PDF: OK ({:?}) {}", purpose, p.display());
                match purpose {
                    PdfPurpose::Download => format!("Saved {}", p.display()),
                    PdfPurpose::Print => format!("Opened {} for printing", p.display()),
                }
            }
            Err(e) => {
                loge!("PDF: Error: {}", e);
                format!("PDF error: {e}")
            }
        };

        if let Ok(mut s) = status.lock() {
            *s = msg;
        }
        busy.store(false, Ordering::Release);
        ctx.request_repaint();
    });
}

/// Crop a full-viewport screenshot to `rect` (points), clamped to the image.
pub fn crop_region(image: &egui::ColorImage, rect: egui::Rect, pixels_per_point: f32) -> Result<RgbaImage, ExportError> {
    let [w, h] = image.size;
    let clamp = |v: f32, max: usize| (v * pixels_per_point).round().clamp(0.0, max as f32) as u32;

    let (x0, y0) = (clamp(rect.min.x, w), clamp(rect.min.y, h));
    let (x1, y1) = (clamp(rect.max.x, w), clamp(rect.max.y, h));
    if x1 <= x0 || y1 <= y0 {
        return Err(ExportError::EmptyCapture);
    }

    let raw: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    let full = RgbaImage::from_raw(w as u32, h as u32, raw).ok_or(ExportError::EmptyCapture)?;
    Ok(image::imageops::crop_imm(&full, x0, y0, x1 - x0, y1 - y0).to_image())
}
