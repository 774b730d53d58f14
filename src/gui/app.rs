// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use eframe::egui;

use crate::{
    config::{
        consts::{ APP_TITLE, SUMMARY_REGION },
        options::AppOptions,
        state::AppState,
    },
    schools::SchoolDirectory,
    session::SessionStore,
};

use super::{ actions::{ self, CaptureJob, ScrollView }, components, router };

pub fn run(
    native: eframe::NativeOptions,
    options: AppOptions,
    directory: SchoolDirectory,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        native,
        Box::new(move |_cc| Ok(Box::new(App::new(AppState::new(options), directory)))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PdfPurpose {
    Download,
    Print,
}

pub struct App {
    // single source of truth for the form (UI thread only)
    pub session: SessionStore,
    pub state: AppState,
    pub directory: SchoolDirectory,

    // named on-screen areas from the last laid-out frame (screen points, unclipped)
    pub regions: HashMap<&'static str, egui::Rect>,
    // visible part of the summary scroll area
    pub summary_viewport: Option<egui::Rect>,
    // one-shot scroll offset for the summary, applied next frame
    pub scroll_to: Option<f32>,

    // status line (the PDF worker writes here too)
    pub status: Arc<Mutex<String>>,

    // set from request until the worker is done; gates the PDF/Print buttons
    pub pdf_busy: Arc<AtomicBool>,
    pub pdf_job: Option<CaptureJob>,
}

impl App {
    pub fn new(state: AppState, directory: SchoolDirectory) -> Self {
        let mut session = SessionStore::new(state.options.engine);

        session.subscribe(|d| {
            logd!(
                "Derived: fafsa={} net={} work={} gap={} redshirt={}",
                d.fafsa_eligible,
                d.financials.net_remaining_balance,
                d.financials.work_reduction_total,
                d.eligibility.gap_year_usable,
                d.eligibility.redshirt_triggered
            );
        });

        logf!("Init: schools={}, out_dir={}", directory.len(), state.options.export.out_dir().display());

        Self {
            session,
            state,
            directory,
            regions: HashMap::new(),
            summary_viewport: None,
            scroll_to: None,
            status: Arc::new(Mutex::new(s!("Ready"))),
            pdf_busy: Arc::new(AtomicBool::new(false)),
            pdf_job: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    #[inline]
    pub fn pdf_busy(&self) -> bool {
        self.pdf_busy.load(Ordering::Acquire)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Screenshot of the previous frame, if one was asked for.
        actions::poll_screenshot(self, ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        // A running capture owns the scroll position.
        let forced = match &self.pdf_job {
            Some(job) => Some(job.target_offset()),
            None => self.scroll_to.take(),
        };

        let view = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical().id_salt("summary_scroll");
                if let Some(y) = forced {
                    area = area.vertical_scroll_offset(y);
                }
                let out = area.show(ui, |ui| {
                    ui.scope(|ui| {
                        for (idx, section) in router::all_sections().iter().enumerate() {
                            components::section_frame::draw(ui, self, idx, *section);
                            ui.add_space(16.0);
                        }
                        components::footer::draw(ui);
                    })
                    .response
                    .rect
                });
                ScrollView { content: out.inner, viewport: out.inner_rect }
            })
            .inner;

        self.regions.insert(SUMMARY_REGION, view.content);
        self.summary_viewport = Some(view.viewport);
        actions::advance_capture(self, ctx, view);
    }
}
