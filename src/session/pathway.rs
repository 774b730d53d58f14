// src/session/pathway.rs
//
// Fixed checklist templates for the 2- and 3-semester pathways.
// Visit dates are interpolated at render time; the templates themselves
// never hold a date.

use chrono::{ DateTime, Local, TimeZone };

use super::form::{ date_or_tbd, PathwayLength, SessionForm, VisitDates };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitSlot {
    First,
    Second,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecklistItem {
    Text(&'static str),
    /// Rendered as `<text> (Potential Visit Date: <date|TBD>)`
    Visit(&'static str, VisitSlot),
}

#[derive(Clone, Copy, Debug)]
pub struct SemesterTemplate {
    pub title: &'static str,
    pub items: &'static [ChecklistItem],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSemester {
    pub title: &'static str,
    pub items: Vec<String>,
}

use ChecklistItem::{ Text, Visit };
use VisitSlot::{ First, Second };

static TWO_SEMESTER: &[SemesterTemplate] = &[
    SemesterTemplate {
        title: "Semester 1: Fall 202X",
        items: &[
            Text("Complete PCDA Enrollment Paperwork"),
            Text("Attend Initial Player Assessment"),
            Text("Begin Academic Advising Sessions"),
            Text("Start Strength & Conditioning Program"),
            Text("Participate in Team Training Sessions"),
            Text("Research College Programs from Selected List"),
            Visit("Schedule First College Visit", First),
            Text("Work with PCDA Recruiting Coordinator to create highlight reel"),
            Text("Begin Communication with College Coaches"),
            Text("Continue Academic Support"),
            Text("Mid-Semester Progress Review"),
            Text("End of Semester 1 Assessment"),
        ],
    },
    SemesterTemplate {
        title: "Semester 2: Spring 202Y",
        items: &[
            Text("Focus on NCAA/NAIA Eligibility Requirements"),
            Text("Intensify College Application Process"),
            Visit("Schedule Second College Visit", Second),
            Text("Continue Advanced Training and Scrimmages"),
            Text("Prepare for Standardized Tests (SAT/ACT)"),
            Text("Finalize College Applications"),
            Text("Attend College Showcases/Combines"),
            Text("Receive College Offers"),
            Text("Commit to a College Program"),
            Text("PCDA Graduation and Transition Planning"),
        ],
    },
];

static THREE_SEMESTER: &[SemesterTemplate] = &[
    SemesterTemplate {
        title: "Semester 1: Fall 202X",
        items: &[
            Text("Complete PCDA Enrollment Paperwork"),
            Text("Initial Player Assessment & Baseline Testing"),
            Text("Academic Advising & Study Plan"),
            Text("Intro Strength & Conditioning"),
            Text("Team Training Fundamentals"),
            Text("Deep Research on College Programs"),
        ],
    },
    SemesterTemplate {
        title: "Semester 2: Spring/Summer 202Y",
        items: &[
            Visit("Schedule First College Visit", First),
            Text("Create/Refine Highlight Reel"),
            Text("Coach Outreach Prep & Messaging"),
            Text("Advanced Training & Position-Specific Work"),
            Text("SAT/ACT Prep & Practice Tests"),
        ],
    },
    SemesterTemplate {
        title: "Semester 3: Fall 202Y",
        items: &[
            Text("Active Communication with College Coaches"),
            Visit("Schedule Second College Visit", Second),
            Text("Applications Finalization"),
            Text("Attend Showcases/Combines"),
            Text("Evaluate Offers & Commit"),
            Text("PCDA Graduation and Transition Planning"),
        ],
    },
];

pub fn template(length: PathwayLength) -> &'static [SemesterTemplate] {
    match length {
        PathwayLength::TwoSemester => TWO_SEMESTER,
        PathwayLength::ThreeSemester => THREE_SEMESTER,
    }
}

impl ChecklistItem {
    pub fn render(&self, visits: &VisitDates) -> String {
        match *self {
            Text(t) => s!(t),
            Visit(t, slot) => {
                let date = match slot {
                    First => visits.first,
                    Second => visits.second,
                };
                format!("{t} (Potential Visit Date: {})", date_or_tbd(date))
            }
        }
    }
}

pub fn render(length: PathwayLength, visits: &VisitDates) -> Vec<RenderedSemester> {
    template(length)
        .iter()
        .map(|sem| RenderedSemester {
            title: sem.title,
            items: sem.items.iter().map(|it| it.render(visits)).collect(),
        })
        .collect()
}

/// "Generate / Refresh Pathway": stamps the form. Content is unaffected.
pub fn generate<Tz: TimeZone>(form: &mut SessionForm, now: DateTime<Tz>) {
    form.pathway_generated_at = Some(now.with_timezone(&Local));
}

pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// `Generated: <timestamp>`, blank timestamp if never generated.
pub fn generated_label(form: &SessionForm) -> String {
    let ts = form
        .pathway_generated_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_default();
    format!("Generated: {ts}")
}
