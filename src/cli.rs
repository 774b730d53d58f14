// src/cli.rs
//
// Headless front end: run the same derivation and exports without a window.

use std::{ error::Error, fmt::Write as _, path::PathBuf };

use chrono::{ Local, NaiveDate };
use clap::{ Args, Parser, Subcommand, ValueEnum };

use crate::{
    config::options::{ CsvLayout, EngineConfig, ExportOptions },
    csv,
    format::{ currency, deduction },
    schools::{ filter_schools, SchoolDirectory },
    session::{
        form::{ coerce_amount, coerce_count, date_or_tbd, DesiredLevel, EligibilityAwareness, PathwayLength, ResidencyStatus },
        pathway, DerivedView, SessionForm, SessionStore,
    },
};

#[derive(Parser, Debug)]
#[command(
    name = "pcda",
    about = "PCDA recruit presentation: summaries, school lookup and pathway plans",
    version
)]
pub struct Cli {
    /// Replace the bundled school directory with a JSON file
    #[arg(long, global = true, value_name = "FILE")]
    pub schools: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the financial breakdown and eligibility for one recruit
    Summary(SummaryArgs),
    /// List schools matching a search term
    Schools(SchoolsArgs),
    /// Print the semester-by-semester action plan
    Pathway(PathwayArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    #[default]
    Wide,
    KeyValue,
}

impl From<LayoutArg> for CsvLayout {
    fn from(l: LayoutArg) -> Self {
        match l {
            LayoutArg::Wide => CsvLayout::Wide,
            LayoutArg::KeyValue => CsvLayout::KeyValue,
        }
    }
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[arg(long, default_value = "")]
    pub gpa: String,
    #[arg(long, default_value = "")]
    pub college_classes: String,
    /// citizen | pr | visa | other
    #[arg(long, default_value = "citizen")]
    pub residency: ResidencyStatus,
    /// NCAA DI | NCAA DII | NCAA DIII | NAIA
    #[arg(long)]
    pub level: Option<DesiredLevel>,
    /// The recruit already knows they are academically eligible
    #[arg(long)]
    pub knows_eligibility: bool,
    #[arg(long, default_value = "0", value_parser = parse_count)]
    pub credits: u32,
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub down_payment: f64,
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub fafsa_estimate: f64,
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub hours_per_week: f64,
    #[arg(long, default_value = "0", value_parser = parse_amount)]
    pub reduction_per_semester: f64,
    /// Pathway length in semesters (2 or 3)
    #[arg(long, default_value = "2")]
    pub length: PathwayLength,
    /// School id; repeat for several
    #[arg(long = "school", value_name = "ID")]
    pub school_ids: Vec<String>,
    #[arg(long)]
    pub visit1: Option<NaiveDate>,
    #[arg(long)]
    pub visit2: Option<NaiveDate>,
    /// Also write the CSV summary to this path (a directory gets the default file name)
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "wide")]
    pub layout: LayoutArg,
}

#[derive(Args, Debug)]
pub struct SchoolsArgs {
    #[arg(long, short, default_value = "")]
    pub query: String,
}

#[derive(Args, Debug)]
pub struct PathwayArgs {
    #[arg(long, default_value = "2")]
    pub length: PathwayLength,
    #[arg(long)]
    pub visit1: Option<NaiveDate>,
    #[arg(long)]
    pub visit2: Option<NaiveDate>,
}

fn parse_amount(s: &str) -> Result<f64, String> {
    Ok(coerce_amount(s))
}

fn parse_count(s: &str) -> Result<u32, String> {
    Ok(coerce_count(s))
}

pub fn run() -> Result<(), Box<dyn Error>> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<(), Box<dyn Error>> {
    let directory = match &cli.schools {
        Some(p) => SchoolDirectory::from_path(p)?,
        None => SchoolDirectory::bundled()?,
    };

    match cli.command {
        Command::Summary(args) => {
            let csv_path = args.csv.clone();
            let layout = CsvLayout::from(args.layout);
            let form = build_form(&args, &directory)?;
            let store = SessionStore::with_form(EngineConfig::default(), form);

            print!("{}", render_summary(store.form(), store.derived(), &directory));

            if let Some(path) = csv_path {
                let path = csv_target(path);
                let fields = csv::summary_fields(store.form(), store.derived(), &directory);
                let written = crate::file::write_export(&path, csv::to_csv_string(&fields, layout)?.as_bytes())?;
                logf!("CLI: CSV written → {}", written.display());
                println!("\nSaved {}", written.display());
            }
        }
        Command::Schools(args) => {
            let hits = filter_schools(&directory, &args.query);
            logd!("CLI: schools query={:?} hits={}", args.query, hits.len());
            if hits.is_empty() {
                println!("No matches.");
            }
            for s in hits {
                println!("{:<22} {:<32} {:<10} {}", s.id, s.name, s.level, s.location);
            }
        }
        Command::Pathway(args) => {
            let mut form = SessionForm::default();
            form.financial.plan_length = args.length;
            form.visits.first = args.visit1;
            form.visits.second = args.visit2;
            pathway::generate(&mut form, Local::now());
            print!("{}", render_pathway(&form));
        }
    }
    Ok(())
}

/// Directories (existing, or spelled without an extension) get the default CSV name.
fn csv_target(path: PathBuf) -> PathBuf {
    if path.is_dir() || path.extension().is_none() {
        ExportOptions::join_dir_and_filename(&path, crate::config::consts::CSV_FILENAME)
    } else {
        path
    }
}

pub fn build_form(args: &SummaryArgs, directory: &SchoolDirectory) -> Result<SessionForm, Box<dyn Error>> {
    let mut form = SessionForm::default();
    form.profile.gpa = args.gpa.clone();
    form.profile.college_classes = args.college_classes.clone();
    form.residency = args.residency;
    form.desired_level = args.level;
    form.eligibility_awareness = if args.knows_eligibility {
        EligibilityAwareness::Yes
    } else {
        EligibilityAwareness::No
    };
    form.credits_taken = args.credits;
    form.financial.down_payment = args.down_payment;
    form.financial.fafsa_reduction_estimate = args.fafsa_estimate;
    form.financial.hours_per_week = args.hours_per_week;
    form.financial.reduction_per_semester = args.reduction_per_semester;
    form.financial.plan_length = args.length;
    form.visits.first = args.visit1;
    form.visits.second = args.visit2;

    for id in &args.school_ids {
        if directory.get(id).is_none() {
            return Err(format!("Unknown school id: {id}").into());
        }
        if !form.schools.contains(id) {
            form.schools.toggle(id);
        }
    }
    Ok(form)
}

pub fn render_summary(form: &SessionForm, derived: &DerivedView, directory: &SchoolDirectory) -> String {
    let mut out = String::new();
    let fin = &derived.financials;

    let _ = writeln!(out, "PCDA Presentation Summary");
    let _ = writeln!(out, "  GPA:              {}", form.profile.gpa);
    let _ = writeln!(out, "  College classes:  {}", form.profile.college_classes);
    let _ = writeln!(out, "  Residency:        {}", form.residency);
    let _ = writeln!(out, "  Desired level:    {}", form.desired_level.map(|l| l.label()).unwrap_or("-"));
    let _ = writeln!(out, "  Credits taken:    {}", form.credits_taken);

    let names = directory.resolve(&form.schools).iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
    let _ = writeln!(out, "  Schools:          {}", if names.is_empty() { s!("-") } else { names.join(csv::SCHOOL_JOIN) });

    let _ = writeln!(out);
    let _ = writeln!(out, "FAFSA: {}", if derived.fafsa_eligible { "Eligible" } else { "Ineligible" });
    if derived.eligibility.gap_year_usable {
        let _ = writeln!(out, "Eligibility: GAP year utilizable");
    }
    if derived.eligibility.redshirt_triggered {
        let _ = writeln!(out, "Eligibility: redshirt year utilized");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Financial breakdown");
    let rows = [
        ("Total Program Fee", currency(derived.total_fee)),
        ("Less: Flexible Down Payment", deduction(form.financial.down_payment)),
        ("Potential FAFSA Reduction", deduction(fin.fafsa_reduction)),
        ("Potential Work Opportunity Reduction", deduction(fin.work_reduction_total)),
        ("Net Remaining Balance", currency(fin.net_remaining_balance)),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<38}{value:>12}");
    }
    out
}

pub fn render_pathway(form: &SessionForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Pathway", form.financial.plan_length.label());
    let _ = writeln!(out, "{}", pathway::generated_label(form));
    let _ = writeln!(
        out,
        "Visit #1: {}   Visit #2: {}",
        date_or_tbd(form.visits.first),
        date_or_tbd(form.visits.second)
    );
    for semester in pathway::render(form.financial.plan_length, &form.visits) {
        let _ = writeln!(out, "\n{}", semester.title);
        for item in semester.items {
            let _ = writeln!(out, "  [ ] {item}");
        }
    }
    out
}
