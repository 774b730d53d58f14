// src/session/form.rs
//
// Form snapshot: everything the recruit (or presenter) types in.
// Nothing here is derived; see session::engine for that.

use std::fmt;
use std::str::FromStr;

use chrono::{ DateTime, Local, NaiveDate };

use super::selection::SelectedSchoolSet;

/// Text fields exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecruitProfile {
    pub gpa: String,
    pub college_classes: String,
}

impl RecruitProfile {
    pub fn gpa_value(&self) -> Option<f64> {
        self.gpa.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn college_classes_count(&self) -> Option<u32> {
        self.college_classes.trim().parse::<u32>().ok()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResidencyStatus {
    #[default]
    Citizen,
    PermanentResident,
    VisaHolder,
    Other,
}

impl ResidencyStatus {
    pub const ALL: [ResidencyStatus; 4] = [
        ResidencyStatus::Citizen,
        ResidencyStatus::PermanentResident,
        ResidencyStatus::VisaHolder,
        ResidencyStatus::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResidencyStatus::Citizen => "Citizen",
            ResidencyStatus::PermanentResident => "Permanent Resident",
            ResidencyStatus::VisaHolder => "Visa Holder",
            ResidencyStatus::Other => "Other",
        }
    }

    /// Short code used in exports.
    pub fn code(&self) -> &'static str {
        match self {
            ResidencyStatus::Citizen => "citizen",
            ResidencyStatus::PermanentResident => "pr",
            ResidencyStatus::VisaHolder => "visa",
            ResidencyStatus::Other => "other",
        }
    }
}

impl fmt::Display for ResidencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for ResidencyStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "citizen" => Ok(ResidencyStatus::Citizen),
            "pr" | "permanent_resident" => Ok(ResidencyStatus::PermanentResident),
            "visa" | "visa_holder" => Ok(ResidencyStatus::VisaHolder),
            "other" => Ok(ResidencyStatus::Other),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DesiredLevel {
    NcaaDI,
    NcaaDII,
    NcaaDIII,
    Naia,
}

impl DesiredLevel {
    pub const ALL: [DesiredLevel; 4] = [
        DesiredLevel::NcaaDI,
        DesiredLevel::NcaaDII,
        DesiredLevel::NcaaDIII,
        DesiredLevel::Naia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DesiredLevel::NcaaDI => "NCAA DI",
            DesiredLevel::NcaaDII => "NCAA DII",
            DesiredLevel::NcaaDIII => "NCAA DIII",
            DesiredLevel::Naia => "NAIA",
        }
    }
}

impl FromStr for DesiredLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase();
        match norm.as_str() {
            "NCAADI" | "DI" => Ok(DesiredLevel::NcaaDI),
            "NCAADII" | "DII" => Ok(DesiredLevel::NcaaDII),
            "NCAADIII" | "DIII" => Ok(DesiredLevel::NcaaDIII),
            "NAIA" => Ok(DesiredLevel::Naia),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// "Do you know if you're academically eligible?"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EligibilityAwareness {
    Yes,
    #[default]
    No,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathwayLength {
    #[default]
    TwoSemester,
    ThreeSemester,
}

impl PathwayLength {
    pub fn semesters(&self) -> u32 {
        match self {
            PathwayLength::TwoSemester => 2,
            PathwayLength::ThreeSemester => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PathwayLength::TwoSemester => "2 Semesters",
            PathwayLength::ThreeSemester => "3 Semesters",
        }
    }
}

impl FromStr for PathwayLength {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" => Ok(PathwayLength::TwoSemester),
            "3" => Ok(PathwayLength::ThreeSemester),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinancialInputs {
    pub down_payment: f64,
    /// Grant estimate as entered. Kept even when residency makes it inapplicable.
    pub fafsa_reduction_estimate: f64,
    /// Collected for the conversation only; no calculation reads it.
    pub hours_per_week: f64,
    pub reduction_per_semester: f64,
    pub plan_length: PathwayLength,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitDates {
    pub first: Option<NaiveDate>,
    pub second: Option<NaiveDate>,
}

pub const DATE_TBD: &str = "TBD";

pub fn date_or_tbd(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => s!(DATE_TBD),
    }
}

/// One session's worth of form state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionForm {
    pub profile: RecruitProfile,
    pub desired_level: Option<DesiredLevel>,
    pub eligibility_awareness: EligibilityAwareness,
    pub residency: ResidencyStatus,
    pub credits_taken: u32,
    pub schools: SelectedSchoolSet,
    pub financial: FinancialInputs,
    pub visits: VisitDates,
    pub pathway_generated_at: Option<DateTime<Local>>,
}

/// Parse a typed amount. Empty, non-numeric and non-finite input counts as 0.
pub fn coerce_amount(text: &str) -> f64 {
    finite_or_zero(text.trim().parse::<f64>().unwrap_or(0.0))
}

/// Parse a typed count. Anything that is not a whole non-negative number counts as 0.
pub fn coerce_count(text: &str) -> u32 {
    let t = text.trim();
    t.parse::<u32>()
        .ok()
        .or_else(|| {
            let v = coerce_amount(t);
            (v >= 0.0 && v <= u32::MAX as f64).then(|| v.trunc() as u32)
        })
        .unwrap_or(0)
}

#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
