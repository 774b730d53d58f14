// src/schools.rs
//
// School directory: an ordered, read-only list of school records.
// Loaded once (bundled sample or a user-supplied JSON file) and only read after that.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

use crate::session::SelectedSchoolSet;

static BUNDLED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/schools.json"));

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub avg_class_size: u32,
    /// Season label → record summary, e.g. "Season 2023" → "10-5-2", in file order
    #[serde(default)]
    pub records: IndexMap<String, String>,
}

impl SchoolRecord {
    fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.level.to_lowercase().contains(term)
            || self.location.to_lowercase().contains(term)
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("cannot read school directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid school directory JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate school id: {0}")]
    DuplicateId(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchoolDirectory {
    schools: Vec<SchoolRecord>,
}

impl SchoolDirectory {
    pub fn new(schools: Vec<SchoolRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(schools.len());
        for s in &schools {
            if !seen.insert(s.id.as_str()) {
                return Err(DirectoryError::DuplicateId(s.id.clone()));
            }
        }
        Ok(Self { schools })
    }

    pub fn from_json_str(text: &str) -> Result<Self, DirectoryError> {
        let schools: Vec<SchoolRecord> = serde_json::from_str(text)?;
        Self::new(schools)
    }

    pub fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let text = fs::read_to_string(path)?;
        let dir = Self::from_json_str(&text)?;
        logf!("Directory: loaded {} schools from {}", dir.len(), path.display());
        Ok(dir)
    }

    /// The sample directory shipped with the app.
    pub fn bundled() -> Result<Self, DirectoryError> {
        Self::from_json_str(BUNDLED)
    }

    #[inline] pub fn len(&self) -> usize { self.schools.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.schools.is_empty() }
    #[inline] pub fn all(&self) -> &[SchoolRecord] { &self.schools }

    pub fn get(&self, id: &str) -> Option<&SchoolRecord> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// Selected records in directory order. Ids with no record are skipped.
    pub fn resolve(&self, selection: &SelectedSchoolSet) -> Vec<&SchoolRecord> {
        self.schools.iter().filter(|s| selection.contains(&s.id)).collect()
    }

    /// Selected records in selection order. Ids with no record are skipped.
    pub fn resolve_in_selection_order(&self, selection: &SelectedSchoolSet) -> Vec<&SchoolRecord> {
        selection.iter().filter_map(|id| self.get(id)).collect()
    }
}

/// Case-insensitive substring search over name, level and location.
/// An empty (or all-whitespace) query returns the whole directory.
/// Matches keep directory order.
pub fn filter_schools<'a>(directory: &'a SchoolDirectory, query: &str) -> Vec<&'a SchoolRecord> {
    let term = query.trim().to_lowercase();
    directory
        .schools
        .iter()
        .filter(|s| term.is_empty() || s.matches(&term))
        .collect()
}
