// src/config/options.rs
use std::path::{ Path, PathBuf };

use super::consts::*;
use crate::pdf::PageFormat;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub engine: EngineConfig,
    pub export: ExportOptions,
    pub log: LogOptions,
}

/// Inputs to the derivation engine that are not form fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EngineConfig {
    pub fees: FeeSchedule,
    pub thresholds: EligibilityThresholds,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeeSchedule {
    pub total_fee: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self { total_fee: TOTAL_FEE }
    }
}

/// `gap_year_max` is inclusive, `redshirt_min` is inclusive.
/// The two ranges are evaluated independently of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EligibilityThresholds {
    pub gap_year_max: u32,
    pub redshirt_min: u32,
}

impl Default for EligibilityThresholds {
    fn default() -> Self {
        Self {
            gap_year_max: GAP_YEAR_MAX_CREDITS,
            redshirt_min: REDSHIRT_MIN_CREDITS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvLayout {
    /// Header row of field names + one data row.
    #[default]
    Wide,
    /// `Field,Value` header + one row per field.
    KeyValue,
}

impl CsvLayout {
    pub fn label(&self) -> &'static str {
        match self {
            CsvLayout::Wide => "One row",
            CsvLayout::KeyValue => "Field / Value",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub csv_layout: CsvLayout,
    pub page: PageFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv_layout: CsvLayout::Wide,
            page: PageFormat::A4,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    pub fn csv_path(&self) -> PathBuf {
        Self::join_dir_and_filename(&self.out_dir, CSV_FILENAME)
    }

    pub fn pdf_path(&self) -> PathBuf {
        Self::join_dir_and_filename(&self.out_dir, PDF_FILENAME)
    }

    /// Parse GUI text into the output directory. File names are fixed,
    /// so a pasted file name is dropped in favor of its parent.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR);
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        self.out_dir = if Self::looks_like_file(&p) {
            p.parent().map(Path::to_path_buf).unwrap_or_default()
        } else {
            p
        };
    }

    /// An existing file, or a name ending in one of our export extensions.
    /// Dotted folder names like `2025.fall` stay folders.
    fn looks_like_file(p: &Path) -> bool {
        if p.is_file() {
            return true;
        }
        p.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv") || e.eq_ignore_ascii_case("pdf"))
    }

    pub fn join_dir_and_filename(dir: &Path, file_name: impl AsRef<Path>) -> PathBuf {
        if dir.as_os_str().is_empty() {
            PathBuf::from(file_name.as_ref())
        } else {
            dir.join(file_name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogOptions {
    pub file: PathBuf,
    /// Used when `PCDA_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(STORE_DIR).join(LOG_FILENAME),
            default_filter: s!(DEFAULT_LOG_FILTER),
        }
    }
}
