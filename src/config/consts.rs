// src/config/consts.rs

// Program fee (USD)
pub const TOTAL_FEE: f64 = 31_750.0;

// Upper bound for dollar inputs in the GUI
pub const MAX_AMOUNT: f64 = 10_000_000.0;

// Eligibility window thresholds (credits)
pub const GAP_YEAR_MAX_CREDITS: u32 = 22;
pub const REDSHIRT_MIN_CREDITS: u32 = 24;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const CSV_FILENAME: &str = "PCDA_Presentation_Summary.csv";
pub const PDF_FILENAME: &str = "PCDA_Summary.pdf";
pub const SUMMARY_REGION: &str = "pcda-summary";
pub const JPEG_QUALITY: u8 = 85;

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILENAME: &str = "debug.log";
pub const LOG_ENV: &str = "PCDA_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Window
pub const APP_TITLE: &str = "PCDA Interactive Presentation";
pub const APP_SUBTITLE: &str = "Prospective Student-Athlete Session";
