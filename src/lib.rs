// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod csv;
pub mod file;
pub mod format;
pub mod gui;
pub mod pdf;
pub mod progress;
pub mod schools;
pub mod session;
