// src/log.rs
use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{ EnvFilter, fmt::time };

use crate::config::{ consts::LOG_ENV, options::LogOptions };

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("log subscriber already installed")]
    Init,
}

/// Install the file logger. `PCDA_LOG` overrides the configured filter.
/// Lines are stamped with time since start.
pub fn init(opts: &LogOptions) -> Result<(), LogError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&opts.default_filter).map_err(|source| LogError::Filter {
            value: opts.default_filter.clone(),
            source,
        })?,
    };

    if let Some(parent) = opts.file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(&opts.file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(time::uptime())
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|_| LogError::Init)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
