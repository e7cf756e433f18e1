pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::session::{Session, SessionOptions, SessionStats};
pub use crate::config::Settings;
pub use crate::core::checksum::{compute_check, evaluate, isbn10_check, isbn13_check};
pub use crate::core::classifier::{classify, parse_command, Command};
pub use crate::domain::model::{CheckDigit, DigitSequence, IsbnKind, Request, Verdict};
pub use crate::utils::error::{InputError, IsbnError, Result};
