//! # uic-cli: Rolling Stock Number Command-Line Interface
//!
//! Thin clap front end over `uic-core`. Checks the identifiers given as
//! arguments, or runs the built-in reference corpora when there are none.
//!
//! ## Modules
//!
//! - `check`: Batch dispatch, generate mode, and exit codes
//! - `config`: Validation policy from YAML file and flags
//! - `output`: Text and JSON line rendering
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from checking.
//! - No checksum logic here; everything delegates to `uic-core`.

pub mod check;
pub mod config;
pub mod output;
