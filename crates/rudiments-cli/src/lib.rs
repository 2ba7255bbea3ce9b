//! Command-line front end for rudiments-classifiers.
//!
//! `cli::build_cli` declares the argument grammar; each module under
//! `commands` turns parsed arguments into a learner configuration and runs
//! one harness.
pub mod cli;
pub mod commands;
pub mod util;
