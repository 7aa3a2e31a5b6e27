//! CLI subcommand implementations for the sitekeeper binary.

pub mod check_cmd;
pub mod doctor;
pub mod localize_cmd;
pub mod output;
