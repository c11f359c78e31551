//! Command router for the factor monitoring toolkit.
//!
//! The analysis, collection, dashboard and diagnostics programs are
//! separately maintained scripts; this crate owns only the routing layer
//! that selects one of them, the `.env` bootstrap, and the status report.

pub mod cli;
pub mod config;
pub mod exec;
pub mod logging;
pub mod ui;
