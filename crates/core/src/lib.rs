//! Domain logic for municipal issue reports.
//!
//! Everything here is pure: no database, network or filesystem access. The
//! persistence layer calls into [`report::prepare_report`] right before a
//! report is committed.

pub mod error;
pub mod report;
pub mod types;
