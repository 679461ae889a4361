//! Row structs for persisted entities.

pub mod report;
