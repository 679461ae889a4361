//! Report category validation engine.
//!
//! Provides the category taxonomy, the candidate record type, composable
//! structural rules and the evaluator that ties them together, plus the
//! status lifecycle and body sanitizing used around a report commit.

pub mod evaluator;
pub mod record;
pub mod rules;
pub mod sanitize;
pub mod status;
pub mod taxonomy;

pub use evaluator::{check_allowed_fields, prepare_report, validate, ValidationResult};
pub use record::{GeoPoint, ImageRef, ReportField, ReportRecord};
pub use taxonomy::{resolve_profile, Category, ValidationProfile};
