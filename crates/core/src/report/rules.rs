//! Structural report rules.
//!
//! Each rule is a pure check over a [`ReportRecord`] returning the violation
//! message, if any. Profiles chain rules from the most specific refinement
//! down to [`Rule::Base`]; the evaluator walks a chain in order and keeps
//! every message, so a refinement's message always precedes the message of
//! the rule it refines.

use super::record::{ReportField, ReportRecord};

pub const MISSING_LOCATION: &str = "Missing location info.";
pub const AMBIGUOUS_LOCATION: &str = "Location info is ambiguous.";
pub const MISSING_DESCRIPTION: &str = "Missing description.";
pub const MISSING_LUMINARY_CODE: &str = "Missing luminary code.";
pub const AMBIGUOUS_LUMINARY: &str = "Luminary code and image are both present.";

/// A single structural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Applies to every report; never fails.
    Base,
    /// Exactly one of `locationString` / `locationGeo`.
    Location,
    /// `desc` must be present. Always chained over [`Rule::Location`].
    Description,
    /// Exactly one of `luminaryCode` / `image`.
    Luminary,
}

impl Rule {
    /// Restricted fields this rule reads. A profile must allow all of them.
    pub fn fields(self) -> &'static [ReportField] {
        match self {
            Rule::Base => &[],
            Rule::Location => &[ReportField::LocationString, ReportField::LocationGeo],
            Rule::Description => &[ReportField::Desc],
            Rule::Luminary => &[ReportField::LuminaryCode],
        }
    }

    pub fn check(self, record: &ReportRecord) -> Option<&'static str> {
        match self {
            Rule::Base => None,
            Rule::Location => check_location(record),
            Rule::Description => check_description(record),
            Rule::Luminary => check_luminary(record),
        }
    }
}

fn check_location(record: &ReportRecord) -> Option<&'static str> {
    let by_name = record.has(ReportField::LocationString);
    let by_geo = record.has(ReportField::LocationGeo);
    match (by_name, by_geo) {
        (false, false) => Some(MISSING_LOCATION),
        (true, true) => Some(AMBIGUOUS_LOCATION),
        _ => None,
    }
}

fn check_description(record: &ReportRecord) -> Option<&'static str> {
    if record.has(ReportField::Desc) {
        None
    } else {
        Some(MISSING_DESCRIPTION)
    }
}

fn check_luminary(record: &ReportRecord) -> Option<&'static str> {
    match (record.has(ReportField::LuminaryCode), record.has_image()) {
        (false, false) => Some(MISSING_LUMINARY_CODE),
        (true, true) => Some(AMBIGUOUS_LUMINARY),
        _ => None,
    }
}

/// Run a chain and collect every violation, in chain order.
pub fn run_chain(chain: &[Rule], record: &ReportRecord) -> Vec<&'static str> {
    chain.iter().filter_map(|rule| rule.check(record)).collect()
}
