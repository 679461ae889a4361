//! Category evaluator: pure logic, no database access.

use super::record::{ReportField, ReportRecord};
use super::rules::run_chain;
use super::taxonomy::{resolve_profile, Category, ValidationProfile};
use crate::error::CoreError;

/// Separator used when aggregating rule messages.
const JOIN_CHAR: &str = " ";

/// Outcome of running a category's rule chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Every violated rule's message, most specific rule first, space-joined.
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Convert into a `Result`, mapping `Invalid` to
    /// [`CoreError::ReportRuleViolation`].
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(message) => Err(CoreError::ReportRuleViolation(message)),
        }
    }
}

/// Restricted fields present in `record` that `profile` does not allow, in
/// [`ReportField::ALL`] order.
pub fn check_allowed_fields(profile: &ValidationProfile, record: &ReportRecord) -> Vec<ReportField> {
    ReportField::ALL
        .into_iter()
        .filter(|field| record.has(*field) && !profile.allows(*field))
        .collect()
}

/// Validate a record against the rules of its category.
///
/// Fails with [`CoreError::UnknownCategory`] before anything else is looked
/// at, then with [`CoreError::InvalidFieldsForCategory`] before any rule
/// runs. Rule violations are not errors: they are all collected into
/// [`ValidationResult::Invalid`].
pub fn validate(category_id: i64, record: &ReportRecord) -> Result<ValidationResult, CoreError> {
    let profile = match resolve_profile(category_id) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::debug!(category = category_id, "Report has an unknown category");
            return Err(err);
        }
    };

    let disallowed = check_allowed_fields(profile, record);
    if !disallowed.is_empty() {
        tracing::debug!(
            category = category_id,
            fields = ?disallowed,
            "Report carries fields not allowed for its category"
        );
        return Err(CoreError::InvalidFieldsForCategory(
            disallowed.iter().map(|f| f.as_str().to_string()).collect(),
        ));
    }

    let violations = run_chain(profile.rules, record);
    if violations.is_empty() {
        return Ok(ValidationResult::Valid);
    }

    tracing::debug!(
        category = category_id,
        violations = violations.len(),
        "Report failed category rules"
    );
    Ok(ValidationResult::Invalid(violations.join(JOIN_CHAR)))
}

/// Pre-commit hook run by the persistence layer.
///
/// Normalizes the record in place, enforces field constraints, then runs
/// category validation. A record without a category is treated as
/// [`Category::Other`]. Returns the resolved category on success.
pub fn prepare_report(record: &mut ReportRecord) -> Result<Category, CoreError> {
    record.normalize();
    record.check_constraints()?;

    let category_id = *record.category.get_or_insert(Category::Other.id());
    validate(category_id, record)?.into_result()?;

    Category::from_id(category_id)
}
