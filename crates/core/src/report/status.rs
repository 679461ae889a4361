//! Report status constants and lifecycle validation.
//!
//! Reports start out pending and are closed by an administrator, optionally
//! with a closing message addressed to the reporter.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Maximum length of the closing message (characters).
pub const MAX_END_MESSAGE_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Submitted, waiting for an administrator.
    Pending = 0,
    /// Resolved by an administrator.
    Completed = 1,
}

impl ReportStatus {
    pub fn from_id(id: i64) -> Result<Self, CoreError> {
        match id {
            0 => Ok(ReportStatus::Pending),
            1 => Ok(ReportStatus::Completed),
            _ => Err(CoreError::Validation(format!(
                "Invalid report status number: {id}"
            ))),
        }
    }

    pub fn id(self) -> i64 {
        self as i64
    }

    /// Statuses this status may move to.
    pub fn valid_transitions(self) -> &'static [ReportStatus] {
        match self {
            ReportStatus::Pending => &[ReportStatus::Completed],
            ReportStatus::Completed => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Validate a status change and its optional closing message.
pub fn validate_status_change(
    current: ReportStatus,
    next: ReportStatus,
    end_message: Option<&str>,
) -> Result<(), CoreError> {
    if !current.valid_transitions().contains(&next) {
        return Err(CoreError::Conflict(format!(
            "Cannot transition report from {current:?} to {next:?}"
        )));
    }

    if let Some(message) = end_message {
        let len = message.chars().count();
        if len > MAX_END_MESSAGE_LENGTH {
            return Err(CoreError::Validation(format!(
                "End message exceeds maximum length of {MAX_END_MESSAGE_LENGTH} characters (got {len})"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn status_ids() {
        assert_eq!(ReportStatus::from_id(0).unwrap(), ReportStatus::Pending);
        assert_eq!(ReportStatus::from_id(1).unwrap(), ReportStatus::Completed);
        assert_matches!(ReportStatus::from_id(2), Err(CoreError::Validation(_)));
        assert_eq!(ReportStatus::Completed.id(), 1);
    }

    #[test]
    fn pending_can_complete() {
        assert!(validate_status_change(ReportStatus::Pending, ReportStatus::Completed, None).is_ok());
        assert!(validate_status_change(
            ReportStatus::Pending,
            ReportStatus::Completed,
            Some("Fixed, thanks!")
        )
        .is_ok());
    }

    #[test]
    fn completed_is_final() {
        assert_matches!(
            validate_status_change(ReportStatus::Completed, ReportStatus::Pending, None),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            validate_status_change(ReportStatus::Completed, ReportStatus::Completed, None),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn end_message_length_limit() {
        let at_limit = "a".repeat(MAX_END_MESSAGE_LENGTH);
        assert!(validate_status_change(
            ReportStatus::Pending,
            ReportStatus::Completed,
            Some(&at_limit)
        )
        .is_ok());

        let over = "a".repeat(MAX_END_MESSAGE_LENGTH + 1);
        assert_matches!(
            validate_status_change(ReportStatus::Pending, ReportStatus::Completed, Some(&over)),
            Err(CoreError::Validation(_))
        );
    }
}
