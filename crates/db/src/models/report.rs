//! Report entity model.

use civic_core::error::CoreError;
use civic_core::report::status::ReportStatus;
use civic_core::report::{Category, GeoPoint, ImageRef};
use civic_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub category: i16,
    pub status: i16,
    pub creator_id: DbId,
    pub luminary_code: Option<String>,
    pub location_string: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub image_id: Option<String>,
    pub image_extension: Option<String>,
    pub end_message: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Report {
    /// Stored category. An out-of-range value is a server fault, not caller
    /// input, so it surfaces as [`CoreError::Internal`].
    pub fn category(&self) -> Result<Category, CoreError> {
        Category::from_id(i64::from(self.category)).map_err(|e| self.corrupt(e))
    }

    /// Stored status, with the same error mapping as [`Report::category`].
    pub fn status(&self) -> Result<ReportStatus, CoreError> {
        ReportStatus::from_id(i64::from(self.status)).map_err(|e| self.corrupt(e))
    }

    fn corrupt(&self, err: CoreError) -> CoreError {
        CoreError::Internal(format!("Stored report {} is corrupt: {err}", self.id))
    }

    pub fn location_geo(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<ImageRef> {
        match (&self.image_id, &self.image_extension) {
            (Some(id), Some(extension)) => Some(ImageRef {
                id: id.clone(),
                extension: extension.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn row(category: i16, status: i16) -> Report {
        Report {
            id: 7,
            category,
            status,
            creator_id: 1,
            luminary_code: None,
            location_string: Some("Main St".into()),
            latitude: None,
            longitude: None,
            description: None,
            image_id: None,
            image_extension: None,
            end_message: None,
            created_at: Timestamp::default(),
            updated_at: Timestamp::default(),
        }
    }

    #[test]
    fn valid_row_decodes() {
        let report = row(3, 1);
        assert_eq!(report.category().unwrap(), Category::Branches);
        assert_eq!(report.status().unwrap(), ReportStatus::Completed);
        assert!(report.location_geo().is_none());
        assert!(report.image().is_none());
    }

    #[test]
    fn out_of_range_values_are_internal_errors() {
        let err = row(42, 0).category().unwrap_err();
        assert!(!err.is_client_error());
        assert_matches!(&err, CoreError::Internal(msg) if msg.contains("Stored report 7"));

        assert_matches!(row(0, 9).status(), Err(CoreError::Internal(_)));
    }
}
