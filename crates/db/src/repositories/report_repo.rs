//! Repository for the `reports` table.

use civic_core::error::CoreError;
use civic_core::report::status::{validate_status_change, ReportStatus};
use civic_core::report::{prepare_report, ReportRecord};
use civic_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::report::Report;

/// Column list for `reports` queries.
const COLUMNS: &str = "\
    id, category, status, creator_id, luminary_code, location_string, \
    latitude, longitude, description, image_id, image_extension, \
    end_message, created_at, updated_at";

/// Provides persistence for citizen reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Validate and insert a new report, returning the stored row.
    ///
    /// The record goes through [`prepare_report`] first; if it is rejected
    /// nothing is written and the core error is returned.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        mut record: ReportRecord,
    ) -> Result<Report, DbError> {
        let category = match prepare_report(&mut record) {
            Ok(category) => category,
            Err(err) => {
                tracing::warn!(creator_id, error = %err, "Report rejected before commit");
                return Err(err.into());
            }
        };

        let (latitude, longitude) = record
            .location_geo
            .map(|geo| (geo.latitude, geo.longitude))
            .unzip();
        let (image_id, image_extension) = record
            .image
            .map(|image| (image.id, image.extension))
            .unzip();

        let query = format!(
            "INSERT INTO reports \
                (category, status, creator_id, luminary_code, location_string, \
                 latitude, longitude, description, image_id, image_extension) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(category.id() as i16)
            .bind(ReportStatus::Pending.id() as i16)
            .bind(creator_id)
            .bind(&record.luminary_code)
            .bind(&record.location_string)
            .bind(latitude)
            .bind(longitude)
            .bind(&record.desc)
            .bind(image_id)
            .bind(image_extension)
            .fetch_one(pool)
            .await?;

        tracing::info!(
            report_id = report.id,
            category = ?category,
            creator_id,
            "Report created"
        );
        Ok(report)
    }

    /// Find a report by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the reports submitted by one user, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        creator_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports WHERE creator_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(creator_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a pending report as completed, optionally with a closing message.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        end_message: Option<&str>,
    ) -> Result<Report, DbError> {
        let current = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "report",
                id,
            })?;
        let status = current.status()?;
        let end_message = end_message.map(str::trim).filter(|m| !m.is_empty());
        validate_status_change(status, ReportStatus::Completed, end_message)?;

        // The status guard keeps two concurrent completions from both winning.
        let query = format!(
            "UPDATE reports SET status = $1, end_message = $2, updated_at = now() \
             WHERE id = $3 AND status = $4 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Report>(&query)
            .bind(ReportStatus::Completed.id() as i16)
            .bind(end_message)
            .bind(id)
            .bind(current.status)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Conflict(format!("Report {id} was modified concurrently")))?;

        tracing::info!(report_id = id, "Report completed");
        Ok(updated)
    }
}
