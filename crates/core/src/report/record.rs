//! Candidate report record and its schema-level constraints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field constraints
// ---------------------------------------------------------------------------

/// Maximum length of a luminary code (characters).
pub const MAX_LUMINARY_CODE_LENGTH: u64 = 32;
/// Maximum length of a free-form location (characters).
pub const MAX_LOCATION_STRING_LENGTH: u64 = 255;
/// Maximum length of a report description (characters).
pub const MAX_DESC_LENGTH: u64 = 255;

/// Accepted image file extensions, dot included.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

// ---------------------------------------------------------------------------
// Restricted fields
// ---------------------------------------------------------------------------

/// Optional report fields whose presence depends on the report category.
///
/// Fields common to every report (`image`, `creator`, `status`, ...) are not
/// listed here and are never whitelist-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportField {
    LuminaryCode,
    LocationString,
    LocationGeo,
    Desc,
}

impl ReportField {
    /// Every restricted field, in the order whitelist violations are reported.
    pub const ALL: [ReportField; 4] = [
        ReportField::LuminaryCode,
        ReportField::LocationString,
        ReportField::LocationGeo,
        ReportField::Desc,
    ];

    /// Wire name of the field, as it appears in request bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportField::LuminaryCode => "luminaryCode",
            ReportField::LocationString => "locationString",
            ReportField::LocationGeo => "locationGeo",
            ReportField::Desc => "desc",
        }
    }
}

impl std::fmt::Display for ReportField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Reference to an image already stored by the upload pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ImageRef {
    pub id: String,
    #[validate(custom(function = "validate_image_extension"))]
    pub extension: String,
}

impl ImageRef {
    /// Name of the stored full-size file.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.id, self.extension)
    }

    /// Name of the stored thumbnail. Thumbnails are always JPEG.
    pub fn thumbnail_name(&self) -> String {
        format!("{}_thumb.jpg", self.id)
    }
}

fn validate_image_extension(extension: &str) -> Result<(), ValidationError> {
    if IMAGE_EXTENSIONS.contains(&extension) {
        Ok(())
    } else {
        Err(ValidationError::new("image_extension")
            .with_message("Extension must be .png, .jpg or .jpeg".into()))
    }
}

/// Candidate report, as parsed from a request body.
///
/// Only the members the category engine cares about are modelled. Unknown
/// keys in the source body are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = MAX_LOCATION_STRING_LENGTH,
        message = "Location string must be less than 255 characters"
    ))]
    pub location_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub location_geo: Option<GeoPoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_DESC_LENGTH, message = "Description must be less than 255 characters"))]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = MAX_LUMINARY_CODE_LENGTH,
        message = "Luminary code must be less than 32 characters"
    ))]
    pub luminary_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub image: Option<ImageRef>,
}

impl ReportRecord {
    /// Parse a JSON request body into a record.
    pub fn from_json(body: serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(body)
            .map_err(|e| CoreError::Validation(format!("Malformed report body: {e}")))
    }

    /// Whether a restricted field carries a value. Empty strings count as
    /// absent.
    pub fn has(&self, field: ReportField) -> bool {
        match field {
            ReportField::LuminaryCode => is_filled(&self.luminary_code),
            ReportField::LocationString => is_filled(&self.location_string),
            ReportField::LocationGeo => self.location_geo.is_some(),
            ReportField::Desc => is_filled(&self.desc),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Trim string members in place. A value that trims to nothing is
    /// dropped.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.location_string);
        trim_in_place(&mut self.desc);
        trim_in_place(&mut self.luminary_code);
    }

    /// Check length, range and extension limits.
    ///
    /// All failing constraints are reported together, comma-joined, in a
    /// stable order.
    pub fn check_constraints(&self) -> Result<(), CoreError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let mut messages = Vec::new();
                collect_messages(&errors, &mut messages);
                Err(CoreError::Validation(messages.join(", ")))
            }
        }
    }
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn trim_in_place(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field}: {}", e.code),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_messages(inner, out);
                }
            }
        }
    }
}
