//! Report category taxonomy.
//!
//! The set of categories is closed. Each one maps to a static
//! [`ValidationProfile`]: the restricted fields it accepts and the rule chain
//! it is checked against.

use serde::{Deserialize, Serialize};

use super::record::ReportField;
use super::rules::Rule;
use crate::error::CoreError;

/// Report categories. Discriminants are the wire and storage identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Other = 0,
    Luminary = 1,
    DogFeces = 2,
    Branches = 3,
    OvergrownGrass = 4,
    FacilitiesFault = 5,
    LeashlessDog = 6,
    Garbage = 7,
    FacilitiesMisuse = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Other,
        Category::Luminary,
        Category::DogFeces,
        Category::Branches,
        Category::OvergrownGrass,
        Category::FacilitiesFault,
        Category::LeashlessDog,
        Category::Garbage,
        Category::FacilitiesMisuse,
    ];

    /// Look up a category by its numeric identifier.
    pub fn from_id(id: i64) -> Result<Self, CoreError> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(CoreError::UnknownCategory(id))
    }

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn profile(self) -> &'static ValidationProfile {
        match self {
            Category::Other
            | Category::FacilitiesFault
            | Category::LeashlessDog
            | Category::Garbage
            | Category::FacilitiesMisuse => &DESCRIBED,
            Category::Luminary => &LUMINARY,
            Category::DogFeces | Category::Branches | Category::OvergrownGrass => &LOCATED,
        }
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Category-specific validation settings.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationProfile {
    /// Restricted fields a report of this category may carry.
    pub allowed_fields: &'static [ReportField],
    /// Structural rules, most specific first, ending with [`Rule::Base`].
    pub rules: &'static [Rule],
}

impl ValidationProfile {
    pub fn allows(&self, field: ReportField) -> bool {
        self.allowed_fields.contains(&field)
    }
}

static LOCATED: ValidationProfile = ValidationProfile {
    allowed_fields: &[ReportField::LocationString, ReportField::LocationGeo],
    rules: &[Rule::Location, Rule::Base],
};

static DESCRIBED: ValidationProfile = ValidationProfile {
    allowed_fields: &[
        ReportField::LocationString,
        ReportField::LocationGeo,
        ReportField::Desc,
    ],
    rules: &[Rule::Description, Rule::Location, Rule::Base],
};

static LUMINARY: ValidationProfile = ValidationProfile {
    allowed_fields: &[ReportField::LuminaryCode],
    rules: &[Rule::Luminary, Rule::Base],
};

/// Resolve the profile for a raw category identifier.
pub fn resolve_profile(category_id: i64) -> Result<&'static ValidationProfile, CoreError> {
    Category::from_id(category_id).map(Category::profile)
}
