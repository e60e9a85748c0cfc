use std::collections::HashSet;
use std::fmt;

use crate::{Coordinates, SpaceDef};

/// Validation finding for a malformed catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingField { space: String, field: &'static str },
    InvalidLatitude { space: String, lat: f64 },
    InvalidLongitude { space: String, lng: f64 },
    DuplicateName { name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { space, field } => {
                write!(f, "space '{space}' is missing {field}")
            },
            ValidationError::InvalidLatitude { space, lat } => {
                write!(f, "space '{space}' has invalid latitude {lat} (must be between -90 and 90)")
            },
            ValidationError::InvalidLongitude { space, lng } => {
                write!(f, "space '{space}' has invalid longitude {lng} (must be between -180 and 180)")
            },
            ValidationError::DuplicateName { name } => {
                write!(f, "duplicate space name '{name}'")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate required fields, coordinate ranges, and name uniqueness across
/// the catalog.
///
/// ```
/// use deskhop_data::{Coordinates, SpaceDef, validate_spaces};
///
/// let spaces = vec![SpaceDef {
///     name: "Alpha Cafe".into(),
///     address: "1 Main St".into(),
///     google_maps_url: "https://maps.google.com/?q=alpha".into(),
///     coordinates: Coordinates { lat: 52.37, lng: 4.89 },
///     ..SpaceDef::default()
/// }];
/// assert!(validate_spaces(&spaces).is_empty());
/// ```
pub fn validate_spaces(spaces: &[SpaceDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();

    for space in spaces {
        let label = if space.name.trim().is_empty() {
            "(unnamed)".to_string()
        } else {
            space.name.clone()
        };

        if space.name.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                space: label.clone(),
                field: "name",
            });
        } else if !seen_names.insert(space.name.trim().to_lowercase()) {
            errors.push(ValidationError::DuplicateName { name: space.name.clone() });
        }

        if space.address.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                space: label.clone(),
                field: "address",
            });
        }
        if space.google_maps_url.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                space: label.clone(),
                field: "Google Maps URL",
            });
        }

        let Coordinates { lat, lng } = space.coordinates;
        if !(-90.0..=90.0).contains(&lat) {
            errors.push(ValidationError::InvalidLatitude { space: label.clone(), lat });
        }
        if !(-180.0..=180.0).contains(&lng) {
            errors.push(ValidationError::InvalidLongitude { space: label, lng });
        }
    }

    errors
}
