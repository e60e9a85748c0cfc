//! Runtime catalog: the loaded space list plus filter and sort state.
//!
//! Filtering and sorting are pure over the loaded dataset; the visited store
//! is consulted separately by the presentation layer.

use deskhop_data::{
    FoodAvailability, HasAc, NoiseLevel, OutletAvailability, SeatingType, SpaceDef, WifiSpeed,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slug::slugify;

/// One optional criterion per standardized field; `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub noise_level: Option<NoiseLevel>,
    pub wifi_speed: Option<WifiSpeed>,
    pub has_ac: Option<HasAc>,
    pub food_availability: Option<FoodAvailability>,
    pub seating_type: Option<SeatingType>,
    pub has_outlets: Option<OutletAvailability>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `space` satisfies every active criterion.
    pub fn matches(&self, space: &SpaceDef) -> bool {
        self.noise_level.is_none_or(|want| space.noise_level == want)
            && self.wifi_speed.is_none_or(|want| space.wifi_speed == want)
            && self.has_ac.is_none_or(|want| space.has_ac == want)
            && self.food_availability.is_none_or(|want| space.food_availability == want)
            && self.seating_type.is_none_or(|want| space.seating_type == want)
            && self.has_outlets.is_none_or(|want| space.has_outlets == want)
    }
}

/// Catalog columns the listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Wifi,
    Noise,
}

impl SortField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "wifi" => Some(Self::Wifi),
            "noise" => Some(Self::Noise),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Active ordering for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

/// Why a name or slug failed to resolve to a catalog entry.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no space matching '{0}'")]
    NoMatch(String),
    #[error("'{input}' is ambiguous: matches {candidates}")]
    Ambiguous { input: String, candidates: String },
}

/// The loaded space list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub spaces: Vec<SpaceDef>,
}

impl Catalog {
    pub fn new(spaces: Vec<SpaceDef>) -> Self {
        Self { spaces }
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Filtered, sorted view of the catalog. Ties fall back to name order so
    /// the listing is stable.
    pub fn view(&self, filter: &FilterState, sort: SortState) -> Vec<&SpaceDef> {
        let mut view: Vec<&SpaceDef> = self.spaces.iter().filter(|space| filter.matches(space)).collect();
        view.sort_by(|a, b| {
            let by_name = || a.name.to_lowercase().cmp(&b.name.to_lowercase());
            let ordering = match sort.field {
                SortField::Name => by_name(),
                SortField::Wifi => a.wifi_speed.cmp(&b.wifi_speed).then_with(by_name),
                SortField::Noise => a.noise_level.cmp(&b.noise_level).then_with(by_name),
            };
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        view
    }

    /// Resolve user input to a space: exact slug match first, then unique
    /// case-insensitive name prefix.
    ///
    /// # Errors
    /// [`ResolveError::NoMatch`] when nothing fits, [`ResolveError::Ambiguous`]
    /// when a prefix hits several spaces.
    pub fn resolve(&self, pattern: &str) -> Result<&SpaceDef, ResolveError> {
        let wanted = slugify(pattern);
        if !wanted.is_empty()
            && let Some(space) = self.spaces.iter().find(|space| slugify(&space.name) == wanted)
        {
            return Ok(space);
        }

        let needle = pattern.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ResolveError::NoMatch(pattern.to_string()));
        }
        let found: Vec<&SpaceDef> = self
            .spaces
            .iter()
            .filter(|space| space.name.to_lowercase().starts_with(&needle))
            .collect();
        match found.as_slice() {
            [] => Err(ResolveError::NoMatch(pattern.to_string())),
            [space] => Ok(space),
            many => Err(ResolveError::Ambiguous {
                input: pattern.to_string(),
                candidates: many.iter().map(|space| space.name.as_str()).collect::<Vec<_>>().join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskhop_data::Coordinates;

    fn space(name: &str, noise: NoiseLevel, wifi: WifiSpeed) -> SpaceDef {
        SpaceDef {
            name: name.into(),
            address: "1 Main St".into(),
            google_maps_url: "https://maps.google.com/?q=test".into(),
            coordinates: Coordinates { lat: 52.0, lng: 4.0 },
            noise_level: noise,
            wifi_speed: wifi,
            ..SpaceDef::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            space("Beta Hub", NoiseLevel::Loud, WifiSpeed::Fast),
            space("Alpha Cafe", NoiseLevel::Quiet, WifiSpeed::Slow),
            space("Gamma Works", NoiseLevel::Quiet, WifiSpeed::Fast),
        ])
    }

    #[test]
    fn view_sorts_by_name_ascending_by_default() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .view(&FilterState::default(), SortState::default())
            .iter()
            .map(|space| space.name.as_str())
            .collect();
        assert_eq!(names, ["Alpha Cafe", "Beta Hub", "Gamma Works"]);
    }

    #[test]
    fn view_filters_then_sorts() {
        let catalog = catalog();
        let filter = FilterState {
            noise_level: Some(NoiseLevel::Quiet),
            ..FilterState::default()
        };
        let sort = SortState {
            field: SortField::Wifi,
            direction: SortDirection::Desc,
        };
        let names: Vec<&str> = catalog
            .view(&filter, sort)
            .iter()
            .map(|space| space.name.as_str())
            .collect();
        assert_eq!(names, ["Gamma Works", "Alpha Cafe"]);
    }

    #[test]
    fn resolve_prefers_exact_slug() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("beta-hub").unwrap().name, "Beta Hub");
        assert_eq!(catalog.resolve("Beta Hub!").unwrap().name, "Beta Hub");
    }

    #[test]
    fn resolve_falls_back_to_name_prefix() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("gam").unwrap().name, "Gamma Works");
        assert!(matches!(catalog.resolve("delta"), Err(ResolveError::NoMatch(_))));
    }

    #[test]
    fn resolve_reports_ambiguity() {
        let mut catalog = catalog();
        catalog.spaces.push(space("Beta Annex", NoiseLevel::Medium, WifiSpeed::Medium));
        match catalog.resolve("bet") {
            Err(ResolveError::Ambiguous { candidates, .. }) => {
                assert!(candidates.contains("Beta Hub"));
                assert!(candidates.contains("Beta Annex"));
            },
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }
}
