use serde::{Deserialize, Serialize};

/// A single coworking space entry in the catalog.
///
/// The standardized enum fields drive filtering and sorting; the free-form
/// note fields add detail behind each standardized value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpaceDef {
    pub name: String,
    pub address: String,
    pub google_maps_url: String,
    pub coordinates: Coordinates,

    pub noise_level: NoiseLevel,
    #[serde(default)]
    pub wifi_speed: WifiSpeed,
    #[serde(default)]
    pub has_ac: HasAc,
    pub food_availability: FoodAvailability,
    pub seating_type: SeatingType,
    #[serde(default)]
    pub has_outlets: OutletAvailability,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub opening_hours: String,

    #[serde(default)]
    pub atmosphere_notes: String,
    #[serde(default)]
    pub wifi_notes: String,
    #[serde(default)]
    pub climate_notes: String,
    #[serde(default)]
    pub food_notes: String,
    #[serde(default)]
    pub drink_notes: String,
    #[serde(default)]
    pub seating_notes: String,
    #[serde(default)]
    pub outlet_notes: String,
}

impl Default for SpaceDef {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            google_maps_url: String::new(),
            coordinates: Coordinates::default(),
            noise_level: NoiseLevel::Medium,
            wifi_speed: WifiSpeed::default(),
            has_ac: HasAc::default(),
            food_availability: FoodAvailability::None,
            seating_type: SeatingType::Mixed,
            has_outlets: OutletAvailability::default(),
            description: String::new(),
            opening_hours: String::new(),
            atmosphere_notes: String::new(),
            wifi_notes: String::new(),
            climate_notes: String::new(),
            food_notes: String::new(),
            drink_notes: String::new(),
            seating_notes: String::new(),
            outlet_notes: String::new(),
        }
    }
}

/// Map location of a space.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Ambient noise while working. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseLevel {
    Quiet,
    Medium,
    Loud,
}

impl NoiseLevel {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "quiet" => Some(Self::Quiet),
            "medium" => Some(Self::Medium),
            "loud" => Some(Self::Loud),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Medium => "Medium",
            Self::Loud => "Loud",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Quiet => "Library-like atmosphere with minimal background noise",
            Self::Medium => "Cafe ambiance with background chatter and music at moderate volume",
            Self::Loud => "Lively environment with loud music and busy conversations",
        }
    }
}

/// Measured or reported WiFi speed band. Variant order is the sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifiSpeed {
    #[default]
    Unknown,
    Slow,
    Medium,
    Fast,
}

impl WifiSpeed {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "unknown" => Some(Self::Unknown),
            "slow" => Some(Self::Slow),
            "medium" => Some(Self::Medium),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Slow => "Slow",
            Self::Medium => "Medium",
            Self::Fast => "Fast",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Unknown => "WiFi speed has not been tested yet",
            Self::Slow => "Under 25 Mbps, suitable for browsing and email",
            Self::Medium => "25-100 Mbps, good for video calls and general work",
            Self::Fast => "Over 100 Mbps, great for large uploads and multiple devices",
        }
    }
}

/// Whether the space has air conditioning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasAc {
    Yes,
    No,
    #[default]
    Unknown,
}

impl HasAc {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Has AC",
            Self::No => "No AC",
            Self::Unknown => "Unknown",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Yes => "Air conditioning available, stays cool in summer",
            Self::No => "No air conditioning, may be warm on hot days",
            Self::Unknown => "Climate control has not been checked yet",
        }
    }
}

/// What the space serves beyond drinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodAvailability {
    None,
    Light,
    Full,
}

impl FoodAvailability {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "none" => Some(Self::None),
            "light" => Some(Self::Light),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No Food",
            Self::Light => "Light Food",
            Self::Full => "Full Menu",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::None => "No food available, drinks only",
            Self::Light => "Snacks and light bites like pastries and sandwiches",
            Self::Full => "Full menu with hot meals and substantial food options",
        }
    }
}

/// Dominant table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatingType {
    Individual,
    Mixed,
    Group,
}

impl SeatingType {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "individual" => Some(Self::Individual),
            "mixed" => Some(Self::Mixed),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual Tables",
            Self::Mixed => "Mixed Seating",
            Self::Group => "Group Tables",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Individual => "Mostly 1-2 person tables, best for solo work",
            Self::Mixed => "Variety of table sizes for both solo and group work",
            Self::Group => "Primarily large tables (4+ people) with communal seating",
        }
    }
}

/// How easy it is to find a power outlet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutletAvailability {
    Few,
    Some,
    Many,
    #[default]
    Unknown,
}

impl OutletAvailability {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "few" => Some(Self::Few),
            "some" => Some(Self::Some),
            "many" => Some(Self::Many),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Few => "Few Outlets",
            Self::Some => "Some Outlets",
            Self::Many => "Many Outlets",
            Self::Unknown => "Unknown",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Few => "1-2 outlets in the space, arrive early to claim one",
            Self::Some => "Several outlets available, most seats have access",
            Self::Many => "Outlets at every table or seat",
            Self::Unknown => "Outlet availability has not been checked yet",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_keys_round_trip() {
        assert_eq!(NoiseLevel::from_key("quiet"), Some(NoiseLevel::Quiet));
        assert_eq!(WifiSpeed::from_key("fast"), Some(WifiSpeed::Fast));
        assert_eq!(OutletAvailability::from_key("lots"), None);
    }

    #[test]
    fn wifi_and_noise_sort_orders() {
        assert!(WifiSpeed::Unknown < WifiSpeed::Slow);
        assert!(WifiSpeed::Slow < WifiSpeed::Fast);
        assert!(NoiseLevel::Quiet < NoiseLevel::Loud);
    }

    #[test]
    fn space_def_deserializes_with_defaults() {
        let json = r#"{
            "name": "Alpha Cafe",
            "address": "1 Main St",
            "google_maps_url": "https://maps.google.com/?q=alpha",
            "coordinates": { "lat": 52.37, "lng": 4.89 },
            "noise_level": "quiet",
            "food_availability": "light",
            "seating_type": "mixed"
        }"#;
        let space: SpaceDef = serde_json::from_str(json).unwrap();
        assert_eq!(space.noise_level, NoiseLevel::Quiet);
        assert_eq!(space.wifi_speed, WifiSpeed::Unknown);
        assert_eq!(space.has_outlets, OutletAvailability::Unknown);
        assert!(space.description.is_empty());
    }
}
