//! GitHub issue links for suggesting and correcting catalog entries.

use deskhop_data::SpaceDef;
use url::Url;

/// Issue URL for proposing a brand-new space.
pub fn new_space_url(repo: &str) -> String {
    format!("https://github.com/{repo}/issues/new?template=suggest-space.yml")
}

/// Issue URL for updating an existing space, with form fields pre-filled
/// from the record. Optional note fields are appended only when non-empty.
pub fn update_space_url(repo: &str, space: &SpaceDef) -> String {
    let Ok(mut url) = Url::parse(&format!("https://github.com/{repo}/issues/new")) else {
        return new_space_url(repo);
    };
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("template", "update-space.yml");
        pairs.append_pair("title", &format!("[Update]: {}", space.name));
        pairs.append_pair("name", &space.name);
        pairs.append_pair("address", &space.address);
        pairs.append_pair("google-maps", &space.google_maps_url);

        for (key, value) in [
            ("description", &space.description),
            ("opening-hours", &space.opening_hours),
            ("atmosphere-notes", &space.atmosphere_notes),
            ("wifi-notes", &space.wifi_notes),
            ("climate-notes", &space.climate_notes),
            ("food-notes", &space.food_notes),
            ("drink-notes", &space.drink_notes),
            ("seating-notes", &space.seating_notes),
            ("outlet-notes", &space.outlet_notes),
        ] {
            if !value.is_empty() {
                pairs.append_pair(key, value);
            }
        }
    }
    url.to_string()
}
