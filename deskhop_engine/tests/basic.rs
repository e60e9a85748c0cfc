use deskhop_engine as de;
use deskhop_engine::{Catalog, FilterState, SortDirection, SortField, SortState, VisitedStore};

use deskhop_data::{Coordinates, NoiseLevel, SpaceDef, WifiSpeed};
use tempfile::tempdir;
use url::Url;

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

#[test]
fn test_lib_version() {
    assert!(!de::DESKHOP_VERSION.is_empty());
}

#[test]
fn test_slugify_normalizes_names() {
    assert_eq!(de::slugify("  Grind & Graft  "), "grind-graft");
    assert_eq!(de::slugify(de::slugify("Grind & Graft").as_str()), "grind-graft");
}

#[test]
fn test_command_parse() {
    use de::command::*;
    assert!(matches!(parse_command("list"), Command::List));
    assert!(matches!(parse_command("share"), Command::Share));
    assert!(matches!(parse_command("blorp"), Command::Unknown));
}

#[test]
fn test_token_round_trip() {
    use de::share::{decode_token, encode_token};
    let slugs = vec!["alpha-cafe".to_string(), "beta-hub".to_string()];
    assert_eq!(decode_token(&encode_token(&slugs)), slugs);
    assert_eq!(encode_token(&[]), "");
    assert_eq!(decode_token("9garbage"), Vec::<String>::new());
}

#[test]
fn test_catalog_filter_and_sort() {
    let catalog = Catalog::new(vec![
        space("Beta Hub", NoiseLevel::Loud, WifiSpeed::Fast),
        space("Alpha Cafe", NoiseLevel::Quiet, WifiSpeed::Slow),
    ]);
    let filter = FilterState {
        noise_level: Some(NoiseLevel::Quiet),
        ..FilterState::default()
    };
    let view = catalog.view(&filter, SortState::default());
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Alpha Cafe");

    let sorted = catalog.view(
        &FilterState::default(),
        SortState {
            field: SortField::Wifi,
            direction: SortDirection::Desc,
        },
    );
    assert_eq!(sorted[0].name, "Beta Hub");
}

#[test]
fn test_store_end_to_end_merge_from_share_link() {
    // Storage starts empty; a share link carries one visited space.
    let dir = tempdir().unwrap();
    let storage = dir.path().join("visited.json");
    let base = Url::parse("https://example.com/spaces").unwrap();

    let token = de::share::encode_token(&["foo-bar".to_string()]);
    let link = format!("https://example.com/spaces?v={token}");
    let store = VisitedStore::initialize(storage.clone(), base.clone(), Some(&link));

    assert!(store.is_visited("Foo Bar"));
    assert_eq!(store.count(), 1);

    // The merged state must already be durable.
    let raw = std::fs::read_to_string(&storage).unwrap();
    let persisted: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, vec!["foo-bar".to_string()]);

    // And the share link regenerates from the merged set.
    let reopened = VisitedStore::initialize(storage, base, None);
    let url = reopened.shareable_url();
    assert!(url.contains("?v=1"));
    assert_eq!(de::share::extract_token(&url).map(|t| de::share::decode_token(&t)), Some(vec!["foo-bar".to_string()]));
}

#[test]
fn test_store_empty_share_url_has_no_parameter() {
    let dir = tempdir().unwrap();
    let base = Url::parse("https://example.com/spaces").unwrap();
    let store = VisitedStore::initialize(dir.path().join("visited.json"), base, None);
    assert_eq!(store.shareable_url(), "https://example.com/spaces");
}

#[test]
fn test_bundled_catalog_parses_and_validates() {
    let catalog = de::loader::load_catalog_from(std::path::Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/spaces.json"
    )))
    .unwrap();
    assert!(!catalog.is_empty());
    assert!(deskhop_data::validate_spaces(&catalog.spaces).is_empty());

    // Every bundled space must be trackable and uniquely keyed.
    let slugs: std::collections::HashSet<String> =
        catalog.spaces.iter().map(|s| de::slugify(&s.name)).collect();
    assert!(!slugs.contains(""));
    assert_eq!(slugs.len(), catalog.len());
}

#[test]
fn test_issue_urls() {
    let suggest = de::issue_url::new_space_url("deskhop/deskhop");
    assert!(suggest.contains("suggest-space.yml"));

    let update = de::issue_url::update_space_url(
        "deskhop/deskhop",
        &space("Alpha Cafe", NoiseLevel::Quiet, WifiSpeed::Slow),
    );
    assert!(update.contains("update-space.yml"));
    assert!(update.contains("name=Alpha+Cafe"));
}
