//! Loading of the space catalog and site settings.
//!
//! The catalog is the authority on what exists; loading validates it and
//! logs findings as warnings rather than refusing to start. Site settings
//! are TOML-backed and fall back to compiled defaults.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use deskhop_data::{SpaceDef, validate_spaces};
use log::{info, warn};
use serde::Deserialize;
use url::Url;

use crate::catalog::Catalog;
use crate::data_paths::data_path;
use crate::slug::slugify;

/// Site-level settings for share and contribution links.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_github_repo")]
    pub github_repo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            github_repo: default_github_repo(),
        }
    }
}

impl SiteConfig {
    /// Parsed base URL that share links are built on.
    ///
    /// # Errors
    /// Returns an error if the configured `base_url` is not a valid URL.
    pub fn share_base(&self) -> Result<Url> {
        Url::parse(&self.base_url).with_context(|| format!("invalid base_url '{}'", self.base_url))
    }
}

fn default_base_url() -> String {
    "https://deskhop.github.io/spaces".to_string()
}

fn default_github_repo() -> String {
    "deskhop/deskhop".to_string()
}

/// Load the bundled space catalog.
///
/// # Errors
/// Errors bubble up from file IO or deserialization; validation findings are
/// only warnings.
pub fn load_catalog() -> Result<Catalog> {
    load_catalog_from(&data_path("spaces.json"))
}

/// Load a space catalog from an explicit file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog_from(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let spaces: Vec<SpaceDef> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    info!("{} spaces loaded into catalog", spaces.len());

    for finding in validate_spaces(&spaces) {
        warn!("space data: {finding}");
    }
    warn_slug_collisions(&spaces);

    Ok(Catalog::new(spaces))
}

/// Visited marks key off the slug derived from the name, so two names
/// reducing to one slug would share a single mark. Flagged here so the data
/// gets fixed; the tracker itself keeps the simple keying.
fn warn_slug_collisions(spaces: &[SpaceDef]) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for space in spaces {
        let slug = slugify(&space.name);
        if slug.is_empty() {
            warn!("space '{}' has no trackable identifier", space.name);
            continue;
        }
        if let Some(existing) = seen.insert(slug.clone(), &space.name)
            && existing != space.name
        {
            warn!("spaces '{existing}' and '{}' share the slug '{slug}'", space.name);
        }
    }
}

/// Load site settings from the bundled `site.toml`, falling back to compiled
/// defaults when the file is missing or malformed.
pub fn load_site_config() -> SiteConfig {
    load_site_config_from(&data_path("site.toml"))
}

fn load_site_config_from(path: &Path) -> SiteConfig {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("using default site settings, cannot read {}: {err}", path.display());
            return SiteConfig::default();
        },
    };
    match toml::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("using default site settings, cannot parse {}: {err}", path.display());
            SiteConfig::default()
        },
    }
}
