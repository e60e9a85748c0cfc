//! Visited-progress store.
//!
//! Holds the set of slugs the user has checked off, persists it across
//! sessions, and merges progress carried in share-link tokens. Every
//! operation takes a space's display name and normalizes it internally;
//! callers never handle slugs directly.

use std::collections::HashSet;
use std::path::PathBuf;

use log::{info, warn};
use url::Url;

use crate::share;
use crate::slug::slugify;
use crate::storage;

/// Tracks which spaces the user has visited.
///
/// Construct with [`VisitedStore::initialize`], which runs the fixed startup
/// sequence: durable read, union of an optional share token, then an
/// immediate write-back when the token contributed anything. Mutators
/// persist synchronously and swallow storage failures with a warning, so no
/// error from this store ever reaches the presentation layer.
#[derive(Debug)]
pub struct VisitedStore {
    visited: HashSet<String>,
    storage_path: PathBuf,
    base_url: Url,
}

impl VisitedStore {
    /// Build the store from durable storage plus an optional share link or
    /// bare token passed at startup. The token is consumed exactly once: its
    /// slugs are unioned in and, if anything new arrived, the merged set is
    /// written straight back so it survives storage-only loads.
    pub fn initialize(storage_path: PathBuf, base_url: Url, shared: Option<&str>) -> Self {
        let stored = match storage::read_visited(&storage_path) {
            Ok(slugs) => slugs,
            Err(err) => {
                warn!("failed to load visited spaces, starting empty: {err:#}");
                Vec::new()
            },
        };
        let mut store = Self {
            visited: stored.into_iter().filter(|slug| !slug.is_empty()).collect(),
            storage_path,
            base_url,
        };

        if let Some(input) = shared {
            let merged = store.union_shared(input);
            if merged > 0 {
                store.persist();
                info!("merged {merged} shared spaces into visited set ({} total)", store.count());
            }
        }
        store
    }

    /// Current number of visited spaces.
    pub fn count(&self) -> usize {
        self.visited.len()
    }

    /// Whether `name` has been visited. Names that normalize to the same
    /// slug are the same space.
    pub fn is_visited(&self, name: &str) -> bool {
        let slug = slugify(name);
        !slug.is_empty() && self.visited.contains(&slug)
    }

    /// Flip membership for a space and return the new state (`true` if the
    /// space is now visited). A name with no trackable slug stays unvisited.
    pub fn toggle_visited(&mut self, name: &str) -> bool {
        let slug = slugify(name);
        if slug.is_empty() {
            return false;
        }
        let now_visited = if self.visited.remove(&slug) {
            false
        } else {
            self.visited.insert(slug);
            true
        };
        self.persist();
        now_visited
    }

    /// Idempotent add; already-visited spaces trigger no storage write.
    pub fn mark_visited(&mut self, name: &str) {
        let slug = slugify(name);
        if slug.is_empty() || self.visited.contains(&slug) {
            return;
        }
        self.visited.insert(slug);
        self.persist();
    }

    /// Idempotent remove; unvisited spaces trigger no storage write.
    pub fn mark_unvisited(&mut self, name: &str) {
        let slug = slugify(name);
        if slug.is_empty() || !self.visited.remove(&slug) {
            return;
        }
        self.persist();
    }

    /// Snapshot of all visited slugs, sorted so output and storage are
    /// stable. The caller can hold the copy without seeing later mutations.
    pub fn visited_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self.visited.iter().cloned().collect();
        slugs.sort();
        slugs
    }

    /// The directory URL with current progress encoded in its query string.
    /// With nothing visited this is the plain directory URL, no token.
    pub fn shareable_url(&self) -> String {
        let token = share::encode_token(&self.visited_slugs());
        share::share_url(&self.base_url, &token).to_string()
    }

    /// Union progress from a pasted share link or bare token. Returns how
    /// many spaces the import added; `0` covers malformed input too.
    pub fn import_shared(&mut self, input: &str) -> usize {
        let added = self.union_shared(input);
        if added > 0 {
            self.persist();
        }
        added
    }

    fn union_shared(&mut self, input: &str) -> usize {
        let Some(token) = share::extract_token(input) else {
            return 0;
        };
        share::decode_token(&token)
            .into_iter()
            .filter(|slug| !slug.is_empty() && self.visited.insert(slug.clone()))
            .count()
    }

    fn persist(&self) {
        if let Err(err) = storage::write_visited(&self.storage_path, &self.visited_slugs()) {
            warn!("failed to save visited spaces: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::encode_token;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn store_in(dir: &TempDir, shared: Option<&str>) -> VisitedStore {
        let base = Url::parse("https://example.com/spaces").unwrap();
        VisitedStore::initialize(dir.path().join("visited.json"), base, shared)
    }

    #[test]
    fn toggle_flips_and_restores_membership() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir, None);
        assert!(store.toggle_visited("Foo Bar"));
        assert!(store.is_visited("foo-bar"));
        assert!(!store.toggle_visited("FOO   BAR"));
        assert!(!store.is_visited("Foo Bar"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn mark_operations_are_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir, None);
        store.mark_visited("Alpha Cafe");
        store.mark_visited("Alpha Cafe");
        assert_eq!(store.count(), 1);
        store.mark_unvisited("alpha cafe");
        store.mark_unvisited("alpha cafe");
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn names_with_equal_slugs_are_one_space() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir, None);
        store.mark_visited("The  Hub!");
        assert!(store.is_visited("the hub"));
        assert!(store.is_visited("THE-HUB"));
    }

    #[test]
    fn untrackable_names_are_ignored() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir, None);
        assert!(!store.toggle_visited("!!!"));
        store.mark_visited("   ");
        assert_eq!(store.count(), 0);
        assert!(!store.is_visited(""));
    }

    #[test]
    fn mutations_persist_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut store = store_in(&dir, None);
            store.mark_visited("Alpha Cafe");
            store.mark_visited("Beta Hub");
        }
        let store = store_in(&dir, None);
        assert_eq!(store.count(), 2);
        assert!(store.is_visited("Alpha Cafe"));
    }

    #[test]
    fn startup_merges_shared_token_and_persists_it() {
        let dir = tempdir().unwrap();
        let token = encode_token(&["foo-bar".to_string()]);
        let link = format!("https://example.com/spaces?v={token}");

        let store = store_in(&dir, Some(&link));
        assert!(store.is_visited("Foo Bar"));

        // The contribution must survive a storage-only reload.
        let reloaded = store_in(&dir, None);
        assert!(reloaded.is_visited("Foo Bar"));
    }

    #[test]
    fn malformed_shared_input_contributes_nothing() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir, Some("9garbage"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn corrupt_storage_falls_back_to_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("visited.json"), "{ definitely not an array").unwrap();
        let store = store_in(&dir, None);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn import_is_commutative_and_idempotent() {
        let token_a = encode_token(&["alpha".to_string(), "beta".to_string()]);
        let token_b = encode_token(&["beta".to_string(), "gamma".to_string()]);

        let dir_ab = tempdir().unwrap();
        let mut ab = store_in(&dir_ab, None);
        ab.import_shared(&token_a);
        ab.import_shared(&token_b);

        let dir_ba = tempdir().unwrap();
        let mut ba = store_in(&dir_ba, None);
        ba.import_shared(&token_b);
        ba.import_shared(&token_a);
        assert_eq!(ba.import_shared(&token_a), 0);

        assert_eq!(ab.visited_slugs(), ba.visited_slugs());
        assert_eq!(ab.count(), 3);
    }

    #[test]
    fn shareable_url_omits_token_when_nothing_visited() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir, None);
        assert_eq!(store.shareable_url(), "https://example.com/spaces");

        store.mark_visited("Alpha Cafe");
        let url = store.shareable_url();
        assert!(url.starts_with("https://example.com/spaces?v=1"));
    }
}
