//! In-memory directory client.
//!
//! This module provides a thread-safe in-memory implementation of the
//! [`DirectoryClient`] trait. It holds entries in a map guarded by an async
//! RwLock and applies modify requests with RFC 4511 semantics. It is meant
//! for tests and development where no directory server is available.
//!
//! # Features
//!
//! * Base, one-level and subtree search scopes
//! * `*` / `+` attribute selectors and case-insensitive attribute filters
//! * Atomic modify: a failing change leaves the entry untouched
//!
//! DNs are compared after normalization: RDNs are trimmed and the whole DN
//! is lower-cased. No attribute-value escaping is interpreted.

use super::{
    ALL_OPERATIONAL_ATTRIBUTES, ALL_USER_ATTRIBUTES, DirectoryClient, SearchEntry, SearchScope,
};
use crate::modification::{ModificationEntry, ModificationMode, ModificationRequest};
use log::trace;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Result codes the in-memory directory can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InMemoryDirectoryError {
    #[error("No such object: '{dn}'")]
    NoSuchObject { dn: String },

    #[error("No such attribute '{attribute}' in '{dn}'")]
    NoSuchAttribute { dn: String, attribute: String },

    #[error("Attribute '{attribute}' already has value '{value}' in '{dn}'")]
    AttributeOrValueExists {
        dn: String,
        attribute: String,
        value: String,
    },
}

/// Thread-safe in-memory directory.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    // normalized DN -> entry
    entries: Arc<RwLock<BTreeMap<String, SearchEntry>>>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding only a subschema subentry.
    pub fn with_subschema(dn: impl Into<String>, attributes: Vec<(String, Vec<String>)>) -> Self {
        let entry = SearchEntry {
            dn: dn.into(),
            attributes,
        };
        let mut entries = BTreeMap::new();
        entries.insert(normalize_dn(&entry.dn), entry);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Store an entry, replacing any entry with the same DN.
    pub async fn insert_entry(&self, entry: SearchEntry) {
        let key = normalize_dn(&entry.dn);
        trace!("Inserting entry '{}'", entry.dn);
        self.entries.write().await.insert(key, entry);
    }

    pub async fn get_entry(&self, dn: &str) -> Option<SearchEntry> {
        self.entries.read().await.get(&normalize_dn(dn)).cloned()
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Remove every entry (useful for testing).
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl DirectoryClient for InMemoryDirectory {
    type Error = InMemoryDirectoryError;

    async fn search(
        &self,
        base: &str,
        scope: SearchScope,
        attributes: &[String],
    ) -> Result<Vec<SearchEntry>, Self::Error> {
        let base_key = normalize_dn(base);
        let guard = self.entries.read().await;

        if !base_key.is_empty() && !guard.contains_key(&base_key) {
            return Err(InMemoryDirectoryError::NoSuchObject {
                dn: base.to_string(),
            });
        }

        let found: Vec<SearchEntry> = guard
            .iter()
            .filter(|(key, _)| in_scope(key, &base_key, scope))
            .map(|(_, entry)| select_attributes(entry, attributes))
            .collect();

        trace!(
            "Search of '{}' ({:?}) matched {} entries",
            base,
            scope,
            found.len()
        );
        Ok(found)
    }

    async fn modify(&self, dn: &str, request: &ModificationRequest) -> Result<(), Self::Error> {
        let mut guard = self.entries.write().await;
        let entry = guard
            .get_mut(&normalize_dn(dn))
            .ok_or_else(|| InMemoryDirectoryError::NoSuchObject { dn: dn.to_string() })?;

        // Work on a copy so a failing change leaves the stored entry intact
        let mut updated = entry.attributes.clone();
        for change in request {
            trace!(
                "Applying {} of '{}' to '{}'",
                change.mode(),
                change.attribute(),
                dn
            );
            apply_change(&mut updated, change, dn)?;
        }

        entry.attributes = updated;
        Ok(())
    }
}

fn apply_change(
    attributes: &mut Vec<(String, Vec<String>)>,
    change: &ModificationEntry,
    dn: &str,
) -> Result<(), InMemoryDirectoryError> {
    let name = change.attribute();
    let position = attributes
        .iter()
        .position(|(attr, _)| attr.eq_ignore_ascii_case(name));
    let no_such_attribute = || InMemoryDirectoryError::NoSuchAttribute {
        dn: dn.to_string(),
        attribute: name.to_string(),
    };

    match change.mode() {
        ModificationMode::Add => {
            let idx = match position {
                Some(idx) => idx,
                None => {
                    attributes.push((name.to_string(), Vec::new()));
                    attributes.len() - 1
                }
            };
            let values = &mut attributes[idx].1;
            for value in change.values() {
                if values.contains(value) {
                    return Err(InMemoryDirectoryError::AttributeOrValueExists {
                        dn: dn.to_string(),
                        attribute: name.to_string(),
                        value: value.clone(),
                    });
                }
                values.push(value.clone());
            }
        }
        ModificationMode::Delete if change.is_whole_attribute_delete() => {
            let idx = position.ok_or_else(no_such_attribute)?;
            attributes.remove(idx);
        }
        ModificationMode::Delete => {
            let idx = position.ok_or_else(no_such_attribute)?;
            let values = &mut attributes[idx].1;
            for value in change.values() {
                let found = values
                    .iter()
                    .position(|v| v == value)
                    .ok_or_else(no_such_attribute)?;
                values.remove(found);
            }
            if values.is_empty() {
                attributes.remove(idx);
            }
        }
        ModificationMode::Replace => {
            let values = change.values().to_vec();
            match position {
                Some(idx) => attributes[idx].1 = values,
                None => attributes.push((name.to_string(), values)),
            }
        }
    }

    Ok(())
}

/// Keep only the requested attributes. An empty list, `*` or `+` selects all.
fn select_attributes(entry: &SearchEntry, requested: &[String]) -> SearchEntry {
    let select_all = requested.is_empty()
        || requested
            .iter()
            .any(|a| a == ALL_USER_ATTRIBUTES || a == ALL_OPERATIONAL_ATTRIBUTES);
    if select_all {
        return entry.clone();
    }

    SearchEntry {
        dn: entry.dn.clone(),
        attributes: entry
            .attributes
            .iter()
            .filter(|(name, _)| requested.iter().any(|r| r.eq_ignore_ascii_case(name)))
            .cloned()
            .collect(),
    }
}

fn in_scope(key: &str, base: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::BaseObject => key == base,
        SearchScope::SingleLevel => parent_dn(key) == Some(base),
        SearchScope::WholeSubtree => {
            base.is_empty()
                || key == base
                || key
                    .strip_suffix(base)
                    .is_some_and(|prefix| prefix.ends_with(','))
        }
    }
}

fn parent_dn(key: &str) -> Option<&str> {
    match key.split_once(',') {
        Some((_, parent)) => Some(parent),
        None if key.is_empty() => None,
        None => Some(""),
    }
}

fn normalize_dn(dn: &str) -> String {
    dn.split(',')
        .map(str::trim)
        .filter(|rdn| !rdn.is_empty())
        .collect::<Vec<_>>()
        .join(",")
        .to_ascii_lowercase()
}
