//! Directory client abstraction.
//!
//! This module defines the boundary between this crate and whatever actually
//! talks to a directory server. Connection management, binding and the wire
//! protocol all live behind [`DirectoryClient`]; the crate only needs a
//! search returning raw attribute values and a modify accepting a
//! [`ModificationRequest`].
//!
//! # Example Usage
//!
//! ```rust
//! use ldap_schema::directory::{
//!     ALL_OPERATIONAL_ATTRIBUTES, DirectoryClient, InMemoryDirectory, SUBSCHEMA_DN, SearchScope,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = InMemoryDirectory::with_subschema(
//!     SUBSCHEMA_DN,
//!     vec![(
//!         "objectClasses".to_string(),
//!         vec!["( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )".to_string()],
//!     )],
//! );
//!
//! let entries = directory
//!     .search(
//!         SUBSCHEMA_DN,
//!         SearchScope::BaseObject,
//!         &[ALL_OPERATIONAL_ATTRIBUTES.to_string()],
//!     )
//!     .await?;
//! assert_eq!(entries.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod in_memory;

pub use in_memory::{InMemoryDirectory, InMemoryDirectoryError};

use crate::modification::ModificationRequest;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Conventional DN of the subschema subentry.
pub const SUBSCHEMA_DN: &str = "cn=Subschema";

/// Attribute selector requesting every operational attribute (RFC 3673).
pub const ALL_OPERATIONAL_ATTRIBUTES: &str = "+";

/// Attribute selector requesting every user attribute.
pub const ALL_USER_ATTRIBUTES: &str = "*";

/// Scope of a search relative to its base DN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchScope {
    /// Only the base entry itself
    #[default]
    BaseObject = 0,
    /// Immediate children of the base entry
    SingleLevel = 1,
    /// The base entry and all its descendants
    WholeSubtree = 2,
}

impl TryFrom<u8> for SearchScope {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SearchScope::BaseObject),
            1 => Ok(SearchScope::SingleLevel),
            2 => Ok(SearchScope::WholeSubtree),
            other => Err(other),
        }
    }
}

/// One entry returned by a search.
///
/// Attributes keep the order the server returned them in; every attribute
/// carries its values in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchEntry {
    pub dn: String,
    pub attributes: Vec<(String, Vec<String>)>,
}

impl SearchEntry {
    /// Create an entry with no attributes.
    pub fn new(dn: impl Into<String>) -> Self {
        Self {
            dn: dn.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.attributes.push((name.into(), values));
        self
    }

    /// Values of the attribute called `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }
}

/// Search and modify primitives of a directory server connection.
///
/// Implementations own the connection and the protocol encoding. Errors are
/// returned as-is; callers add context but never retry.
///
/// # Behavior
///
/// - `search` returns every entry in `scope` under `base` with the requested
///   attributes. `+` requests all operational attributes.
/// - `modify` applies the request's entries in order to the entry named by
///   `dn` and succeeds only if the server accepted all of them.
pub trait DirectoryClient: Send + Sync {
    /// The error type returned by directory operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for entries under `base`.
    fn search(
        &self,
        base: &str,
        scope: SearchScope,
        attributes: &[String],
    ) -> impl Future<Output = Result<Vec<SearchEntry>, Self::Error>> + Send;

    /// Apply a modification request to one entry.
    fn modify(
        &self,
        dn: &str,
        request: &ModificationRequest,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
