//! Directory service facade.
//!
//! [`DirectoryService`] ties the pure components to a [`DirectoryClient`]:
//! it reads and parses the subschema subentry, and validates modification
//! requests before handing them to the client.
//!
//! # Example Usage
//!
//! ```rust
//! use ldap_schema::directory::{InMemoryDirectory, SearchEntry};
//! use ldap_schema::service::DirectoryService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = InMemoryDirectory::with_subschema(
//!     "cn=Subschema",
//!     vec![(
//!         "attributeTypes".to_string(),
//!         vec!["( 2.5.4.3 NAME 'cn' SUP name )".to_string()],
//!     )],
//! );
//! directory
//!     .insert_entry(SearchEntry::new("uid=alice,dc=example,dc=com"))
//!     .await;
//!
//! let service = DirectoryService::new(directory);
//! let registry = service.get_registry().await?;
//! assert!(registry.attribute_type("cn").is_some());
//!
//! service
//!     .apply("uid=alice,dc=example,dc=com", "add", [("cn", vec!["Alice"])])
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::config::DirectoryConfig;
use crate::directory::{DirectoryClient, SearchScope};
use crate::error::{LdapError, LdapResult};
use crate::modification::{IntoModificationMode, ModificationRequest};
use crate::schema::{SchemaEntry, SchemaRegistry, parse_search_entry};
use log::{debug, info, warn};

/// Schema discovery and modification on top of a directory client.
#[derive(Debug, Clone)]
pub struct DirectoryService<C: DirectoryClient> {
    client: C,
    config: DirectoryConfig,
}

impl<C: DirectoryClient> DirectoryService<C> {
    /// Create a service with the default configuration.
    pub fn new(client: C) -> Self {
        Self {
            client,
            config: DirectoryConfig::default(),
        }
    }

    /// Create a service with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LdapError::Config`] if the configuration is invalid.
    pub fn with_config(client: C, config: DirectoryConfig) -> LdapResult<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Read and parse the subschema subentry.
    ///
    /// Every entry returned by the base-scope search is parsed. A single
    /// malformed definition fails the whole call.
    pub async fn get_schema(&self) -> LdapResult<Vec<SchemaEntry>> {
        let dn = self.config.subschema_dn.as_str();
        debug!(
            "Reading schema from '{}' (attributes: {:?})",
            dn, self.config.schema_attributes
        );

        let raw = self
            .client
            .search(dn, SearchScope::BaseObject, &self.config.schema_attributes)
            .await
            .map_err(|e| {
                warn!("Schema search of '{}' failed: {}", dn, e);
                LdapError::directory("search", dn, e)
            })?;

        let entries = raw
            .iter()
            .map(|entry| parse_search_entry(entry, self.config.parse))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!("Schema of '{}' could not be parsed: {}", dn, e))?;

        for entry in &entries {
            info!(
                "Parsed schema entry '{}': {} attribute types, {} object classes",
                entry.dn,
                entry.attribute_types().count(),
                entry.object_classes().count()
            );
        }
        Ok(entries)
    }

    /// Read the schema and index it.
    ///
    /// # Errors
    ///
    /// Returns [`LdapError::SchemaNotFound`] if the search returned no entry.
    pub async fn get_registry(&self) -> LdapResult<SchemaRegistry> {
        let entries = self.get_schema().await?;
        if entries.is_empty() {
            return Err(LdapError::schema_not_found(&self.config.subschema_dn));
        }
        Ok(SchemaRegistry::from_entries(&entries))
    }

    /// Send a modification request for the entry `dn`.
    ///
    /// Empty requests are forwarded as-is; the server decides what they mean.
    pub async fn modify(&self, dn: &str, request: &ModificationRequest) -> LdapResult<()> {
        debug!("Modifying '{}' with {} changes", dn, request.len());

        self.client.modify(dn, request).await.map_err(|e| {
            warn!("Modify of '{}' failed: {}", dn, e);
            LdapError::directory("modify", dn, e)
        })?;

        info!("Modified '{}'", dn);
        Ok(())
    }

    /// Build a request from `attributes` and send it.
    ///
    /// Validation happens first; the client is not called if the request
    /// cannot be built.
    pub async fn apply<M, I, K, V, S>(&self, dn: &str, mode: M, attributes: I) -> LdapResult<()>
    where
        M: IntoModificationMode,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = ModificationRequest::build(mode, attributes)?;
        self.modify(dn, &request).await
    }
}
