//! Configuration for [`DirectoryService`](crate::service::DirectoryService).
//!
//! The defaults match what most servers publish: the subschema subentry at
//! `cn=Subschema`, read with the `+` selector, parsed strictly.

use crate::directory::{ALL_OPERATIONAL_ATTRIBUTES, SUBSCHEMA_DN};
use crate::error::{BuildError, BuildResult, LdapResult};
use crate::schema::ParseOptions;
use serde::{Deserialize, Serialize};

/// Where to find the schema and how to parse it.
///
/// Every field is optional when deserializing; missing fields take their
/// default.
///
/// ```rust
/// use ldap_schema::config::DirectoryConfig;
///
/// let config = DirectoryConfig::from_json_str(
///     r#"{ "subschemaDn": "cn=schema", "parse": { "allowQuotedOids": true } }"#,
/// ).unwrap();
/// assert_eq!(config.subschema_dn, "cn=schema");
/// assert_eq!(config.schema_attributes, vec!["+"]);
/// assert!(config.parse.allow_quoted_oids);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectoryConfig {
    /// DN of the subschema subentry. 389 Directory Server and OpenLDAP
    /// use `cn=Subschema`; Active Directory publishes the schema under
    /// `CN=Aggregate,CN=Schema,CN=Configuration,...`.
    pub subschema_dn: String,

    /// Attributes requested from the subschema subentry.
    pub schema_attributes: Vec<String>,

    /// Parser leniency.
    pub parse: ParseOptions,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            subschema_dn: SUBSCHEMA_DN.to_string(),
            schema_attributes: vec![ALL_OPERATIONAL_ATTRIBUTES.to_string()],
            parse: ParseOptions::default(),
        }
    }
}

impl DirectoryConfig {
    /// Load and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> LdapResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(BuildError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidConfiguration`] if the subschema DN is
    /// blank or no attribute is requested.
    pub fn validate(&self) -> BuildResult<()> {
        if self.subschema_dn.trim().is_empty() {
            return Err(BuildError::invalid_configuration(
                "subschema DN cannot be empty",
            ));
        }
        if self.schema_attributes.is_empty() {
            return Err(BuildError::invalid_configuration(
                "at least one schema attribute must be requested",
            ));
        }
        if self.schema_attributes.iter().any(|a| a.trim().is_empty()) {
            return Err(BuildError::invalid_configuration(
                "schema attribute names cannot be blank",
            ));
        }
        Ok(())
    }

    pub fn with_subschema_dn(mut self, dn: impl Into<String>) -> Self {
        self.subschema_dn = dn.into();
        self
    }

    pub fn with_schema_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }
}
