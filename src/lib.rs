//! LDAP schema discovery and modify-request construction for Rust.
//!
//! Parses the RFC 4512 schema definitions a directory publishes in its
//! subschema subentry, and builds validated RFC 4511 modify requests. The
//! network side is abstracted behind a pluggable directory client.
//!
//! # Core Components
//!
//! - [`schema`] - Definition parsing, [`SchemaEntry`] and [`SchemaRegistry`]
//! - [`ModificationRequest`] - Ordered, validated modify changes
//! - [`DirectoryClient`] - Trait for the search/modify collaborator
//! - [`DirectoryService`] - Facade combining the above
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::{DirectoryService, InMemoryDirectory, SUBSCHEMA_DN};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = InMemoryDirectory::with_subschema(
//!     SUBSCHEMA_DN,
//!     vec![(
//!         "objectClasses".to_string(),
//!         vec!["( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) )".to_string()],
//!     )],
//! );
//! let service = DirectoryService::new(directory);
//!
//! let schema = service.get_schema().await?;
//! let person = schema[0].object_classes().next().unwrap();
//! assert_eq!(person.must, vec!["sn", "cn"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod modification;
pub mod schema;
pub mod service;

// Re-export commonly used types for convenience
pub use config::DirectoryConfig;
pub use directory::{
    ALL_OPERATIONAL_ATTRIBUTES, DirectoryClient, InMemoryDirectory, SUBSCHEMA_DN, SearchEntry,
    SearchScope,
};
pub use error::{
    BuildError, LdapError, LdapResult, ParseError, ParseErrorKind, ParseResult, ValidationError,
    ValidationResult,
};
pub use modification::{ModificationEntry, ModificationMode, ModificationRequest};
pub use schema::{
    AttributeType, ObjectClass, ParseOptions, SchemaElement, SchemaElementKind, SchemaEntry,
    SchemaRegistry, parse_search_entry,
};
pub use service::DirectoryService;
