//! Schema definitions parsed from a directory's subschema subentry.
//!
//! This module implements the RFC 4512 §4.1 grammars for the five schema
//! attributes (`ldapSyntaxes`, `matchingRules`, `matchingRuleUse`,
//! `attributeTypes`, `objectClasses`) and the lookup registry built on them.
//! Everything here is a pure transformation over in-memory strings.
//!
//! # Key Types
//!
//! - [`SchemaEntry`] - The parsed subschema subentry
//! - [`SchemaElement`] - One parsed definition of any kind
//! - [`SchemaRegistry`] - Lookup by name or OID, inheritance resolution
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::schema::{AttributeType, ObjectClass, ObjectClassKind};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cn: AttributeType = "( 2.5.4.3 NAME 'cn' DESC 'commonName' SUP name )".parse()?;
//! assert_eq!(cn.superior.as_deref(), Some("name"));
//!
//! let person: ObjectClass =
//!     "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) MAY ( description ) )"
//!         .parse()?;
//! assert_eq!(person.kind, ObjectClassKind::Structural);
//! assert_eq!(person.must, vec!["sn", "cn"]);
//! # Ok(())
//! # }
//! ```

pub mod entry;
mod lexer;
pub mod oid;
pub mod parser;
pub mod registry;
mod render;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export the main types for convenience
pub use entry::{SchemaAttribute, SchemaEntry, SchemaValues, parse_definitions, parse_search_entry};
pub use oid::Oid;
pub use parser::{
    ElementParser, ParseOptions, parse_attribute_type, parse_definition, parse_matching_rule,
    parse_matching_rule_use, parse_object_class, parse_syntax,
};
pub use registry::SchemaRegistry;
pub use types::{
    AttributeType, AttributeUsage, Extension, LdapSyntax, MatchingRule, MatchingRuleUse,
    ObjectClass, ObjectClassKind, SchemaElement, SchemaElementKind,
};
