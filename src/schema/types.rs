//! Core schema type definitions for LDAP subschema elements.
//!
//! This module contains the records produced by the parser for each of the
//! five RFC 4512 definition kinds, the enumerations they use, and the
//! [`SchemaElement`] sum type that unifies them.

use super::oid::Oid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five kinds of schema definition a subschema subentry publishes.
///
/// Each kind is published under exactly one attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaElementKind {
    Syntax,
    MatchingRule,
    MatchingRuleUse,
    AttributeType,
    ObjectClass,
}

impl SchemaElementKind {
    /// All kinds, in the order servers usually publish them.
    pub const ALL: [SchemaElementKind; 5] = [
        Self::Syntax,
        Self::MatchingRule,
        Self::MatchingRuleUse,
        Self::AttributeType,
        Self::ObjectClass,
    ];

    /// The subschema attribute this kind is published under.
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::Syntax => "ldapSyntaxes",
            Self::MatchingRule => "matchingRules",
            Self::MatchingRuleUse => "matchingRuleUse",
            Self::AttributeType => "attributeTypes",
            Self::ObjectClass => "objectClasses",
        }
    }

    /// Look up the kind published under `name`.
    ///
    /// Attribute names are case-insensitive in LDAP, so `objectclasses`
    /// resolves the same as `objectClasses`.
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.attribute_name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SchemaElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Syntax => "syntax",
            Self::MatchingRule => "matching rule",
            Self::MatchingRuleUse => "matching rule use",
            Self::AttributeType => "attribute type",
            Self::ObjectClass => "object class",
        };
        f.write_str(label)
    }
}

/// An `X-` extension keyword and its quoted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    /// Keyword, including the `X-` prefix
    pub name: String,
    /// Quoted values in definition order
    pub values: Vec<String>,
}

impl Extension {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// An `ldapSyntaxes` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapSyntax {
    pub oid: Oid,
    pub description: Option<String>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// A `matchingRules` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRule {
    pub oid: Oid,
    #[serde(default)]
    pub names: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    /// Syntax of the assertion value
    pub syntax: Oid,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// A `matchingRuleUse` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRuleUse {
    /// OID of the matching rule this use applies to
    pub oid: Oid,
    #[serde(default)]
    pub names: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    /// Attribute types (names or OIDs) the rule may be applied to
    pub applies: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// Attribute type usage categories (RFC 4512 §4.1.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttributeUsage {
    #[default]
    #[serde(rename = "userApplications")]
    UserApplications,
    #[serde(rename = "directoryOperation")]
    DirectoryOperation,
    #[serde(rename = "distributedOperation")]
    DistributedOperation,
    #[serde(rename = "dSAOperation")]
    DsaOperation,
}

impl AttributeUsage {
    /// The RFC 4512 keyword for this usage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserApplications => "userApplications",
            Self::DirectoryOperation => "directoryOperation",
            Self::DistributedOperation => "distributedOperation",
            Self::DsaOperation => "dSAOperation",
        }
    }

    /// Parse a usage keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [
            Self::UserApplications,
            Self::DirectoryOperation,
            Self::DistributedOperation,
            Self::DsaOperation,
        ]
        .into_iter()
        .find(|usage| usage.as_str().eq_ignore_ascii_case(keyword))
    }

    /// Whether attributes with this usage are operational.
    pub fn is_operational(self) -> bool {
        self != Self::UserApplications
    }
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `attributeTypes` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub oid: Oid,
    #[serde(default)]
    pub names: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    /// Superior attribute type (name or OID)
    pub superior: Option<String>,
    pub equality: Option<String>,
    pub ordering: Option<String>,
    pub substr: Option<String>,
    pub syntax: Option<Oid>,
    /// Suggested maximum length from a `{n}` suffix on `SYNTAX`
    pub syntax_length: Option<u32>,
    #[serde(default)]
    pub single_value: bool,
    #[serde(default)]
    pub collective: bool,
    #[serde(default)]
    pub no_user_modification: bool,
    #[serde(default)]
    pub usage: AttributeUsage,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// Object class kinds (RFC 4512 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectClassKind {
    Abstract,
    #[default]
    Structural,
    Auxiliary,
}

impl ObjectClassKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abstract => "ABSTRACT",
            Self::Structural => "STRUCTURAL",
            Self::Auxiliary => "AUXILIARY",
        }
    }
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `objectClasses` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectClass {
    pub oid: Oid,
    #[serde(default)]
    pub names: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    /// Superior object classes (names or OIDs)
    #[serde(default)]
    pub superiors: Vec<String>,
    #[serde(default)]
    pub kind: ObjectClassKind,
    /// Mandatory attribute types
    #[serde(default)]
    pub must: Vec<String>,
    /// Optional attribute types
    #[serde(default)]
    pub may: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// One parsed schema definition of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "elementType", rename_all = "camelCase")]
pub enum SchemaElement {
    Syntax(LdapSyntax),
    MatchingRule(MatchingRule),
    MatchingRuleUse(MatchingRuleUse),
    AttributeType(AttributeType),
    ObjectClass(ObjectClass),
}

impl SchemaElement {
    pub fn kind(&self) -> SchemaElementKind {
        match self {
            Self::Syntax(_) => SchemaElementKind::Syntax,
            Self::MatchingRule(_) => SchemaElementKind::MatchingRule,
            Self::MatchingRuleUse(_) => SchemaElementKind::MatchingRuleUse,
            Self::AttributeType(_) => SchemaElementKind::AttributeType,
            Self::ObjectClass(_) => SchemaElementKind::ObjectClass,
        }
    }

    pub fn oid(&self) -> &Oid {
        match self {
            Self::Syntax(e) => &e.oid,
            Self::MatchingRule(e) => &e.oid,
            Self::MatchingRuleUse(e) => &e.oid,
            Self::AttributeType(e) => &e.oid,
            Self::ObjectClass(e) => &e.oid,
        }
    }

    /// Short names; always empty for syntaxes.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Syntax(_) => &[],
            Self::MatchingRule(e) => &e.names,
            Self::MatchingRuleUse(e) => &e.names,
            Self::AttributeType(e) => &e.names,
            Self::ObjectClass(e) => &e.names,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Syntax(e) => e.description.as_deref(),
            Self::MatchingRule(e) => e.description.as_deref(),
            Self::MatchingRuleUse(e) => e.description.as_deref(),
            Self::AttributeType(e) => e.description.as_deref(),
            Self::ObjectClass(e) => e.description.as_deref(),
        }
    }

    /// Syntaxes cannot be obsoleted and always report `false`.
    pub fn is_obsolete(&self) -> bool {
        match self {
            Self::Syntax(_) => false,
            Self::MatchingRule(e) => e.obsolete,
            Self::MatchingRuleUse(e) => e.obsolete,
            Self::AttributeType(e) => e.obsolete,
            Self::ObjectClass(e) => e.obsolete,
        }
    }

    pub fn extensions(&self) -> &[Extension] {
        match self {
            Self::Syntax(e) => &e.extensions,
            Self::MatchingRule(e) => &e.extensions,
            Self::MatchingRuleUse(e) => &e.extensions,
            Self::AttributeType(e) => &e.extensions,
            Self::ObjectClass(e) => &e.extensions,
        }
    }

    /// The first short name, falling back to the OID.
    pub fn primary_name(&self) -> &str {
        self.names()
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| self.oid().as_str())
    }

    /// Whether `name_or_oid` names this element (names compare case-insensitively).
    pub fn is_named(&self, name_or_oid: &str) -> bool {
        self.oid().as_str() == name_or_oid
            || self
                .names()
                .iter()
                .any(|name| name.eq_ignore_ascii_case(name_or_oid))
    }

    pub fn as_attribute_type(&self) -> Option<&AttributeType> {
        match self {
            Self::AttributeType(at) => Some(at),
            _ => None,
        }
    }

    pub fn as_object_class(&self) -> Option<&ObjectClass> {
        match self {
            Self::ObjectClass(oc) => Some(oc),
            _ => None,
        }
    }
}

impl From<LdapSyntax> for SchemaElement {
    fn from(value: LdapSyntax) -> Self {
        Self::Syntax(value)
    }
}

impl From<MatchingRule> for SchemaElement {
    fn from(value: MatchingRule) -> Self {
        Self::MatchingRule(value)
    }
}

impl From<MatchingRuleUse> for SchemaElement {
    fn from(value: MatchingRuleUse) -> Self {
        Self::MatchingRuleUse(value)
    }
}

impl From<AttributeType> for SchemaElement {
    fn from(value: AttributeType) -> Self {
        Self::AttributeType(value)
    }
}

impl From<ObjectClass> for SchemaElement {
    fn from(value: ObjectClass) -> Self {
        Self::ObjectClass(value)
    }
}
