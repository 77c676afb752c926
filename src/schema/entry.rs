//! Parsed form of a subschema subentry.
//!
//! [`parse_search_entry`] turns the raw search result for the subschema
//! subentry into a [`SchemaEntry`]. The five schema attributes are parsed
//! with their grammar; every other attribute is passed through unchanged.

use super::parser::{ParseOptions, parse_definition};
use super::types::{AttributeType, ObjectClass, SchemaElement, SchemaElementKind};
use crate::directory::SearchEntry;
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};

/// Values of one attribute of the subschema subentry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "values", rename_all = "camelCase")]
pub enum SchemaValues {
    /// One of the five schema attributes, parsed in input order
    Parsed(Vec<SchemaElement>),
    /// Any other attribute, as returned by the server
    Raw(Vec<String>),
}

impl SchemaValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Parsed(elements) => elements.len(),
            Self::Raw(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_parsed(&self) -> Option<&[SchemaElement]> {
        match self {
            Self::Parsed(elements) => Some(elements),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&[String]> {
        match self {
            Self::Raw(values) => Some(values),
            Self::Parsed(_) => None,
        }
    }
}

/// One attribute of a [`SchemaEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaAttribute {
    /// Attribute name exactly as the server returned it
    pub name: String,
    pub values: SchemaValues,
}

/// The subschema subentry with its schema attributes parsed.
///
/// Attributes keep the order the server returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub dn: String,
    pub attributes: Vec<SchemaAttribute>,
}

impl SchemaEntry {
    /// Parse a raw search result entry. See [`parse_search_entry`].
    pub fn parse(entry: &SearchEntry, options: ParseOptions) -> ParseResult<Self> {
        parse_search_entry(entry, options)
    }

    /// Values of the attribute called `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&SchemaValues> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| &attr.values)
    }

    /// Parsed elements published under `kind`'s attribute; empty if absent.
    pub fn elements(&self, kind: SchemaElementKind) -> &[SchemaElement] {
        self.get(kind.attribute_name())
            .and_then(SchemaValues::as_parsed)
            .unwrap_or(&[])
    }

    pub fn attribute_types(&self) -> impl Iterator<Item = &AttributeType> {
        self.elements(SchemaElementKind::AttributeType)
            .iter()
            .filter_map(SchemaElement::as_attribute_type)
    }

    pub fn object_classes(&self) -> impl Iterator<Item = &ObjectClass> {
        self.elements(SchemaElementKind::ObjectClass)
            .iter()
            .filter_map(SchemaElement::as_object_class)
    }

    /// Raw values of a non-schema attribute (e.g. `modifyTimestamp`).
    pub fn raw(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(SchemaValues::as_raw)
    }
}

/// Parse every schema attribute of a subschema search result.
///
/// The grammar for an attribute is chosen once, from its name. The first
/// malformed definition fails the whole entry; no partial result is returned.
pub fn parse_search_entry(entry: &SearchEntry, options: ParseOptions) -> ParseResult<SchemaEntry> {
    let attributes = entry
        .attributes
        .iter()
        .map(|(name, raw)| {
            let values = match SchemaElementKind::from_attribute_name(name) {
                Some(kind) => {
                    let parse = kind.parser();
                    let elements = raw
                        .iter()
                        .map(|definition| {
                            parse(definition, options)
                                .map_err(|reason| reason.in_attribute(name, kind, definition))
                        })
                        .collect::<ParseResult<Vec<_>>>()?;
                    SchemaValues::Parsed(elements)
                }
                None => SchemaValues::Raw(raw.clone()),
            };
            Ok(SchemaAttribute {
                name: name.clone(),
                values,
            })
        })
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(SchemaEntry {
        dn: entry.dn.clone(),
        attributes,
    })
}

/// Parse a list of definitions of one kind, stopping at the first failure.
pub fn parse_definitions<S: AsRef<str>>(
    kind: SchemaElementKind,
    definitions: &[S],
    options: ParseOptions,
) -> ParseResult<Vec<SchemaElement>> {
    definitions
        .iter()
        .map(|definition| {
            parse_definition(kind.attribute_name(), kind, definition.as_ref(), options)
        })
        .collect()
}
