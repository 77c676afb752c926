//! Schema registry for looking up parsed schema elements.
//!
//! This module provides the SchemaRegistry which indexes the elements of one
//! or more [`SchemaEntry`] values by OID and by short name, and resolves
//! object class and attribute type inheritance.

use super::entry::SchemaEntry;
use super::types::{
    AttributeType, LdapSyntax, MatchingRule, MatchingRuleUse, ObjectClass, SchemaElement,
};
use std::collections::{HashMap, HashSet};

/// Elements of one kind with lookup by OID and lower-cased name.
#[derive(Debug, Clone)]
struct Index<T> {
    items: Vec<T>,
    keys: HashMap<String, usize>,
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            keys: HashMap::new(),
        }
    }
}

impl<T> Index<T> {
    /// Later definitions of the same OID or name replace earlier ones.
    fn insert(&mut self, item: T, oid: &str, names: &[String]) {
        let idx = self.items.len();
        self.items.push(item);
        self.keys.insert(oid.to_string(), idx);
        for name in names {
            self.keys.insert(name.to_ascii_lowercase(), idx);
        }
    }

    fn get(&self, name_or_oid: &str) -> Option<&T> {
        self.keys
            .get(name_or_oid)
            .or_else(|| self.keys.get(&name_or_oid.to_ascii_lowercase()))
            .map(|&idx| &self.items[idx])
    }
}

/// Lookup index over a directory's parsed schema.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::directory::SearchEntry;
/// use ldap_schema::schema::{ParseOptions, SchemaEntry, SchemaRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let raw = SearchEntry::new("cn=Subschema")
///     .with_attribute("objectClasses", vec![
///         "( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )".to_string(),
///         "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) )".to_string(),
///     ]);
/// let entry = SchemaEntry::parse(&raw, ParseOptions::default())?;
/// let registry = SchemaRegistry::from_entry(&entry);
///
/// let (must, _may) = registry.object_class_attributes("person").unwrap();
/// assert_eq!(must, vec!["sn", "cn", "objectClass"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    syntaxes: Index<LdapSyntax>,
    matching_rules: Index<MatchingRule>,
    matching_rule_uses: Index<MatchingRuleUse>,
    attribute_types: Index<AttributeType>,
    object_classes: Index<ObjectClass>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the parsed elements of one subschema entry.
    pub fn from_entry(entry: &SchemaEntry) -> Self {
        Self::from_entries(std::slice::from_ref(entry))
    }

    /// Index the parsed elements of several subschema entries.
    pub fn from_entries(entries: &[SchemaEntry]) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            for attr in &entry.attributes {
                for element in attr.values.as_parsed().unwrap_or(&[]) {
                    registry.add_element(element.clone());
                }
            }
        }
        registry
    }

    /// Add a single element to the registry.
    pub fn add_element(&mut self, element: SchemaElement) {
        match element {
            SchemaElement::Syntax(e) => {
                let oid = e.oid.to_string();
                self.syntaxes.insert(e, &oid, &[]);
            }
            SchemaElement::MatchingRule(e) => {
                let (oid, names) = (e.oid.to_string(), e.names.clone());
                self.matching_rules.insert(e, &oid, &names);
            }
            SchemaElement::MatchingRuleUse(e) => {
                let (oid, names) = (e.oid.to_string(), e.names.clone());
                self.matching_rule_uses.insert(e, &oid, &names);
            }
            SchemaElement::AttributeType(e) => {
                let (oid, names) = (e.oid.to_string(), e.names.clone());
                self.attribute_types.insert(e, &oid, &names);
            }
            SchemaElement::ObjectClass(e) => {
                let (oid, names) = (e.oid.to_string(), e.names.clone());
                self.object_classes.insert(e, &oid, &names);
            }
        }
    }

    pub fn syntax(&self, oid: &str) -> Option<&LdapSyntax> {
        self.syntaxes.get(oid)
    }

    pub fn matching_rule(&self, name_or_oid: &str) -> Option<&MatchingRule> {
        self.matching_rules.get(name_or_oid)
    }

    pub fn matching_rule_use(&self, name_or_oid: &str) -> Option<&MatchingRuleUse> {
        self.matching_rule_uses.get(name_or_oid)
    }

    pub fn attribute_type(&self, name_or_oid: &str) -> Option<&AttributeType> {
        self.attribute_types.get(name_or_oid)
    }

    pub fn object_class(&self, name_or_oid: &str) -> Option<&ObjectClass> {
        self.object_classes.get(name_or_oid)
    }

    pub fn syntax_count(&self) -> usize {
        self.syntaxes.items.len()
    }

    pub fn matching_rule_count(&self) -> usize {
        self.matching_rules.items.len()
    }

    pub fn matching_rule_use_count(&self) -> usize {
        self.matching_rule_uses.items.len()
    }

    pub fn attribute_type_count(&self) -> usize {
        self.attribute_types.items.len()
    }

    pub fn object_class_count(&self) -> usize {
        self.object_classes.items.len()
    }

    /// All attribute types in insertion order.
    pub fn attribute_types(&self) -> &[AttributeType] {
        &self.attribute_types.items
    }

    /// All object classes in insertion order.
    pub fn object_classes(&self) -> &[ObjectClass] {
        &self.object_classes.items
    }

    /// Effective MUST and MAY attributes of an object class.
    ///
    /// Walks the superior chain depth-first, own attributes first. Names are
    /// deduplicated case-insensitively; an attribute that is mandatory
    /// anywhere in the chain is not also reported as optional. Unknown
    /// superiors are skipped and cycles are broken.
    pub fn object_class_attributes(&self, name_or_oid: &str) -> Option<(Vec<String>, Vec<String>)> {
        let root = self.object_class(name_or_oid)?;

        let mut must = Vec::new();
        let mut may = Vec::new();
        let mut visited = HashSet::new();
        let mut stack = vec![root];

        while let Some(oc) = stack.pop() {
            if !visited.insert(oc.oid.as_str()) {
                continue;
            }
            must.extend(oc.must.iter().cloned());
            may.extend(oc.may.iter().cloned());
            for sup in oc.superiors.iter().rev() {
                if let Some(parent) = self.object_class(sup) {
                    stack.push(parent);
                }
            }
        }

        let must = dedup_ignore_case(must, &HashSet::new());
        let required: HashSet<String> = must.iter().map(|a| a.to_ascii_lowercase()).collect();
        let may = dedup_ignore_case(may, &required);
        Some((must, may))
    }

    /// The attribute type followed by its superiors, nearest first.
    pub fn attribute_superior_chain(&self, name_or_oid: &str) -> Vec<&AttributeType> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.attribute_type(name_or_oid);

        while let Some(at) = current {
            if !visited.insert(at.oid.as_str()) {
                break;
            }
            chain.push(at);
            current = at
                .superior
                .as_deref()
                .and_then(|sup| self.attribute_type(sup));
        }

        chain
    }
}

fn dedup_ignore_case(names: Vec<String>, exclude: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| {
            let key = name.to_ascii_lowercase();
            !exclude.contains(&key) && seen.insert(key)
        })
        .collect()
}
