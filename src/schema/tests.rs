//! Tests for schema definition parsing and the schema registry.
//!
//! Definitions are taken from RFC 4512/4519 and from what OpenLDAP and
//! 389 Directory Server publish under `cn=Subschema`.

use super::entry::{SchemaValues, parse_search_entry};
use super::parser::{
    ParseOptions, parse_attribute_type, parse_definition, parse_matching_rule,
    parse_matching_rule_use, parse_object_class, parse_syntax,
};
use super::registry::SchemaRegistry;
use super::types::{AttributeUsage, ObjectClassKind, SchemaElement, SchemaElementKind};
use crate::directory::SearchEntry;
use crate::error::ParseErrorKind;

fn strict() -> ParseOptions {
    ParseOptions::strict()
}

#[test]
fn test_attribute_type_example() {
    let at = parse_attribute_type("( 2.5.4.3 NAME 'cn' DESC 'commonName' SUP name )", strict())
        .expect("Failed to parse cn");

    assert_eq!(at.oid.as_str(), "2.5.4.3");
    assert_eq!(at.names, vec!["cn"]);
    assert_eq!(at.description.as_deref(), Some("commonName"));
    assert_eq!(at.superior.as_deref(), Some("name"));
    assert_eq!(at.usage, AttributeUsage::UserApplications);
    assert!(!at.single_value);
    assert!(at.syntax.is_none());
}

#[test]
fn test_object_class_example() {
    let oc = parse_object_class(
        "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) MAY ( description ) )",
        strict(),
    )
    .expect("Failed to parse person");

    assert_eq!(oc.oid.as_str(), "2.5.6.6");
    assert_eq!(oc.names, vec!["person"]);
    assert_eq!(oc.superiors, vec!["top"]);
    assert_eq!(oc.kind, ObjectClassKind::Structural);
    assert_eq!(oc.must, vec!["sn", "cn"]);
    assert_eq!(oc.may, vec!["description"]);
}

#[test]
fn test_full_attribute_type() {
    let at = parse_attribute_type(
        "( 2.5.18.1 NAME 'createTimestamp' DESC 'RFC4512: time which object was created' \
         EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch \
         SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 SINGLE-VALUE NO-USER-MODIFICATION \
         USAGE directoryOperation )",
        strict(),
    )
    .unwrap();

    assert_eq!(at.equality.as_deref(), Some("generalizedTimeMatch"));
    assert_eq!(at.ordering.as_deref(), Some("generalizedTimeOrderingMatch"));
    assert_eq!(at.substr, None);
    assert_eq!(
        at.syntax.as_ref().map(|s| s.as_str()),
        Some("1.3.6.1.4.1.1466.115.121.1.24")
    );
    assert!(at.single_value);
    assert!(at.no_user_modification);
    assert!(!at.collective);
    assert_eq!(at.usage, AttributeUsage::DirectoryOperation);
    assert!(at.usage.is_operational());
}

#[test]
fn test_syntax_length_suffix() {
    let at = parse_attribute_type(
        "( 2.5.4.41 NAME 'name' EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch \
         SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} )",
        strict(),
    )
    .unwrap();

    assert_eq!(
        at.syntax.unwrap().as_str(),
        "1.3.6.1.4.1.1466.115.121.1.15"
    );
    assert_eq!(at.syntax_length, Some(32768));
    assert_eq!(at.substr.as_deref(), Some("caseIgnoreSubstringsMatch"));
}

#[test]
fn test_invalid_syntax_length() {
    for def in [
        "( 1.2.3 SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{abc} )",
        "( 1.2.3 SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32 )",
    ] {
        let err = parse_attribute_type(def, strict()).unwrap_err();
        assert!(
            matches!(err, ParseErrorKind::InvalidSyntaxLength { .. }),
            "unexpected error for {def}: {err:?}"
        );
    }
}

#[test]
fn test_multiple_names_and_flags() {
    let at = parse_attribute_type(
        "( 0.9.2342.19200300.100.1.25 NAME ( 'dc' 'domainComponent' ) OBSOLETE COLLECTIVE )",
        strict(),
    )
    .unwrap();

    assert_eq!(at.names, vec!["dc", "domainComponent"]);
    assert!(at.obsolete);
    assert!(at.collective);
}

#[test]
fn test_attribute_type_rejects_multiple_superiors() {
    let err = parse_attribute_type("( 1.2.3 SUP ( a $ b ) )", strict()).unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::UnexpectedToken {
            found: "b".to_string()
        }
    );
}

#[test]
fn test_object_class_kinds() {
    let top = parse_object_class("( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )", strict())
        .unwrap();
    assert_eq!(top.kind, ObjectClassKind::Abstract);
    assert_eq!(top.must, vec!["objectClass"]);
    assert!(top.superiors.is_empty());

    let aux = parse_object_class(
        "( 1.3.6.1.1.3.1 NAME 'uidObject' SUP top AUXILIARY MUST uid )",
        strict(),
    )
    .unwrap();
    assert_eq!(aux.kind, ObjectClassKind::Auxiliary);

    let implicit = parse_object_class("( 1.2.3.4 NAME 'thing' )", strict()).unwrap();
    assert_eq!(implicit.kind, ObjectClassKind::Structural);
}

#[test]
fn test_object_class_multiple_superiors() {
    let oc = parse_object_class(
        "( 2.16.840.1.113730.3.2.2 NAME 'inetOrgPerson' SUP ( organizationalPerson $ top ) \
         STRUCTURAL MAY ( audio $ businessCategory $ carLicense ) )",
        strict(),
    )
    .unwrap();
    assert_eq!(oc.superiors, vec!["organizationalPerson", "top"]);
    assert_eq!(oc.may, vec!["audio", "businessCategory", "carLicense"]);
}

#[test]
fn test_syntax_and_matching_rules() {
    let syn = parse_syntax(
        "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
        strict(),
    )
    .unwrap();
    assert_eq!(syn.description.as_deref(), Some("Directory String"));

    let mr = parse_matching_rule(
        "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        strict(),
    )
    .unwrap();
    assert_eq!(mr.names, vec!["caseIgnoreMatch"]);
    assert_eq!(mr.syntax.as_str(), "1.3.6.1.4.1.1466.115.121.1.15");

    let mru = parse_matching_rule_use(
        "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn $ 2.5.4.41 ) )",
        strict(),
    )
    .unwrap();
    assert_eq!(mru.applies, vec!["cn", "sn", "2.5.4.41"]);
}

#[test]
fn test_matching_rule_requires_syntax() {
    let err = parse_matching_rule("( 2.5.13.2 NAME 'caseIgnoreMatch' )", strict()).unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::MissingValue {
            keyword: "SYNTAX".to_string()
        }
    );

    let err = parse_matching_rule_use("( 2.5.13.2 NAME 'caseIgnoreMatch' )", strict()).unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::MissingValue {
            keyword: "APPLIES".to_string()
        }
    );
}

#[test]
fn test_extensions_are_kept() {
    let syn = parse_syntax(
        "( 1.3.6.1.4.1.1466.115.121.1.8 DESC 'Certificate' X-BINARY-TRANSFER-REQUIRED 'TRUE' \
         X-NOT-HUMAN-READABLE 'TRUE' )",
        strict(),
    )
    .unwrap();
    assert_eq!(syn.extensions.len(), 2);
    assert_eq!(syn.extensions[0].name, "X-BINARY-TRANSFER-REQUIRED");
    assert_eq!(syn.extensions[0].values, vec!["TRUE"]);

    let oc = parse_object_class(
        "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) \
         X-ORIGIN ( 'RFC 4519' 'user defined' ) )",
        strict(),
    )
    .unwrap();
    assert_eq!(oc.extensions[0].values, vec!["RFC 4519", "user defined"]);
}

#[test]
fn test_unknown_keywords_are_ignored() {
    let at = parse_attribute_type(
        "( 2.5.4.3 NAME 'cn' FUTURE-FLAG VENDOR-OPT someValue VENDOR-LIST ( a $ b ) \
         VENDOR-TEXT 'x' SUP name )",
        strict(),
    )
    .unwrap();
    assert_eq!(at.names, vec!["cn"]);
    assert_eq!(at.superior.as_deref(), Some("name"));
}

#[test]
fn test_keywords_from_other_kinds_are_ignored() {
    // NAME is not part of the ldapSyntaxes grammar; MUST not part of matching rules
    let syn = parse_syntax("( 1.3.6.1.4.1.1466.115.121.1.15 NAME 'ds' )", strict()).unwrap();
    assert_eq!(syn.description, None);

    let element = parse_definition(
        "matchingRules",
        SchemaElementKind::MatchingRule,
        "( 2.5.13.2 SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 MUST cn )",
        strict(),
    )
    .unwrap();
    assert!(element.names().is_empty());
}

#[test]
fn test_keyword_order_is_not_enforced() {
    let oc = parse_object_class(
        "( 2.5.6.6 MUST ( sn $ cn ) STRUCTURAL SUP top NAME 'person' )",
        strict(),
    )
    .unwrap();
    assert_eq!(oc.names, vec!["person"]);
    assert_eq!(oc.must, vec!["sn", "cn"]);
}

#[test]
fn test_quoted_string_escapes() {
    let at = parse_attribute_type(r"( 1.2.3 NAME 'x' DESC 'O\27Reilly \5c Sons' )", strict())
        .unwrap();
    assert_eq!(at.description.as_deref(), Some(r"O'Reilly \ Sons"));
}

#[test]
fn test_structural_errors() {
    let cases: &[(&str, ParseErrorKind)] = &[
        ("", ParseErrorKind::Empty),
        ("   ", ParseErrorKind::Empty),
        ("2.5.4.3 NAME 'cn'", ParseErrorKind::MissingOpenParen),
        ("( NAME 'cn' )", ParseErrorKind::MissingOid),
        ("( )", ParseErrorKind::MissingOid),
        ("( 2.5.4.3 NAME 'cn'", ParseErrorKind::UnterminatedParen),
        ("( 2.5.4.3 NAME ( 'cn' 'commonName' )", ParseErrorKind::UnterminatedParen),
        ("(", ParseErrorKind::UnterminatedParen),
        ("( 2.5.4.3 NAME 'cn ) ", ParseErrorKind::UnterminatedQuote),
        ("( 2.5.4.3 NAME 'cn' ) )", ParseErrorKind::TrailingData),
        (
            "( cn NAME 'cn' )",
            ParseErrorKind::InvalidOid {
                value: "cn".to_string(),
            },
        ),
        (
            "( 2.5.4.3 DESC )",
            ParseErrorKind::MissingValue {
                keyword: "DESC".to_string(),
            },
        ),
        (
            "( 2.5.4.3 NAME SUP name )",
            ParseErrorKind::MissingValue {
                keyword: "NAME".to_string(),
            },
        ),
        (
            "( 2.5.4.3 USAGE everything )",
            ParseErrorKind::InvalidUsage {
                value: "everything".to_string(),
            },
        ),
        (
            "( 2.5.4.3 SYNTAX caseIgnoreMatch )",
            ParseErrorKind::InvalidOid {
                value: "caseIgnoreMatch".to_string(),
            },
        ),
        (
            "( 2.5.4.3 MUST ( sn cn ) )",
            ParseErrorKind::UnexpectedToken {
                found: "cn".to_string(),
            },
        ),
        (
            "( 2.5.4.3 NAME 'cn' MUST sn cn )",
            ParseErrorKind::UnexpectedToken {
                found: "cn".to_string(),
            },
        ),
        (
            "( 2.5.4.3 NAME 'cn' SUP name garbage )",
            ParseErrorKind::UnexpectedToken {
                found: "garbage".to_string(),
            },
        ),
        (
            "( 2.5.4.3 name 'cn' )",
            ParseErrorKind::UnexpectedToken {
                found: "name".to_string(),
            },
        ),
        (
            "( 2.5.4.3 NAME 'cn' DESC FOO )",
            ParseErrorKind::UnexpectedToken {
                found: "FOO".to_string(),
            },
        ),
    ];

    for (def, expected) in cases {
        let err = parse_attribute_type(def, strict()).unwrap_err();
        assert_eq!(&err, expected, "definition: {def:?}");
    }
}

#[test]
fn test_bare_multi_value_list_is_rejected() {
    let err = parse_object_class(
        "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST sn cn )",
        strict(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::UnexpectedToken {
            found: "cn".to_string()
        }
    );
}

#[test]
fn test_upper_case_descriptors() {
    let oc =
        parse_object_class("( 2.5.6.6 NAME 'x' SUP DUA MUST CN MAY ( SN $ UID ) )", strict())
            .unwrap();
    assert_eq!(oc.superiors, vec!["DUA"]);
    assert_eq!(oc.must, vec!["CN"]);
    assert_eq!(oc.may, vec!["SN", "UID"]);
    assert_eq!(
        oc.to_string(),
        "( 2.5.6.6 NAME 'x' SUP DUA STRUCTURAL MUST CN MAY ( SN $ UID ) )"
    );

    let at = parse_attribute_type(
        "( 2.5.4.3 NAME 'cn' EQUALITY UUID SUBSTR CASE-MATCH )",
        strict(),
    )
    .unwrap();
    assert_eq!(at.equality.as_deref(), Some("UUID"));
    assert_eq!(at.substr.as_deref(), Some("CASE-MATCH"));

    // a recognised keyword still ends the value position
    assert_eq!(
        parse_object_class("( 2.5.6.6 NAME 'x' MUST MAY cn )", strict()).unwrap_err(),
        ParseErrorKind::MissingValue {
            keyword: "MUST".to_string()
        }
    );
}

#[test]
fn test_duplicate_keywords() {
    let def = "( 2.5.4.3 NAME 'cn' DESC 'first' DESC 'second' )";
    assert_eq!(
        parse_attribute_type(def, strict()).unwrap_err(),
        ParseErrorKind::DuplicateKeyword {
            keyword: "DESC".to_string()
        }
    );

    let at = parse_attribute_type(def, ParseOptions::lenient()).unwrap();
    assert_eq!(at.description.as_deref(), Some("second"));

    let err = parse_object_class("( 2.5.6.0 ABSTRACT STRUCTURAL )", strict()).unwrap_err();
    assert_eq!(
        err,
        ParseErrorKind::DuplicateKeyword {
            keyword: "STRUCTURAL".to_string()
        }
    );
}

#[test]
fn test_quoted_oids_option() {
    let def = "( '2.5.6.6' NAME 'person' SUP 'top' MUST ( 'sn' $ 'cn' ) )";
    assert!(parse_object_class(def, strict()).is_err());

    let oc = parse_object_class(def, ParseOptions::lenient()).unwrap();
    assert_eq!(oc.oid.as_str(), "2.5.6.6");
    assert_eq!(oc.superiors, vec!["top"]);
    assert_eq!(oc.must, vec!["sn", "cn"]);

    // Leniency never relaxes the numeric OID requirement
    let err = parse_object_class("( 'person' NAME 'person' )", ParseOptions::lenient());
    assert_eq!(
        err.unwrap_err(),
        ParseErrorKind::InvalidOid {
            value: "person".to_string()
        }
    );
}

#[test]
fn test_parse_definition_attaches_context() {
    let err = parse_definition(
        "attributeTypes",
        SchemaElementKind::AttributeType,
        "( NAME 'cn' )",
        strict(),
    )
    .unwrap_err();

    assert_eq!(err.attribute, "attributeTypes");
    assert_eq!(err.kind, SchemaElementKind::AttributeType);
    assert_eq!(err.definition, "( NAME 'cn' )");
    assert_eq!(err.reason, ParseErrorKind::MissingOid);
}

#[test]
fn test_render_round_trip() {
    let definitions = [
        (
            SchemaElementKind::AttributeType,
            "( 2.5.4.41 NAME 'name' DESC 'RFC4519: common supertype of name attributes' \
             EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch \
             SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} USAGE dSAOperation X-ORIGIN 'RFC 4519' )",
        ),
        (
            SchemaElementKind::ObjectClass,
            "( 2.5.6.6 NAME 'person' DESC 'It\\27s a person' SUP top STRUCTURAL \
             MUST ( sn $ cn ) MAY ( userPassword $ telephoneNumber ) )",
        ),
        (
            SchemaElementKind::MatchingRuleUse,
            "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( cn $ sn ) )",
        ),
        (
            SchemaElementKind::MatchingRule,
            "( 2.5.13.2 NAME 'caseIgnoreMatch' OBSOLETE SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
        ),
        (
            SchemaElementKind::Syntax,
            "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
        ),
    ];

    for (kind, def) in definitions {
        let parsed = kind.parser()(def, strict()).unwrap();
        let rendered = parsed.to_string();
        let reparsed = kind.parser()(&rendered, strict()).unwrap();
        assert_eq!(parsed, reparsed, "round trip through {rendered}");
    }
}

#[test]
fn test_render_canonical_text() {
    let oc = parse_object_class(
        "( 2.5.6.6 MUST ( sn $ cn ) NAME 'person' SUP top )",
        strict(),
    )
    .unwrap();
    assert_eq!(
        oc.to_string(),
        "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) )"
    );

    let at = parse_attribute_type(
        "( 2.5.4.3 SUP name NAME ( 'cn' 'commonName' ) )",
        strict(),
    )
    .unwrap();
    assert_eq!(at.to_string(), "( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name )");
}

fn subschema_entry() -> SearchEntry {
    SearchEntry::new("cn=Subschema")
        .with_attribute(
            "ldapSyntaxes",
            vec!["( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )".to_string()],
        )
        .with_attribute(
            "matchingRules",
            vec![
                "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )"
                    .to_string(),
            ],
        )
        .with_attribute(
            "attributeTypes",
            vec![
                "( 2.5.4.41 NAME 'name' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} )".to_string(),
                "( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name )".to_string(),
                "( 2.5.4.4 NAME ( 'sn' 'surname' ) SUP name )".to_string(),
            ],
        )
        .with_attribute(
            "objectClasses",
            vec![
                "( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )".to_string(),
                "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL MUST ( sn $ cn ) \
                 MAY ( userPassword $ description ) )"
                    .to_string(),
                "( 2.5.6.7 NAME 'organizationalPerson' SUP person STRUCTURAL \
                 MAY ( title $ description $ CN ) )"
                    .to_string(),
            ],
        )
        .with_attribute("modifyTimestamp", vec!["20240101000000Z".to_string()])
}

#[test]
fn test_parse_search_entry() {
    let entry = parse_search_entry(&subschema_entry(), strict()).unwrap();

    assert_eq!(entry.dn, "cn=Subschema");
    assert_eq!(entry.attributes.len(), 5);
    assert_eq!(entry.elements(SchemaElementKind::AttributeType).len(), 3);
    assert_eq!(entry.object_classes().count(), 3);
    assert_eq!(entry.raw("modifytimestamp"), Some(&["20240101000000Z".to_string()][..]));

    // Order within an attribute follows the input
    let names: Vec<&str> = entry.attribute_types().map(|at| at.names[0].as_str()).collect();
    assert_eq!(names, vec!["name", "cn", "sn"]);

    // Order of attributes follows the input too
    let attrs: Vec<&str> = entry.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        attrs,
        vec![
            "ldapSyntaxes",
            "matchingRules",
            "attributeTypes",
            "objectClasses",
            "modifyTimestamp"
        ]
    );
}

#[test]
fn test_attribute_names_dispatch_case_insensitively() {
    let raw = SearchEntry::new("cn=schema").with_attribute(
        "objectclasses",
        vec!["( 2.5.6.0 NAME 'top' ABSTRACT MUST objectClass )".to_string()],
    );
    let entry = parse_search_entry(&raw, strict()).unwrap();

    match entry.get("objectClasses") {
        Some(SchemaValues::Parsed(elements)) => {
            assert!(matches!(elements[0], SchemaElement::ObjectClass(_)));
        }
        other => panic!("Expected parsed object classes, got: {:?}", other),
    }
    assert_eq!(entry.attributes[0].name, "objectclasses");
}

#[test]
fn test_malformed_definition_fails_whole_entry() {
    let raw = subschema_entry().with_attribute(
        "matchingRuleUse",
        vec![
            "( 2.5.13.2 APPLIES cn )".to_string(),
            "( 2.5.13.3 APPLIES ( cn $ sn )".to_string(),
        ],
    );

    let err = parse_search_entry(&raw, strict()).unwrap_err();
    assert_eq!(err.attribute, "matchingRuleUse");
    assert_eq!(err.kind, SchemaElementKind::MatchingRuleUse);
    assert_eq!(err.definition, "( 2.5.13.3 APPLIES ( cn $ sn )");
    assert_eq!(err.reason, ParseErrorKind::UnterminatedParen);
}

#[test]
fn test_registry_lookups() {
    let entry = parse_search_entry(&subschema_entry(), strict()).unwrap();
    let registry = SchemaRegistry::from_entry(&entry);

    assert_eq!(registry.syntax_count(), 1);
    assert_eq!(registry.matching_rule_count(), 1);
    assert_eq!(registry.matching_rule_use_count(), 0);
    assert_eq!(registry.attribute_type_count(), 3);
    assert_eq!(registry.object_class_count(), 3);

    assert!(registry.attribute_type("commonName").is_some());
    assert!(registry.attribute_type("CN").is_some());
    assert!(registry.attribute_type("2.5.4.3").is_some());
    assert!(registry.object_class("PERSON").is_some());
    assert!(registry.matching_rule("caseignorematch").is_some());
    assert!(registry.syntax("1.3.6.1.4.1.1466.115.121.1.15").is_some());
    assert!(registry.object_class("inetOrgPerson").is_none());
}

#[test]
fn test_registry_inheritance() {
    let entry = parse_search_entry(&subschema_entry(), strict()).unwrap();
    let registry = SchemaRegistry::from_entry(&entry);

    let (must, may) = registry.object_class_attributes("organizationalPerson").unwrap();
    assert_eq!(must, vec!["sn", "cn", "objectClass"]);
    // CN is already mandatory and description appears twice
    assert_eq!(may, vec!["title", "description", "userPassword"]);

    let chain: Vec<&str> = registry
        .attribute_superior_chain("cn")
        .iter()
        .map(|at| at.oid.as_str())
        .collect();
    assert_eq!(chain, vec!["2.5.4.3", "2.5.4.41"]);
}

#[test]
fn test_registry_breaks_cycles() {
    let raw = SearchEntry::new("cn=Subschema").with_attribute(
        "objectClasses",
        vec![
            "( 1.1.1 NAME 'a' SUP b MUST x )".to_string(),
            "( 1.1.2 NAME 'b' SUP a MUST y )".to_string(),
        ],
    );
    let entry = parse_search_entry(&raw, strict()).unwrap();
    let registry = SchemaRegistry::from_entry(&entry);

    let (must, may) = registry.object_class_attributes("a").unwrap();
    assert_eq!(must, vec!["x", "y"]);
    assert!(may.is_empty());
}
