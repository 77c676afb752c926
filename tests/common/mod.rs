//! Shared fixtures for the integration tests.
//!
//! The subschema definitions are a trimmed copy of what OpenLDAP publishes
//! for the core and cosine schemas.

#![allow(dead_code)]

use ldap_schema::directory::{InMemoryDirectory, SearchEntry};

pub const SUBSCHEMA_DN: &str = "cn=Subschema";
pub const PEOPLE_DN: &str = "ou=People,dc=example,dc=com";
pub const ALICE_DN: &str = "uid=alice,ou=People,dc=example,dc=com";

pub const LDAP_SYNTAXES: &[&str] = &[
    "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )",
    "( 1.3.6.1.4.1.1466.115.121.1.26 DESC 'IA5 String' )",
    "( 1.3.6.1.4.1.1466.115.121.1.38 DESC 'OID' )",
    "( 1.3.6.1.4.1.1466.115.121.1.40 DESC 'Octet String' )",
    "( 1.3.6.1.4.1.1466.115.121.1.8 DESC 'Certificate' X-BINARY-TRANSFER-REQUIRED 'TRUE' X-NOT-HUMAN-READABLE 'TRUE' )",
];

pub const MATCHING_RULES: &[&str] = &[
    "( 2.5.13.0 NAME 'objectIdentifierMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )",
    "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
    "( 2.5.13.4 NAME 'caseIgnoreSubstringsMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )",
    "( 1.3.6.1.4.1.1466.109.114.2 NAME 'caseIgnoreIA5Match' SYNTAX 1.3.6.1.4.1.1466.115.121.1.26 )",
];

pub const MATCHING_RULE_USE: &[&str] = &[
    "( 2.5.13.2 NAME 'caseIgnoreMatch' APPLIES ( name $ cn $ sn $ givenName $ ou $ title $ description ) )",
];

pub const ATTRIBUTE_TYPES: &[&str] = &[
    "( 2.5.4.0 NAME 'objectClass' DESC 'RFC4512: object classes of the entity' EQUALITY objectIdentifierMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.38 )",
    "( 2.5.18.1 NAME 'createTimestamp' DESC 'RFC4512: time which object was created' EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 SINGLE-VALUE NO-USER-MODIFICATION USAGE directoryOperation )",
    "( 2.5.4.41 NAME 'name' DESC 'RFC4519: common supertype of name attributes' EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} )",
    "( 2.5.4.3 NAME ( 'cn' 'commonName' ) DESC 'RFC4519: common name(s) for which the entity is known by' SUP name )",
    "( 2.5.4.4 NAME ( 'sn' 'surname' ) DESC 'RFC2256: last (family) name(s) for which the entity is known by' SUP name )",
    "( 2.5.4.42 NAME ( 'givenName' 'gn' ) DESC 'RFC2256: first name(s) for which the entity is known by' SUP name )",
    "( 2.5.4.11 NAME ( 'ou' 'organizationalUnitName' ) DESC 'RFC2256: organizational unit this object belongs to' SUP name )",
    "( 2.5.4.12 NAME 'title' DESC 'RFC2256: title associated with the entity' SUP name )",
    "( 2.5.4.13 NAME 'description' DESC 'RFC2256: descriptive information' EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{1024} )",
    "( 2.5.4.35 NAME 'userPassword' DESC 'RFC4519/2307: password of user' EQUALITY octetStringMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.40{128} )",
    "( 0.9.2342.19200300.100.1.1 NAME ( 'uid' 'userid' ) DESC 'RFC1274: user identifier' EQUALITY caseIgnoreMatch SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{256} )",
    "( 0.9.2342.19200300.100.1.3 NAME ( 'mail' 'rfc822Mailbox' ) DESC 'RFC1274: RFC822 Mailbox' EQUALITY caseIgnoreIA5Match SYNTAX 1.3.6.1.4.1.1466.115.121.1.26{256} )",
];

pub const OBJECT_CLASSES: &[&str] = &[
    "( 2.5.6.0 NAME 'top' DESC 'top of the superclass chain' ABSTRACT MUST objectClass )",
    "( 2.5.6.6 NAME 'person' DESC 'RFC2256: a person' SUP top STRUCTURAL MUST ( sn $ cn ) MAY ( userPassword $ description ) )",
    "( 2.5.6.7 NAME 'organizationalPerson' DESC 'RFC2256: an organizational person' SUP person STRUCTURAL MAY ( title $ ou ) )",
    "( 2.16.840.1.113730.3.2.2 NAME 'inetOrgPerson' DESC 'RFC2798: Internet Organizational Person' SUP organizationalPerson STRUCTURAL MAY ( givenName $ mail $ uid ) )",
    "( 2.5.6.5 NAME 'organizationalUnit' DESC 'RFC2256: an organizational unit' SUP top STRUCTURAL MUST ou MAY description )",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The subschema subentry as a server returns it for a `+` search.
pub fn subschema_attributes() -> Vec<(String, Vec<String>)> {
    vec![
        ("structuralObjectClass".to_string(), strings(&["subentry"])),
        ("ldapSyntaxes".to_string(), strings(LDAP_SYNTAXES)),
        ("matchingRules".to_string(), strings(MATCHING_RULES)),
        ("matchingRuleUse".to_string(), strings(MATCHING_RULE_USE)),
        ("attributeTypes".to_string(), strings(ATTRIBUTE_TYPES)),
        ("objectClasses".to_string(), strings(OBJECT_CLASSES)),
        ("modifyTimestamp".to_string(), strings(&["20240101000000Z"])),
    ]
}

pub fn alice() -> SearchEntry {
    SearchEntry::new(ALICE_DN)
        .with_attribute("objectClass", strings(&["top", "person", "inetOrgPerson"]))
        .with_attribute("uid", strings(&["alice"]))
        .with_attribute("cn", strings(&["Alice"]))
        .with_attribute("sn", strings(&["Smith"]))
        .with_attribute("mail", strings(&["alice@example.com"]))
}

/// A directory with the subschema subentry and one person entry.
pub async fn populated_directory() -> InMemoryDirectory {
    init_logging();
    let directory = InMemoryDirectory::with_subschema(SUBSCHEMA_DN, subschema_attributes());
    directory.insert_entry(SearchEntry::new(PEOPLE_DN)).await;
    directory.insert_entry(alice()).await;
    directory
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
