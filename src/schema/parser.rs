//! RFC 4512 §4.1 grammars for the five schema definition kinds.
//!
//! Every definition is parsed in two steps. A single pass over the tokens
//! recognises every keyword any kind may carry, then the per-kind functions
//! pick the fields their grammar defines and check the ones it requires.
//! Keywords a kind does not define, and unknown keywords, are skipped;
//! `X-` keywords are kept as [`Extension`]s. A bare word where a keyword is
//! expected must be keyword-shaped, so stray values are errors.

use super::lexer::{Token, tokenize};
use super::oid::Oid;
use super::types::{
    AttributeType, AttributeUsage, Extension, LdapSyntax, MatchingRule, MatchingRuleUse,
    ObjectClass, ObjectClassKind, SchemaElement, SchemaElementKind,
};
use crate::error::{ParseErrorKind, ParseResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Leniency switches for servers that stray from RFC 4512.
///
/// The default is strict. No option relaxes the requirement that the
/// leading OID is a valid numeric OID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Accept OIDs written as quoted strings (`'2.5.4.3'`, `SUP 'top'`)
    pub allow_quoted_oids: bool,
    /// Accept a keyword appearing more than once; the last value wins
    pub allow_duplicate_keywords: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn lenient() -> Self {
        Self {
            allow_quoted_oids: true,
            allow_duplicate_keywords: true,
        }
    }
}

/// A function turning one definition string into a schema element.
pub type ElementParser = fn(&str, ParseOptions) -> Result<SchemaElement, ParseErrorKind>;

impl SchemaElementKind {
    /// The grammar used for definitions of this kind.
    pub fn parser(self) -> ElementParser {
        match self {
            Self::Syntax => syntax_element,
            Self::MatchingRule => matching_rule_element,
            Self::MatchingRuleUse => matching_rule_use_element,
            Self::AttributeType => attribute_type_element,
            Self::ObjectClass => object_class_element,
        }
    }
}

macro_rules! element_parser {
    ($name:ident, $parse:ident) => {
        fn $name(input: &str, options: ParseOptions) -> Result<SchemaElement, ParseErrorKind> {
            $parse(input, options).map(SchemaElement::from)
        }
    };
}

element_parser!(syntax_element, parse_syntax);
element_parser!(matching_rule_element, parse_matching_rule);
element_parser!(matching_rule_use_element, parse_matching_rule_use);
element_parser!(attribute_type_element, parse_attribute_type);
element_parser!(object_class_element, parse_object_class);

/// Parse one definition string published under `attribute`.
///
/// On failure the error carries the attribute name, the kind and the
/// offending string.
pub fn parse_definition(
    attribute: &str,
    kind: SchemaElementKind,
    definition: &str,
    options: ParseOptions,
) -> ParseResult<SchemaElement> {
    kind.parser()(definition, options)
        .map_err(|reason| reason.in_attribute(attribute, kind, definition))
}

/// Parse an `ldapSyntaxes` value.
pub fn parse_syntax(input: &str, options: ParseOptions) -> Result<LdapSyntax, ParseErrorKind> {
    let def = Definition::parse(input, options)?;
    Ok(LdapSyntax {
        oid: def.oid,
        description: def.description,
        extensions: def.extensions,
    })
}

/// Parse a `matchingRules` value. `SYNTAX` is required.
pub fn parse_matching_rule(
    input: &str,
    options: ParseOptions,
) -> Result<MatchingRule, ParseErrorKind> {
    let def = Definition::parse(input, options)?;
    let (syntax, _) = def.syntax.ok_or_else(|| missing("SYNTAX"))?;
    Ok(MatchingRule {
        oid: def.oid,
        names: def.names,
        description: def.description,
        obsolete: def.obsolete,
        syntax,
        extensions: def.extensions,
    })
}

/// Parse a `matchingRuleUse` value. `APPLIES` is required.
pub fn parse_matching_rule_use(
    input: &str,
    options: ParseOptions,
) -> Result<MatchingRuleUse, ParseErrorKind> {
    let def = Definition::parse(input, options)?;
    let applies = def.applies.ok_or_else(|| missing("APPLIES"))?;
    Ok(MatchingRuleUse {
        oid: def.oid,
        names: def.names,
        description: def.description,
        obsolete: def.obsolete,
        applies,
        extensions: def.extensions,
    })
}

/// Parse an `attributeTypes` value. `SUP` names at most one type.
pub fn parse_attribute_type(
    input: &str,
    options: ParseOptions,
) -> Result<AttributeType, ParseErrorKind> {
    let def = Definition::parse(input, options)?;

    let superior = match def.superiors.as_slice() {
        [] => None,
        [single] => Some(single.clone()),
        [_, extra, ..] => {
            return Err(ParseErrorKind::UnexpectedToken {
                found: extra.clone(),
            });
        }
    };
    let (syntax, syntax_length) = match def.syntax {
        Some((oid, len)) => (Some(oid), len),
        None => (None, None),
    };

    Ok(AttributeType {
        oid: def.oid,
        names: def.names,
        description: def.description,
        obsolete: def.obsolete,
        superior,
        equality: def.equality,
        ordering: def.ordering,
        substr: def.substr,
        syntax,
        syntax_length,
        single_value: def.single_value,
        collective: def.collective,
        no_user_modification: def.no_user_modification,
        usage: def.usage.unwrap_or_default(),
        extensions: def.extensions,
    })
}

/// Parse an `objectClasses` value. The kind defaults to STRUCTURAL.
pub fn parse_object_class(
    input: &str,
    options: ParseOptions,
) -> Result<ObjectClass, ParseErrorKind> {
    let def = Definition::parse(input, options)?;
    Ok(ObjectClass {
        oid: def.oid,
        names: def.names,
        description: def.description,
        obsolete: def.obsolete,
        superiors: def.superiors,
        kind: def.class_kind.unwrap_or_default(),
        must: def.must,
        may: def.may,
        extensions: def.extensions,
    })
}

macro_rules! impl_from_str {
    ($ty:ty, $parse:ident) => {
        impl FromStr for $ty {
            type Err = ParseErrorKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s, ParseOptions::strict())
            }
        }
    };
}

impl_from_str!(LdapSyntax, parse_syntax);
impl_from_str!(MatchingRule, parse_matching_rule);
impl_from_str!(MatchingRuleUse, parse_matching_rule_use);
impl_from_str!(AttributeType, parse_attribute_type);
impl_from_str!(ObjectClass, parse_object_class);

fn missing(keyword: &str) -> ParseErrorKind {
    ParseErrorKind::MissingValue {
        keyword: keyword.to_string(),
    }
}

/// Every field any definition kind may carry.
#[derive(Debug)]
struct Definition {
    oid: Oid,
    names: Vec<String>,
    description: Option<String>,
    obsolete: bool,
    superiors: Vec<String>,
    equality: Option<String>,
    ordering: Option<String>,
    substr: Option<String>,
    syntax: Option<(Oid, Option<u32>)>,
    single_value: bool,
    collective: bool,
    no_user_modification: bool,
    usage: Option<AttributeUsage>,
    class_kind: Option<ObjectClassKind>,
    must: Vec<String>,
    may: Vec<String>,
    applies: Option<Vec<String>>,
    extensions: Vec<Extension>,
}

/// Position in the token stream of one definition.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    options: ParseOptions,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Whether the next token can start the value of an unknown keyword.
    fn value_follows(&self) -> bool {
        match self.peek() {
            Some(Token::Quoted(_)) | Some(Token::LParen) => true,
            Some(Token::Word(w)) => !looks_like_keyword(w),
            _ => false,
        }
    }

    /// Error for a keyword whose value is absent or of the wrong shape.
    fn bad_value(&self, keyword: &str) -> ParseErrorKind {
        match self.peek() {
            None => ParseErrorKind::UnterminatedParen,
            Some(Token::RParen) => missing(keyword),
            Some(Token::Word(w)) if is_keyword(w) => missing(keyword),
            Some(token) => ParseErrorKind::UnexpectedToken {
                found: token.describe(),
            },
        }
    }

    /// `qdstring`
    fn qdstring(&mut self, keyword: &str) -> Result<String, ParseErrorKind> {
        match self.peek() {
            Some(Token::Quoted(s)) => {
                self.pos += 1;
                Ok(s.clone())
            }
            _ => Err(self.bad_value(keyword)),
        }
    }

    /// `qdstrings` / `qdescrs`: one quoted string or a parenthesized list.
    fn qdstrings(&mut self, keyword: &str) -> Result<Vec<String>, ParseErrorKind> {
        match self.peek() {
            Some(Token::Quoted(_)) => Ok(vec![self.qdstring(keyword)?]),
            Some(Token::LParen) => {
                self.pos += 1;
                let mut values = Vec::new();
                loop {
                    match self.next() {
                        Some(Token::Quoted(s)) => values.push(s.clone()),
                        Some(Token::RParen) => return Ok(values),
                        None => return Err(ParseErrorKind::UnterminatedParen),
                        Some(token) => {
                            return Err(ParseErrorKind::UnexpectedToken {
                                found: token.describe(),
                            });
                        }
                    }
                }
            }
            _ => Err(self.bad_value(keyword)),
        }
    }

    /// `oid`: a descriptor or numeric OID, optionally quoted when allowed.
    fn oid(&mut self, keyword: &str) -> Result<String, ParseErrorKind> {
        match self.peek() {
            Some(Token::Word(w)) if !is_keyword(w) => {
                self.pos += 1;
                Ok(w.clone())
            }
            Some(Token::Quoted(s)) if self.options.allow_quoted_oids => {
                self.pos += 1;
                Ok(s.clone())
            }
            _ => Err(self.bad_value(keyword)),
        }
    }

    /// `oids`: one oid or a `$`-separated parenthesized list.
    ///
    /// Inside the parentheses any bare word is an oid, even an upper-case one.
    fn oids(&mut self, keyword: &str) -> Result<Vec<String>, ParseErrorKind> {
        if self.peek() != Some(&Token::LParen) {
            return Ok(vec![self.oid(keyword)?]);
        }

        self.pos += 1;
        let mut values = Vec::new();
        loop {
            match self.next() {
                Some(Token::RParen) if values.is_empty() => return Ok(values),
                Some(Token::Word(w)) => values.push(w.clone()),
                Some(Token::Quoted(s)) if self.options.allow_quoted_oids => {
                    values.push(s.clone())
                }
                None => return Err(ParseErrorKind::UnterminatedParen),
                Some(token) => {
                    return Err(ParseErrorKind::UnexpectedToken {
                        found: token.describe(),
                    });
                }
            }
            match self.next() {
                Some(Token::Dollar) => continue,
                Some(Token::RParen) => return Ok(values),
                None => return Err(ParseErrorKind::UnterminatedParen),
                Some(token) => {
                    return Err(ParseErrorKind::UnexpectedToken {
                        found: token.describe(),
                    });
                }
            }
        }
    }

    /// `noidlen`: numeric OID with an optional `{len}` suffix.
    fn noidlen(&mut self, keyword: &str) -> Result<(Oid, Option<u32>), ParseErrorKind> {
        let raw = self.oid(keyword)?;
        let (oid, len) = match raw.split_once('{') {
            Some((oid, rest)) => {
                let len = rest
                    .strip_suffix('}')
                    .and_then(|digits| digits.parse::<u32>().ok())
                    .ok_or_else(|| ParseErrorKind::InvalidSyntaxLength { value: raw.clone() })?;
                (oid, Some(len))
            }
            None => (raw.as_str(), None),
        };
        Ok((numeric_oid(oid)?, len))
    }

    /// Skip the value of an unrecognised keyword, if it has one.
    fn skip_value(&mut self) -> Result<(), ParseErrorKind> {
        if !self.value_follows() {
            return Ok(());
        }
        if self.next() == Some(&Token::LParen) {
            let mut depth = 1usize;
            while depth > 0 {
                match self.next() {
                    Some(Token::LParen) => depth += 1,
                    Some(Token::RParen) => depth -= 1,
                    Some(_) => {}
                    None => return Err(ParseErrorKind::UnterminatedParen),
                }
            }
        }
        Ok(())
    }
}

/// Keywords are upper-case letters, digits and hyphens (`NAME`, `X-ORIGIN`).
fn looks_like_keyword(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_uppercase())
        && word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// A keyword this parser recognises. Any other word in a value position is a
/// descriptor, whatever its case (`MUST CN`, `EQUALITY UUID`).
pub(crate) fn is_keyword(word: &str) -> bool {
    keyword_slot(word).is_some() || word.starts_with("X-")
}

fn numeric_oid(value: &str) -> Result<Oid, ParseErrorKind> {
    Oid::new(value.to_string()).map_err(|_| ParseErrorKind::InvalidOid {
        value: value.to_string(),
    })
}

impl Definition {
    fn parse(input: &str, options: ParseOptions) -> Result<Self, ParseErrorKind> {
        let tokens = tokenize(input)?;
        let mut cursor = Cursor {
            tokens: &tokens,
            pos: 0,
            options,
        };

        match cursor.next() {
            None => return Err(ParseErrorKind::Empty),
            Some(Token::LParen) => {}
            Some(_) => return Err(ParseErrorKind::MissingOpenParen),
        }

        let oid = match cursor.next() {
            Some(Token::Word(w)) if !looks_like_keyword(w) => numeric_oid(w)?,
            Some(Token::Quoted(s)) if options.allow_quoted_oids => numeric_oid(s)?,
            Some(Token::Word(_)) | Some(Token::RParen) => return Err(ParseErrorKind::MissingOid),
            None => return Err(ParseErrorKind::UnterminatedParen),
            Some(token) => {
                return Err(ParseErrorKind::UnexpectedToken {
                    found: token.describe(),
                });
            }
        };

        let mut def = Definition {
            oid,
            names: Vec::new(),
            description: None,
            obsolete: false,
            superiors: Vec::new(),
            equality: None,
            ordering: None,
            substr: None,
            syntax: None,
            single_value: false,
            collective: false,
            no_user_modification: false,
            usage: None,
            class_kind: None,
            must: Vec::new(),
            may: Vec::new(),
            applies: None,
            extensions: Vec::new(),
        };
        let mut seen: HashSet<&'static str> = HashSet::new();

        loop {
            let keyword = match cursor.next() {
                Some(Token::RParen) => break,
                Some(Token::Word(w)) if looks_like_keyword(w) => w.as_str(),
                None => return Err(ParseErrorKind::UnterminatedParen),
                Some(token) => {
                    return Err(ParseErrorKind::UnexpectedToken {
                        found: token.describe(),
                    });
                }
            };
            if let Some(slot) = keyword_slot(keyword) {
                if !seen.insert(slot) && !options.allow_duplicate_keywords {
                    return Err(ParseErrorKind::DuplicateKeyword {
                        keyword: keyword.to_string(),
                    });
                }
            }

            match keyword {
                "NAME" => def.names = cursor.qdstrings("NAME")?,
                "DESC" => def.description = Some(cursor.qdstring("DESC")?),
                "OBSOLETE" => def.obsolete = true,
                "SUP" => def.superiors = cursor.oids("SUP")?,
                "EQUALITY" => def.equality = Some(cursor.oid("EQUALITY")?),
                "ORDERING" => def.ordering = Some(cursor.oid("ORDERING")?),
                "SUBSTR" => def.substr = Some(cursor.oid("SUBSTR")?),
                "SYNTAX" => def.syntax = Some(cursor.noidlen("SYNTAX")?),
                "SINGLE-VALUE" => def.single_value = true,
                "COLLECTIVE" => def.collective = true,
                "NO-USER-MODIFICATION" => def.no_user_modification = true,
                "USAGE" => {
                    let value = cursor.oid("USAGE")?;
                    let usage = AttributeUsage::from_keyword(&value)
                        .ok_or(ParseErrorKind::InvalidUsage { value })?;
                    def.usage = Some(usage);
                }
                "ABSTRACT" => def.class_kind = Some(ObjectClassKind::Abstract),
                "STRUCTURAL" => def.class_kind = Some(ObjectClassKind::Structural),
                "AUXILIARY" => def.class_kind = Some(ObjectClassKind::Auxiliary),
                "MUST" => def.must = cursor.oids("MUST")?,
                "MAY" => def.may = cursor.oids("MAY")?,
                "APPLIES" => def.applies = Some(cursor.oids("APPLIES")?),
                _ if keyword.starts_with("X-") => {
                    let values = cursor.qdstrings(keyword)?;
                    def.extensions.push(Extension::new(keyword, values));
                }
                _ => cursor.skip_value()?,
            }
        }

        if cursor.peek().is_some() {
            return Err(ParseErrorKind::TrailingData);
        }

        Ok(def)
    }
}

/// Duplicate-tracking slot for a keyword. The three object class kinds share
/// one slot; extensions and unknown keywords are not tracked.
fn keyword_slot(keyword: &str) -> Option<&'static str> {
    Some(match keyword {
        "NAME" => "NAME",
        "DESC" => "DESC",
        "OBSOLETE" => "OBSOLETE",
        "SUP" => "SUP",
        "EQUALITY" => "EQUALITY",
        "ORDERING" => "ORDERING",
        "SUBSTR" => "SUBSTR",
        "SYNTAX" => "SYNTAX",
        "SINGLE-VALUE" => "SINGLE-VALUE",
        "COLLECTIVE" => "COLLECTIVE",
        "NO-USER-MODIFICATION" => "NO-USER-MODIFICATION",
        "USAGE" => "USAGE",
        "ABSTRACT" | "STRUCTURAL" | "AUXILIARY" => "KIND",
        "MUST" => "MUST",
        "MAY" => "MAY",
        "APPLIES" => "APPLIES",
        _ => return None,
    })
}
