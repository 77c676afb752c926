//! RFC 4512 text rendering for parsed schema elements.
//!
//! Keywords are written in the order RFC 4512 lists them, so the output of a
//! record parses back into an equal record even when the server's original
//! text used a different order.

use super::lexer::quote;
use super::parser::is_keyword;
use super::types::{
    AttributeType, AttributeUsage, Extension, LdapSyntax, MatchingRule, MatchingRuleUse,
    ObjectClass, SchemaElement,
};
use std::fmt::{self, Display, Formatter, Write};

/// Accumulates `KEYWORD value` terms between the outer parentheses.
struct Terms<'a, 'b> {
    f: &'a mut Formatter<'b>,
}

impl<'a, 'b> Terms<'a, 'b> {
    fn open(f: &'a mut Formatter<'b>, oid: &str) -> Result<Self, fmt::Error> {
        write!(f, "( {oid}")?;
        Ok(Self { f })
    }

    fn flag(&mut self, keyword: &str, set: bool) -> fmt::Result {
        if set {
            write!(self.f, " {keyword}")?;
        }
        Ok(())
    }

    fn qdstring(&mut self, keyword: &str, value: Option<&str>) -> fmt::Result {
        if let Some(value) = value {
            write!(self.f, " {keyword} {}", quote(value))?;
        }
        Ok(())
    }

    fn qdstrings(&mut self, keyword: &str, values: &[String]) -> fmt::Result {
        match values {
            [] => Ok(()),
            [single] => write!(self.f, " {keyword} {}", quote(single)),
            many => {
                write!(self.f, " {keyword} (")?;
                for value in many {
                    write!(self.f, " {}", quote(value))?;
                }
                self.f.write_str(" )")
            }
        }
    }

    fn oid(&mut self, keyword: &str, value: Option<&str>) -> fmt::Result {
        if let Some(value) = value {
            write!(self.f, " {keyword} {value}")?;
        }
        Ok(())
    }

    fn oids(&mut self, keyword: &str, values: &[String]) -> fmt::Result {
        match values {
            [] => Ok(()),
            [single] if !is_keyword(single) => write!(self.f, " {keyword} {single}"),
            many => {
                let joined = many.join(" $ ");
                write!(self.f, " {keyword} ( {joined} )")
            }
        }
    }

    fn extensions(&mut self, extensions: &[Extension]) -> fmt::Result {
        for ext in extensions {
            if ext.values.is_empty() {
                write!(self.f, " {} ( )", ext.name)?;
            } else {
                self.qdstrings(&ext.name, &ext.values)?;
            }
        }
        Ok(())
    }

    fn close(self) -> fmt::Result {
        self.f.write_str(" )")
    }
}

impl Display for LdapSyntax {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = Terms::open(f, self.oid.as_str())?;
        terms.qdstring("DESC", self.description.as_deref())?;
        terms.extensions(&self.extensions)?;
        terms.close()
    }
}

impl Display for MatchingRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = Terms::open(f, self.oid.as_str())?;
        terms.qdstrings("NAME", &self.names)?;
        terms.qdstring("DESC", self.description.as_deref())?;
        terms.flag("OBSOLETE", self.obsolete)?;
        terms.oid("SYNTAX", Some(self.syntax.as_str()))?;
        terms.extensions(&self.extensions)?;
        terms.close()
    }
}

impl Display for MatchingRuleUse {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = Terms::open(f, self.oid.as_str())?;
        terms.qdstrings("NAME", &self.names)?;
        terms.qdstring("DESC", self.description.as_deref())?;
        terms.flag("OBSOLETE", self.obsolete)?;
        if self.applies.is_empty() {
            terms.f.write_str(" APPLIES ( )")?;
        } else {
            terms.oids("APPLIES", &self.applies)?;
        }
        terms.extensions(&self.extensions)?;
        terms.close()
    }
}

impl Display for AttributeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let syntax = self.syntax.as_ref().map(|oid| {
            let mut noidlen = oid.to_string();
            if let Some(len) = self.syntax_length {
                // Writing to a String cannot fail.
                let _ = write!(noidlen, "{{{len}}}");
            }
            noidlen
        });

        let mut terms = Terms::open(f, self.oid.as_str())?;
        terms.qdstrings("NAME", &self.names)?;
        terms.qdstring("DESC", self.description.as_deref())?;
        terms.flag("OBSOLETE", self.obsolete)?;
        terms.oids("SUP", self.superior.as_slice())?;
        terms.oid("EQUALITY", self.equality.as_deref())?;
        terms.oid("ORDERING", self.ordering.as_deref())?;
        terms.oid("SUBSTR", self.substr.as_deref())?;
        terms.oid("SYNTAX", syntax.as_deref())?;
        terms.flag("SINGLE-VALUE", self.single_value)?;
        terms.flag("COLLECTIVE", self.collective)?;
        terms.flag("NO-USER-MODIFICATION", self.no_user_modification)?;
        if self.usage != AttributeUsage::UserApplications {
            terms.oid("USAGE", Some(self.usage.as_str()))?;
        }
        terms.extensions(&self.extensions)?;
        terms.close()
    }
}

impl Display for ObjectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms = Terms::open(f, self.oid.as_str())?;
        terms.qdstrings("NAME", &self.names)?;
        terms.qdstring("DESC", self.description.as_deref())?;
        terms.flag("OBSOLETE", self.obsolete)?;
        terms.oids("SUP", &self.superiors)?;
        terms.flag(self.kind.as_str(), true)?;
        terms.oids("MUST", &self.must)?;
        terms.oids("MAY", &self.may)?;
        terms.extensions(&self.extensions)?;
        terms.close()
    }
}

impl Display for SchemaElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => e.fmt(f),
            Self::MatchingRule(e) => e.fmt(f),
            Self::MatchingRuleUse(e) => e.fmt(f),
            Self::AttributeType(e) => e.fmt(f),
            Self::ObjectClass(e) => e.fmt(f),
        }
    }
}
