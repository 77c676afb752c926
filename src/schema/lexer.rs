//! Tokenizer for RFC 4512 schema definition strings.

use crate::error::ParseErrorKind;

/// A lexical token of a schema definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    LParen,
    RParen,
    Dollar,
    /// A single-quoted string with escapes decoded
    Quoted(String),
    /// A bare keyword, OID, descriptor or `oid{len}` run
    Word(String),
}

impl Token {
    /// Text used when reporting the token in an error.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Dollar => "$".to_string(),
            Token::Quoted(s) => format!("'{s}'"),
            Token::Word(w) => w.clone(),
        }
    }
}

/// Split a definition into tokens.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseErrorKind> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '$' => {
                chars.next();
                tokens.push(Token::Dollar);
            }
            '\'' => {
                chars.next();
                let mut raw = None;
                for (idx, c) in chars.by_ref() {
                    if c == '\'' {
                        raw = Some(&input[start + 1..idx]);
                        break;
                    }
                }
                let raw = raw.ok_or(ParseErrorKind::UnterminatedQuote)?;
                tokens.push(Token::Quoted(unescape(raw)));
            }
            _ => {
                let mut end = input.len();
                while let Some(&(idx, c)) = chars.peek() {
                    if c.is_whitespace() || matches!(c, '(' | ')' | '$' | '\'') {
                        end = idx;
                        break;
                    }
                    chars.next();
                }
                tokens.push(Token::Word(input[start..end].to_string()));
            }
        }
    }

    Ok(tokens)
}

/// Decode the `\27` and `\5C` escapes allowed inside a `qdstring`.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos + 1..pos + 3);
        match escape {
            Some("27") => {
                out.push('\'');
                rest = &rest[pos + 3..];
            }
            Some(e) if e.eq_ignore_ascii_case("5c") => {
                out.push('\\');
                rest = &rest[pos + 3..];
            }
            _ => {
                out.push('\\');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Encode a value as a `qdstring`, escaping quotes and backslashes.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\27"),
            '\\' => out.push_str("\\5C"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
