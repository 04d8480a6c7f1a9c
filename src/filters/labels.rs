//! The label resolver rewrites a comma-separated token stream,
//! collapsing `name:value` definitions to their value and replacing
//! `$name` references with the index of the defining token.
//! 
//! ```text
//! start: 5, $start, next: $start, $next  // comments are dropped
//! ```
//! 
//! resolves to
//! 
//! ```text
//! 5,0,0,2
//! ```
//! 
//! Resolution runs in two passes over a pre-classified token list.
//! The first records every definition in a `LabelTable`, the second
//! looks up every reference. A definition may therefore be referenced
//! before it appears, and its value may itself be a reference.
use std::collections::HashMap;
use std::fmt;
use super::error::{Error, Result};
use super::tokens::{split_tokens, strip_comments};

/// Marker that introduces a label reference.
pub const REFERENCE_SIGIL: char = '$';
/// Separator between the name and value of a definition.
pub const DEFINITION_SEPARATOR: char = ':';

/// A non-definition token.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operand {
    Reference(String),
    Plain(String),
}

impl Operand {
    fn classify(token: &str) -> Self {
        if token.starts_with(REFERENCE_SIGIL) {
            Operand::Reference(token[REFERENCE_SIGIL.len_utf8()..].to_owned())
        } else {
            Operand::Plain(token.to_owned())
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Reference(name) => write!(f, "{}{}", REFERENCE_SIGIL, name),
            Operand::Plain(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Definition { name: String, value: Operand },
    Operand(Operand),
}

/// Classifies a single trimmed token.
/// Tokens holding more than one `:` are rejected.
pub fn classify(token: &str, index: usize) -> Result<Token> {
    let mut parts = token.split(DEFINITION_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(value), None) => Ok(Token::Definition {
            name: name.trim().to_owned(),
            value: Operand::classify(value.trim()),
        }),
        (Some(_), None, _) => Ok(Token::Operand(Operand::classify(token))),
        _ => Err(Error::MalformedDefinition {
            token: token.to_owned(),
            index,
        }),
    }
}

/// Maps a label name to the index of its defining token.
/// Redefinitions overwrite the earlier entry.
#[derive(Default, Debug)]
pub struct LabelTable {
    labels: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        LabelTable::default()
    }

    pub fn define(&mut self, name: &str, index: usize) {
        if let Some(prev) = self.labels.insert(name.to_owned(), index) {
            debug!("Label `{}` redefined: {} -> {}", name, prev, index);
        }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries sorted by index, then by name.
    pub fn entries(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = self.labels.iter()
            .map(|(name, idx)| (name.as_str(), *idx))
            .collect();
        out.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
        out
    }
}

/// The outcome of a resolver run.
#[derive(Debug)]
pub struct Resolved {
    pub tokens: Vec<String>,
    pub labels: LabelTable,
}

impl Resolved {
    /// The resolved tokens joined back into a single comma list.
    pub fn joined(&self) -> String {
        self.tokens.join(",")
    }
}

/// Strips comments, splits, classifies and resolves `text`.
pub fn resolve(text: &str) -> Result<Resolved> {
    let raw = split_tokens(&strip_comments(text));
    debug!("Resolving {} token(s)", raw.len());

    let classified = raw.iter()
        .enumerate()
        .map(|(index, tok)| classify(tok, index))
        .collect::<Result<Vec<Token>>>()?;

    resolve_tokens(classified)
}

/// Runs both passes over an already classified token list.
pub fn resolve_tokens(tokens: Vec<Token>) -> Result<Resolved> {
    let mut labels = LabelTable::new();

    // Pass 1: record definitions and collapse them to their value.
    let operands: Vec<Operand> = tokens.into_iter()
        .enumerate()
        .map(|(index, tok)| match tok {
            Token::Definition { name, value } => {
                labels.define(&name, index);
                value
            },
            Token::Operand(op) => op,
        })
        .collect();
    info!("Collected {} label definition(s)", labels.len());

    // Pass 2: replace references with the defining index.
    let mut out = Vec::with_capacity(operands.len());
    for (index, op) in operands.into_iter().enumerate() {
        match op {
            Operand::Reference(name) => match labels.get(&name) {
                Some(target) => out.push(target.to_string()),
                None => return Err(Error::UndefinedLabel { name, index }),
            },
            Operand::Plain(text) => out.push(text),
        }
    }

    Ok(Resolved { tokens: out, labels })
}
