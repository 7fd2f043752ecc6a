//! Labels, symbols and transition keys.
//!
//! Labels and symbols are compared exactly (case-sensitive). They carry no
//! validation of their own: membership and uniqueness are enforced by the
//! automaton builder.

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// The name of a state, e.g. `q0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Create a new label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Label {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single-character alphabet symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// Create a new symbol.
    pub fn new(c: char) -> Self {
        Self(c)
    }

    /// Get the underlying character.
    pub fn as_char(&self) -> char {
        self.0
    }

    /// Parse a symbol from text that must hold exactly one character.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c)
    }
}

/// The `(state, symbol)` pair identifying one entry of a transition function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TransitionKey {
    pub state: Label,
    pub symbol: Symbol,
}

impl TransitionKey {
    pub fn new(state: impl Into<Label>, symbol: impl Into<Symbol>) -> Self {
        Self {
            state: state.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.state, self.symbol)
    }
}
