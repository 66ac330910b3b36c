//! Domain types for parameters and store responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

use crate::core::constants::PATH_SEPARATOR;

/// Type of a stored parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    String,
    SecureString,
    StringList,
}

impl ParameterType {
    /// Name as used by the Parameter Store API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::SecureString => "SecureString",
            Self::StringList => "StringList",
        }
    }

    /// Parse an API type name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "String" => Some(Self::String),
            "SecureString" => Some(Self::SecureString),
            "StringList" => Some(Self::StringList),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of one parameter, as returned by enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMetadata {
    pub name: String,
    pub kind: ParameterType,
}

impl ParameterMetadata {
    pub fn new(name: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Whether the name denotes a hierarchical path (`/a/b/c`).
    pub fn is_path(&self) -> bool {
        self.name.starts_with(PATH_SEPARATOR)
    }

    /// Top-level path containing this parameter.
    ///
    /// `/app/db/pass` → `/app`. Returns `None` for non-path names.
    pub fn root_path(&self) -> Option<String> {
        if !self.is_path() {
            return None;
        }
        let segment = self.name[1..].split(PATH_SEPARATOR).next().unwrap_or("");
        Some(format!("{}{}", PATH_SEPARATOR, segment))
    }
}

/// A parameter with its (decrypted) value.
///
/// The value is wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    value: Zeroizing<String>,
}

impl ParameterValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Exact, case-sensitive comparison against `target`.
    pub fn matches(&self, target: &str) -> bool {
        self.value.as_str() == target
    }
}

impl fmt::Debug for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterValue")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// One page of a store response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token; `None` on the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}
