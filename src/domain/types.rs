//! Strongly-typed value objects used by the pagination core.
//!
//! These wrappers enforce basic invariants (page numbers start at one,
//! query parameters keep their insertion order) so that once a value reaches
//! the navigator or the renderer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page number must be greater than zero")]
    NonPositivePage,
    /// Provided page value is not a decimal integer.
    #[error("invalid page value: {0}")]
    InvalidPage(String),
}

/// One-based page index.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(usize);

impl PageNumber {
    /// The first page of every listing.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a new page number ensuring it is greater than zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Returns the raw `usize` backing this page number.
    pub const fn get(self) -> usize {
        self.0
    }

    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) fn predecessor(self) -> Option<Self> {
        Self::new(self.0 - 1).ok()
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for usize {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

impl FromStr for PageNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidPage(s.to_string()));
        }
        let value = s
            .parse::<usize>()
            .map_err(|_| TypeConstraintError::InvalidPage(s.to_string()))?;
        Self::new(value)
    }
}

/// Query string parameters in the order they appeared in the URL.
///
/// Re-inserting an existing key replaces the value in place, so overriding
/// `page` never moves it relative to the other parameters.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct QueryParameters(IndexMap<String, String>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a copy with `page` set to the given number.
    pub fn with_page(&self, page: PageNumber) -> Self {
        let mut params = self.clone();
        params.insert("page", page.to_string());
        params
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
