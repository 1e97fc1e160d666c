//! Query parameters: plain values and parameters that carry their own key.

use std::collections::BTreeMap;
use std::fmt;

/// A single query string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Boolean value, rendered as `true` / `false`.
    Bool(bool),
    /// List value, rendered comma-separated.
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A parameter that declares the key it is sent under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParam {
    /// Destination key.
    pub key: String,
    /// Value.
    pub value: ParamValue,
}

impl NamedParam {
    /// Creates a named parameter.
    pub fn new(key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `language` (ISO 639-1, optionally with region, e.g. `de-DE`).
    pub fn language(language: impl Into<String>) -> Self {
        Self::new("language", language.into())
    }

    /// `page` (1-based).
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self::new("page", page)
    }

    /// `region` (ISO 3166-1).
    pub fn region(region: impl Into<String>) -> Self {
        Self::new("region", region.into())
    }

    /// `year`.
    #[must_use]
    pub fn year(year: u32) -> Self {
        Self::new("year", year)
    }

    /// `include_adult`.
    #[must_use]
    pub fn include_adult(include: bool) -> Self {
        Self::new("include_adult", include)
    }

    /// `append_to_response` (sub-requests merged into the main response).
    pub fn append_to_response<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        Self::new("append_to_response", ParamValue::List(items))
    }

    /// `session_id`.
    pub fn session_id(session_id: impl Into<String>) -> Self {
        Self::new("session_id", session_id.into())
    }

    /// `query` (search text).
    pub fn query(query: impl Into<String>) -> Self {
        Self::new("query", query.into())
    }
}

/// Either a plain value stored under its slot key, or a named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParameter {
    /// Sent under the slot key it was stored with.
    Plain(ParamValue),
    /// Sent under its own key.
    Named(NamedParam),
}

impl From<ParamValue> for QueryParameter {
    fn from(value: ParamValue) -> Self {
        Self::Plain(value)
    }
}

impl From<NamedParam> for QueryParameter {
    fn from(value: NamedParam) -> Self {
        Self::Named(value)
    }
}

/// Resolves parameters into the key/value map that is sent.
///
/// Plain values keep their slot key. Named parameters are stored under their
/// own key and win over a plain value with the same key, whatever the input
/// order.
pub fn normalize<I>(parameters: I) -> BTreeMap<String, ParamValue>
where
    I: IntoIterator<Item = (String, QueryParameter)>,
{
    let mut resolved = BTreeMap::new();
    let mut named = Vec::new();

    for (key, candidate) in parameters {
        match candidate {
            QueryParameter::Plain(value) => {
                resolved.insert(key, value);
            }
            QueryParameter::Named(param) => named.push(param),
        }
    }

    for NamedParam { key, value } in named {
        resolved.insert(key, value);
    }

    resolved
}

/// Ordered collection of query parameters.
///
/// Keyed slots come from [`QueryParameters::with`] and
/// [`QueryParameters::insert`]. Parameters appended with
/// [`QueryParameters::push`] take an unkeyed slot that no key can replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    entries: Vec<(Option<String>, QueryParameter)>,
}

impl QueryParameters {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores a plain value under `key`, replacing any entry in that slot.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, QueryParameter::Plain(value.into()));
        self
    }

    /// Appends a named parameter in a fresh slot.
    #[must_use]
    pub fn push(mut self, param: NamedParam) -> Self {
        self.entries.push((None, QueryParameter::Named(param)));
        self
    }

    /// Stores `parameter` under `slot`, replacing any entry in that slot.
    pub fn insert(&mut self, slot: impl Into<String>, parameter: QueryParameter) {
        let slot = slot.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.as_deref() == Some(slot.as_str()))
        {
            entry.1 = parameter;
        } else {
            self.entries.push((Some(slot), parameter));
        }
    }

    /// Returns `true` if no parameters are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalizes the stored parameters (see [`normalize`]).
    #[must_use]
    pub fn normalize(&self) -> BTreeMap<String, ParamValue> {
        normalize(
            self.entries
                .iter()
                .map(|(slot, parameter)| (slot.clone().unwrap_or_default(), parameter.clone())),
        )
    }

    /// Normalized parameters rendered as query string pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.normalize()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect()
    }
}
