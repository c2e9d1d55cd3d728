//! The full key to values mapping of one request.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::group::ParamGroup;
use crate::value::ParamValue;

/// Decoded query parameters, read-only once built.
///
/// Keys keep the order of their first occurrence. Nothing relies on that
/// order, it only makes iteration and dumps stable.
///
/// # Examples
///
/// ```
/// use simple_query_core::query::Query;
///
/// let query = Query::from_query("verbose&limit=20&tag=a&tag=b");
///
/// assert!(query.get("verbose").bool_or(false));
/// assert!(!query.get("quiet").bool_or(false));
/// assert_eq!(query.get("limit").int64_or(10), 20);
/// assert_eq!(query.get_index("tag", 1).string_or_default(), "b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    params: IndexMap<String, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` string.
    ///
    /// Pairs are split on `&`, `+` decodes to a space and a key with no `=`
    /// gets a single empty value. Malformed percent escapes are kept as they
    /// are, so decoding never fails.
    pub fn from_query(raw: &str) -> Self {
        let query: Self = form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        debug!("Decoded {} parameter keys from query", query.len());
        query
    }

    /// Decodes the query part of a URI, between the first `?` and any `#`.
    /// A URI without a query gives an empty collection.
    pub fn from_uri(uri: &str) -> Self {
        let without_fragment = uri.split_once('#').map_or(uri, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((_, query)) => Self::from_query(query),
            None => Self::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// True when the key was given at all, even with an empty value.
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// The values of `key`; empty when the key is missing.
    pub fn group(&self, key: &str) -> ParamGroup {
        match self.params.get(key) {
            Some(values) => ParamGroup::new(key, values.clone()),
            None => ParamGroup::empty(key),
        }
    }

    /// The first value of `key`.
    pub fn get(&self, key: &str) -> ParamValue {
        self.get_index(key, 0)
    }

    /// The value of `key` at `index`, absent when out of range.
    ///
    /// Same result as `self.group(key).at(index)`, copying only the one value.
    pub fn get_index(&self, key: &str, index: isize) -> ParamValue {
        let value = usize::try_from(index)
            .ok()
            .and_then(|index| self.values(key).get(index))
            .cloned();
        ParamValue::new(key, value)
    }

    /// Reduces every value of `key` with `reducer`, see [`ParamGroup::combine`].
    pub fn get_combined<F>(&self, key: &str, reducer: F) -> ParamValue
    where
        F: FnOnce(&[String]) -> Option<String>,
    {
        ParamValue::new(key, reducer(self.values(key)))
    }

    fn values(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// A new collection holding only the keys accepted by `predicate`.
    pub fn filter_keys<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&str) -> bool,
    {
        self.params
            .iter()
            .filter(|(key, _)| predicate(key.as_str()))
            .map(|(key, values)| (key.clone(), values.clone()))
            .collect::<IndexMap<_, _>>()
            .into()
    }

    /// Calls `visitor` once per key.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, ParamGroup),
    {
        for (key, group) in self.iter() {
            visitor(key, group);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamGroup)> {
        self.params
            .iter()
            .map(|(key, values)| (key.as_str(), ParamGroup::new(key.as_str(), values.clone())))
    }
}

impl From<IndexMap<String, Vec<String>>> for Query {
    fn from(params: IndexMap<String, Vec<String>>) -> Self {
        Self { params }
    }
}

impl<S: std::hash::BuildHasher> From<HashMap<String, Vec<String>, S>> for Query {
    fn from(params: HashMap<String, Vec<String>, S>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Query {
    /// Builds a collection from key/value pairs, appending repeated keys.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut params: IndexMap<String, Vec<String>> = IndexMap::new();
        for (key, value) in pairs {
            params.entry(key.into()).or_default().push(value.into());
        }
        Self { params }
    }
}
