//! All the values registered under one key.

use crate::value::{FromParam, ParamValue};

/// The ordered values of one key, in the order they appeared in the query.
///
/// A key written once without `=` (`?k`) has a single empty value. A key that
/// never appeared has no values at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamGroup {
    pub key: String,
    pub values: Vec<String>,
}

impl ParamGroup {
    pub fn new(key: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    pub fn empty(key: impl Into<String>) -> Self {
        Self::new(key, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn first(&self) -> ParamValue {
        self.at(0)
    }

    /// The value at `index`. Negative or out of range indexes give an absent
    /// value rather than an error.
    pub fn at(&self, index: isize) -> ParamValue {
        let value = usize::try_from(index)
            .ok()
            .and_then(|index| self.values.get(index))
            .cloned();
        ParamValue::new(self.key.clone(), value)
    }

    /// Every value wrapped as a present [`ParamValue`].
    pub fn iter(&self) -> impl Iterator<Item = ParamValue> + '_ {
        self.values
            .iter()
            .map(|value| ParamValue::present(self.key.clone(), value.clone()))
    }

    /// Reduces all values to one with `reducer`.
    ///
    /// The reducer sees the full ordered list, which is empty for a missing
    /// key, and decides itself whether that yields a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_query_core::group::ParamGroup;
    ///
    /// let group = ParamGroup::new("k", vec!["a".to_string(), "b".to_string()]);
    /// let last = group.combine(|values| values.last().cloned());
    /// assert_eq!(last.raw(), Some("b"));
    /// ```
    pub fn combine<F>(&self, reducer: F) -> ParamValue
    where
        F: FnOnce(&[String]) -> Option<String>,
    {
        ParamValue::new(self.key.clone(), reducer(&self.values))
    }

    /// Converts every value leniently, see [`ParamValue::get_or`].
    pub fn collect_or<T: FromParam + Clone>(&self, default: T) -> Vec<T> {
        self.iter().map(|value| value.get_or(default.clone())).collect()
    }
}
