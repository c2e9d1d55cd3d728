//! Picking one value out of the values of a key.
//!
//! A key can hold several values. The first one is used by default, but a
//! specific position or a join of all of them can be requested instead, and
//! these cannot be mixed.

use simple_query_core::error::Error::IndexWithJoin;
use simple_query_core::error::Result;
use simple_query_core::{ParamValue, Query};

/// How to reduce the values of a key to the one that gets printed.
#[derive(PartialEq, Clone, Debug)]
pub enum Selection {
    /// The first value, the usual case
    First,
    /// The value at a position, absent when out of range
    Index(isize),
    /// All values joined, with the separator if one was given
    Joined(Option<String>),
}

/// Trait for objects that can determine their value selection.
pub trait Provider {
    /// Validates that an index and a join aren't both requested and returns
    /// the appropriate [`Selection`].
    ///
    /// # Errors
    ///
    /// Returns an error if both are requested.
    fn get_selection(&self) -> Result<Selection>;
}

/// Determines the selection from the optional index and join arguments.
///
/// # Errors
///
/// Returns [`IndexWithJoin`] if both an index and a join are provided.
///
/// # Examples
///
/// ```rust
/// use simple_query_cli::selection::{determine, Selection};
///
/// assert_eq!(determine(None, None).unwrap(), Selection::First);
/// assert_eq!(determine(Some(-1), None).unwrap(), Selection::Index(-1));
/// assert!(determine(Some(0), Some(&None)).is_err());
/// ```
pub fn determine(index: Option<isize>, join: Option<&Option<String>>) -> Result<Selection> {
    match (index, join) {
        (Some(_), Some(_)) => Err(IndexWithJoin),
        (Some(index), None) => Ok(Selection::Index(index)),
        (None, Some(separator)) => Ok(Selection::Joined(separator.clone())),
        (None, None) => Ok(Selection::First),
    }
}

/// Looks up `key` according to `selection`.
///
/// Joining a missing key gives a missing value, not an empty string.
pub fn select(
    query: &Query,
    key: &str,
    selection: &Selection,
    default_join_separator: &str,
) -> ParamValue {
    match selection {
        Selection::First => query.get(key),
        Selection::Index(index) => query.get_index(key, *index),
        Selection::Joined(separator) => {
            let separator = separator.as_deref().unwrap_or(default_join_separator);
            query.get_combined(key, |values| {
                if values.is_empty() {
                    None
                } else {
                    Some(values.join(separator))
                }
            })
        }
    }
}
