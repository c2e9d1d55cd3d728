//! A single, possibly missing, parameter value and its typed accessors.
//!
//! Every accessor comes in two flavours:
//!
//! - `parse_*` is strict and returns the failure, including
//!   [`Error::UnspecifiedValue`] when the value is absent.
//! - `*_or` never fails and hands back the caller's default instead.
//!
//! The boolean accessors are the one exception to "default on failure", see
//! [`ParamValue::bool_or`].

use chrono::{DateTime, Utc};
use log::trace;

use crate::coercion;
use crate::config::DEFAULT_LIST_SEPARATOR;
use crate::error::{Error, Result};

/// Types a raw parameter string can be coerced into.
pub trait FromParam: Sized {
    /// Strictly converts a present raw value.
    ///
    /// # Errors
    ///
    /// Returns the coercion failure for malformed input.
    fn from_param(raw: &str) -> Result<Self>;

    /// What lenient accessors return when a present value fails to convert.
    fn fallback(_error: Error, default: Self) -> Self {
        default
    }
}

impl FromParam for String {
    fn from_param(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromParam for bool {
    fn from_param(raw: &str) -> Result<Self> {
        coercion::parse_bool(raw)
    }

    // A flag that is present with an unrecognized value (`?verbose`) counts as set.
    fn fallback(_error: Error, _default: Self) -> Self {
        true
    }
}

impl FromParam for i64 {
    fn from_param(raw: &str) -> Result<Self> {
        coercion::parse_int64(raw)
    }
}

impl FromParam for u64 {
    fn from_param(raw: &str) -> Result<Self> {
        coercion::parse_uint64(raw)
    }
}

impl FromParam for f64 {
    fn from_param(raw: &str) -> Result<Self> {
        coercion::parse_float64(raw)
    }
}

impl FromParam for DateTime<Utc> {
    fn from_param(raw: &str) -> Result<Self> {
        coercion::parse_time(raw)
    }
}

/// One value of a parameter, remembering whether it was there at all.
///
/// An absent value and a present empty string are different things: `?k=`
/// gives a present `""`, while a query without `k` gives an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValue {
    key: String,
    value: Option<String>,
}

impl ParamValue {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn present(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()))
    }

    pub fn absent(key: impl Into<String>) -> Self {
        Self::new(key, None)
    }

    /// The key this value was looked up under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw string, if present.
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn into_raw(self) -> Option<String> {
        self.value
    }

    /// True when the value exists, even if it is the empty string.
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Strictly converts the value into any [`FromParam`] type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] when the value is absent, otherwise
    /// whatever the type's coercion reports.
    pub fn parse<T: FromParam>(&self) -> Result<T> {
        let raw = self
            .value
            .as_deref()
            .ok_or_else(|| Error::unspecified(&self.key))?;
        T::from_param(raw)
    }

    /// Converts the value, falling back to `default` when it is absent and to
    /// [`FromParam::fallback`] when it does not convert.
    pub fn get_or<T: FromParam>(&self, default: T) -> T {
        match self.value.as_deref() {
            None => default,
            Some(raw) => T::from_param(raw).unwrap_or_else(|e| {
                trace!("Falling back for parameter `{}`: {}", self.key, e);
                T::fallback(e, default)
            }),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] when the value is absent.
    pub fn string(&self) -> Result<String> {
        self.parse()
    }

    pub fn string_or(&self, default: &str) -> String {
        self.value.clone().unwrap_or_else(|| default.to_string())
    }

    pub fn string_or_default(&self) -> String {
        self.string_or("")
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] when absent and
    /// [`Error::UnknownValue`] when the token is not a recognized boolean.
    pub fn parse_bool(&self) -> Result<bool> {
        self.parse()
    }

    /// Reads the value as a flag.
    ///
    /// Note the asymmetry: an absent value gives `default`, but a present value
    /// that is empty or unrecognized gives `true`. So `?verbose` turns the flag
    /// on while leaving it out keeps the caller's default.
    pub fn bool_or(&self, default: bool) -> bool {
        self.get_or(default)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] or [`Error::InvalidNumber`].
    pub fn parse_int64(&self) -> Result<i64> {
        self.parse()
    }

    pub fn int64_or(&self, default: i64) -> i64 {
        self.get_or(default)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] or [`Error::InvalidNumber`].
    pub fn parse_uint64(&self) -> Result<u64> {
        self.parse()
    }

    pub fn uint64_or(&self, default: u64) -> u64 {
        self.get_or(default)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] or [`Error::InvalidNumber`].
    pub fn parse_float64(&self) -> Result<f64> {
        self.parse()
    }

    pub fn float64_or(&self, default: f64) -> f64 {
        self.get_or(default)
    }

    /// # Errors
    ///
    /// Returns [`Error::UnspecifiedValue`] or [`Error::InvalidTimestamp`].
    pub fn parse_time(&self) -> Result<DateTime<Utc>> {
        self.parse()
    }

    pub fn time_or(&self, default: DateTime<Utc>) -> DateTime<Utc> {
        self.get_or(default)
    }

    /// Splits the value on commas. An absent value gives an empty list.
    pub fn list(&self) -> Vec<String> {
        self.list_with(DEFAULT_LIST_SEPARATOR)
    }

    /// Splits the value on `separator`.
    ///
    /// A present empty string gives `[""]`, an absent value gives `[]`.
    pub fn list_with(&self, separator: &str) -> Vec<String> {
        match self.value.as_deref() {
            Some(raw) => coercion::split_list(raw, separator),
            None => Vec::new(),
        }
    }
}
