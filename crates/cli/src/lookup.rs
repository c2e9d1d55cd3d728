//! Turning the parsed arguments into printable output.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;
use log::debug;
use simple_query_core::config::Settings;
use simple_query_core::error::{Error, Result};
use simple_query_core::{FromParam, ParamValue, Query};

use crate::cli_args::Args;
use crate::selection::{select, Provider};

/// The type a looked up value is read as.
#[derive(ValueEnum, PartialEq, Eq, Clone, Copy, Debug)]
pub enum ValueType {
    String,
    Bool,
    Int,
    Uint,
    Float,
    Time,
    List,
}

impl Display for ValueType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Uint => "uint",
            ValueType::Float => "float",
            ValueType::Time => "time",
            ValueType::List => "list",
        };
        formatter.write_str(name)
    }
}

/// Decodes the query argument, which may be a bare query string or a URI.
pub fn decode(raw: &str) -> Query {
    if raw.contains('?') {
        Query::from_uri(raw)
    } else {
        Query::from_query(raw)
    }
}

/// Produces everything `sq` prints for the given arguments.
///
/// # Errors
///
/// Returns an error if the arguments conflict, the default does not match the
/// requested type, or a strict lookup fails.
pub fn run(args: &Args, settings: &Settings) -> Result<String> {
    let query = decode(&args.query);

    let Some(key) = &args.key else {
        return dump(&query, args.prefix.as_deref());
    };

    let selection = args.get_selection()?;
    debug!("Looking up `{}` with {:?}", key, selection);
    let value = select(&query, key, &selection, settings.join_separator());

    let separator = args
        .separator
        .as_deref()
        .unwrap_or_else(|| settings.list_separator());

    render(
        &value,
        args.value_type,
        args.default.as_deref(),
        args.strict,
        separator,
    )
}

/// Renders one value as `value_type`.
///
/// In lenient mode every failure falls back to `default`, or to the type's
/// zero value. In strict mode only a missing value falls back, and only when
/// a default was given.
///
/// # Errors
///
/// Returns [`Error::InvalidDefault`] when `default` is not valid for the type,
/// and the coercion failure of a strict lookup.
pub fn render(
    value: &ParamValue,
    value_type: ValueType,
    default: Option<&str>,
    strict: bool,
    separator: &str,
) -> Result<String> {
    match value_type {
        ValueType::String => resolve::<String>(value, value_type, default, strict),
        ValueType::Bool => {
            resolve::<bool>(value, value_type, default, strict).map(|v| v.to_string())
        }
        ValueType::Int => {
            resolve::<i64>(value, value_type, default, strict).map(|v| v.to_string())
        }
        ValueType::Uint => {
            resolve::<u64>(value, value_type, default, strict).map(|v| v.to_string())
        }
        ValueType::Float => {
            resolve::<f64>(value, value_type, default, strict).map(|v| v.to_string())
        }
        ValueType::Time => resolve::<DateTime<Utc>>(value, value_type, default, strict)
            .map(|v| v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        ValueType::List => render_list(value, default, strict, separator),
    }
}

/// Dumps the query as YAML, optionally only the keys starting with `prefix`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn dump(query: &Query, prefix: Option<&str>) -> Result<String> {
    let query = match prefix {
        Some(prefix) => query.filter_keys(|key| key.starts_with(prefix)),
        None => query.clone(),
    };

    serde_yaml::to_string(&query).map_err(Error::Serialize)
}

fn resolve<T: FromParam + Default>(
    value: &ParamValue,
    value_type: ValueType,
    default: Option<&str>,
    strict: bool,
) -> Result<T> {
    let default = default
        .map(|raw| {
            T::from_param(raw).map_err(|_| Error::InvalidDefault {
                value: raw.to_string(),
                target: value_type.to_string(),
            })
        })
        .transpose()?;

    if !strict {
        return Ok(value.get_or(default.unwrap_or_default()));
    }

    match (value.parse::<T>(), default) {
        (Err(Error::UnspecifiedValue { .. }), Some(default)) => Ok(default),
        (result, _) => result,
    }
}

fn render_list(
    value: &ParamValue,
    default: Option<&str>,
    strict: bool,
    separator: &str,
) -> Result<String> {
    let items = match (value.is_present(), default) {
        (true, _) => value.list_with(separator),
        (false, Some(default)) => ParamValue::present(value.key(), default).list_with(separator),
        (false, None) if strict => return Err(Error::unspecified(value.key())),
        (false, None) => Vec::new(),
    };

    Ok(items.join("\n"))
}
