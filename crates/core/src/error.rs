use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The numeric family a failed number coercion was aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Uint,
    Float,
}

impl Display for NumberKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberKind::Int => formatter.write_str("integer"),
            NumberKind::Uint => formatter.write_str("unsigned integer"),
            NumberKind::Float => formatter.write_str("float"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("The parameter value was not specified: `{}`", .key)]
    UnspecifiedValue { key: String },

    #[error("Unknown boolean value: \"{}\"", _0)]
    UnknownValue(String),

    #[error("Invalid {} value: \"{}\"", .kind, .value)]
    InvalidNumber { value: String, kind: NumberKind },

    #[error("Error parsing time \"{}\": {}", .value, .original)]
    InvalidTimestamp {
        value: String,
        original: chrono::ParseError,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error serializing parameters: {}", .0)]
    Serialize(serde_yaml::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Default value \"{}\" is not a valid {}", .value, .target)]
    InvalidDefault { value: String, target: String },

    #[error("Joining all values with an index specified is invalid.")]
    IndexWithJoin,
}

impl Error {
    pub fn unspecified(key: &str) -> Self {
        Self::UnspecifiedValue {
            key: key.to_string(),
        }
    }

    pub fn invalid_number(value: &str, kind: NumberKind) -> Self {
        Self::InvalidNumber {
            value: value.to_string(),
            kind,
        }
    }

    pub fn invalid_timestamp(value: &str, original: chrono::ParseError) -> Self {
        Self::InvalidTimestamp {
            value: value.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
