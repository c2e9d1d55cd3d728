//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure of `sq` using the
//! `clap` crate.

use clap::Parser;
use simple_query_core::error::Result;

use crate::lookup::ValueType;
use crate::selection::{determine, Provider, Selection};

/// Command-line arguments for the `sq` tool.
///
/// Without a key the decoded query is dumped as YAML. With a key one value is
/// looked up and printed as the requested type.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use simple_query_cli::cli_args::Args;
///
/// let args = Args::parse_from(["sq", "limit=20", "limit", "--as", "int"]);
/// assert_eq!(args.key.as_deref(), Some("limit"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.simple-query/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// The query string, or a full URI containing `?`.
    pub query: String,

    /// The parameter to look up. If omitted, all parameters are dumped.
    pub key: Option<String>,

    /// The type to read the value as.
    #[arg(long = "as", short = 'a', value_enum, default_value_t = ValueType::String)]
    pub value_type: ValueType,

    /// Read the value at this position instead of the first one.
    ///
    /// Negative or out of range positions read as a missing value.
    #[arg(long, short = 'i', allow_negative_numbers = true)]
    pub index: Option<isize>,

    /// Join every value of the key into one before reading it.
    ///
    /// Takes an optional separator, falling back to the settings file and then `,`.
    #[arg(long, short = 'j', num_args = 0..=1)]
    pub join: Option<Option<String>>,

    /// Value to use when the parameter is missing, read as the same type.
    #[arg(long, short = 'd')]
    pub default: Option<String>,

    /// Fail on malformed values instead of falling back to the default.
    #[arg(long, short = 's', action)]
    pub strict: bool,

    /// Separator used to split a value with `--as list`.
    #[arg(long)]
    pub separator: Option<String>,

    /// Only dump keys starting with this prefix.
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,
}

impl Provider for Args {
    /// Determines how the value is picked out of the key's values.
    ///
    /// # Errors
    ///
    /// Returns an error if both an index and a join are requested.
    fn get_selection(&self) -> Result<Selection> {
        determine(self.index, self.join.as_ref())
    }
}
