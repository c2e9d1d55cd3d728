//! Simple Query Core Library
//!
//! Typed access to multi-valued, string-keyed parameters such as a decoded URL
//! query string. It keeps three situations apart that ad-hoc lookups tend to
//! blur: a key that is missing, a key that is present but empty, and a key
//! with a well formed value.
//!
//! # Key Features
//!
//! - **Decoding**: Build a [`Query`](query::Query) from a query string or URI
//! - **Typed Accessors**: Booleans, integers, floats, timestamps and lists
//! - **Strict or Lenient**: `parse_*` surfaces failures, `*_or` falls back to a default
//! - **Multi-value Reduction**: Fold every value of a key with a custom reducer
//! - **Timestamp Heuristic**: Epoch seconds, epoch milliseconds or RFC 3339
//!
//! # Examples
//!
//! ```
//! use simple_query_core::query::Query;
//!
//! let query = Query::from_uri("/posts?since=1445486493&tag=rust&tag=web&all");
//!
//! let since = query.get("since").parse_time()?;
//! assert_eq!(since.to_rfc3339(), "2015-10-22T04:01:33+00:00");
//!
//! let tags = query.get_combined("tag", |values| Some(values.join(",")));
//! assert_eq!(tags.list(), vec!["rust", "web"]);
//!
//! assert!(query.get("all").bool_or(false));
//! # Ok::<(), simple_query_core::error::Error>(())
//! ```

pub mod coercion;
pub mod config;
pub mod error;
pub mod group;
pub mod query;
pub mod value;

pub use group::ParamGroup;
pub use query::Query;
pub use value::{FromParam, ParamValue};
