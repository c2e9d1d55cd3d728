//! Simple Query CLI Library
//!
//! This crate provides `sq`, a small command-line front end over
//! `simple-query-core`. It decodes a query string or URI and either dumps every
//! parameter or prints one parameter read as a given type.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`selection`]: Picking a value by position or joining all of them
//! - [`lookup`]: Typed rendering of the selected value and YAML dumps
//!
//! # Examples
//!
//! ```bash
//! # Dump every parameter as YAML
//! sq 'k1=v1_1&k1=v1_2&k2=v2&k3'
//!
//! # Read a flag; a bare `?verbose` counts as set
//! sq '/search?verbose' verbose --as bool
//!
//! # Second value of a repeated key, as an integer with a fallback
//! sq 'n=1&n=2' n --as int --index 1 --default 0
//!
//! # Read a timestamp, failing loudly if it is malformed
//! sq 'since=1445486493' since --as time --strict
//! ```

pub mod cli_args;
pub mod lookup;
pub mod selection;
