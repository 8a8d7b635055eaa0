//! A fast, zero-copy URL route-pattern compiler and matcher.
//!
//! A route template like `/users/{id}` is compiled once into a [`Pattern`]
//! and then matched against request paths on the dispatch hot path,
//! extracting path variables and an optional trailing wildcard capture:
//!
//! ```rust
//! let pattern = urlpat::Pattern::parse("/users/{id}/*");
//!
//! let map = pattern.find("/users/42/orders/7").unwrap();
//! assert_eq!(map.get("id"), Some("42"));
//! assert_eq!(map.tail(), Some("orders/7"));
//!
//! // "no match" is an ordinary result, not an error
//! assert!(pattern.find("/groups/42").is_none());
//! ```
//!
//! # Template grammar
//!
//! Segments are separated by `/`. `{name}` captures exactly one path
//! segment. A `*` must be the final token and captures everything remaining,
//! including embedded `/`; text following it is an ignored label.
//!
//! Compilation never fails: malformed templates degrade leniently rather
//! than producing errors (see [`Pattern::parse`]).
//!
//! This crate matches raw bytes only. Percent-decoding, query strings,
//! method matching, and the strategy for choosing among several patterns
//! that match the same path all belong to the caller.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod captures;
mod cursor;
mod pattern;

pub use captures::{MatchMap, MatchMapIter};
pub use cursor::Cursor;
pub use pattern::{Part, Pattern};

#[macro_use]
extern crate log;
