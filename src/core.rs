//! Shared route vocabulary.
//!
//! Route metadata, guard locations, navigation queries and URL construction,
//! close modes and naming strategies.
//!
//! # Examples
//!
//! ```rust
//! use pagerouter::core::{Query, build_url_with_query};
//!
//! let url = build_url_with_query("pages/detail/index", &Query::new().with("id", 1));
//! assert_eq!(url, "/pages/detail/index?id=1");
//! ```

pub use pagerouter_core::*;
