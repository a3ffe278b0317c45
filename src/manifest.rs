//! Page manifest model and route-name generation.
//!
//! # Examples
//!
//! ```rust
//! use pagerouter::core::RouteNameStrategy;
//! use pagerouter::manifest::{Manifest, collect_route_names};
//!
//! let manifest = Manifest::from_json_str(r#"{ "pages": [{ "path": "pages/cart/index" }] }"#).unwrap();
//! let names = collect_route_names(&manifest, &RouteNameStrategy::Default);
//! assert!(names.contains("cart"));
//! ```

pub use pagerouter_manifest::*;
