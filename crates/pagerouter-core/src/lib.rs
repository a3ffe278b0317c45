//! Shared vocabulary for pagerouter.
//!
//! This crate holds the types every other pagerouter crate speaks in:
//!
//! - [`RouteMeta`]: metadata registered for one route name
//! - [`RouteLocation`] / [`RouteLocationRaw`]: the views of a route handed to
//!   guards and returned from them
//! - [`Query`]: insertion-ordered navigation parameters
//! - [`CloseType`]: which page-stack operation a navigation performs
//! - [`RouteNameStrategy`]: how a page path maps to a route name
//!
//! It also builds the final page URL from a path and a [`Query`]
//! (see [`build_url_with_query`]).

pub mod close;
pub mod location;
pub mod meta;
pub mod naming;
pub mod query;

pub use close::CloseType;
pub use location::{RouteLocation, RouteLocationRaw};
pub use meta::RouteMeta;
pub use naming::{RouteNameStrategy, UnknownStrategyError};
pub use query::{Query, build_url_with_query, ensure_leading_slash};

/// Re-export so callers can build query values without a direct dependency.
pub use serde_json::{Value, json};
