//! Route locations handed to and returned from navigation guards.

use crate::meta::RouteMeta;
use crate::query::Query;

/// Normalized view of a route passed to guards.
///
/// The `from` side of a navigation has an empty `name` and `path` when no
/// current page can be determined, e.g. on a cold start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteLocation {
	/// Route name.
	pub name: String,
	/// Registered metadata, if any.
	pub meta: Option<RouteMeta>,
	/// Query parameters of the navigation.
	pub query: Query,
	/// Underlying page path.
	pub path: String,
}

impl RouteLocation {
	/// Builds the location of a resolved route.
	pub fn resolved(meta: RouteMeta, query: Query) -> Self {
		Self {
			name: meta.name.clone(),
			path: meta.url.clone(),
			meta: Some(meta),
			query,
		}
	}

	/// The location used when no page is displayed.
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.name.is_empty() && self.path.is_empty()
	}
}

/// A redirect target produced by a guard.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteLocationRaw {
	/// Redirect by route name, keeping the original query.
	Name(String),
	/// Redirect to a route with its own query; `None` keeps the original query.
	Location {
		/// Target route name.
		path: String,
		/// Replacement query.
		query: Option<Query>,
	},
}

impl RouteLocationRaw {
	/// Returns the target route name.
	pub fn name(&self) -> &str {
		match self {
			Self::Name(name) => name,
			Self::Location { path, .. } => path,
		}
	}

	/// Returns the replacement query, if the redirect carries one.
	pub fn query(&self) -> Option<&Query> {
		match self {
			Self::Name(_) => None,
			Self::Location { query, .. } => query.as_ref(),
		}
	}
}

impl From<&str> for RouteLocationRaw {
	fn from(name: &str) -> Self {
		Self::Name(name.to_string())
	}
}

impl From<String> for RouteLocationRaw {
	fn from(name: String) -> Self {
		Self::Name(name)
	}
}
