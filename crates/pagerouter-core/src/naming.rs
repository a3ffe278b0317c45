//! Route naming strategies.
//!
//! A naming strategy turns a page path into the symbolic route name used to
//! navigate to it. The same strategy must be used when registering pages and
//! when mapping the currently displayed page back to its route, otherwise the
//! two sides will not agree.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Function signature of a caller-supplied naming strategy.
pub type NameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route naming strategy: {0} (expected `default` or `package_page`)")]
pub struct UnknownStrategyError(pub String);

/// Maps a page path to a route name.
///
/// # Examples
///
/// ```
/// use pagerouter_core::RouteNameStrategy;
///
/// let default = RouteNameStrategy::Default;
/// assert_eq!(default.resolve("pages/user/index").as_deref(), Some("user"));
/// assert_eq!(default.resolve("pages/user/detail/index").as_deref(), Some("user_detail"));
///
/// let package = RouteNameStrategy::PackagePage;
/// assert_eq!(package.resolve("/pages/user/index.vue").as_deref(), Some("pages_user"));
/// ```
#[derive(Clone, Default)]
pub enum RouteNameStrategy {
	/// Joins the interior segments of the path with `_`, dropping the first
	/// and the last segment.
	#[default]
	Default,
	/// Drops a leading slash and a trailing extension, removes a final
	/// `index` segment and joins what is left with `_`.
	PackagePage,
	/// Caller-supplied pure function.
	Custom(NameFn),
}

impl RouteNameStrategy {
	/// Wraps a function as a naming strategy.
	pub fn custom<F>(f: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		Self::Custom(Arc::new(f))
	}

	/// Computes the route name for `path`.
	///
	/// Returns `None` when the strategy yields an empty name; such pages are
	/// unnameable and stay out of the registry.
	pub fn resolve(&self, path: &str) -> Option<String> {
		let name = match self {
			Self::Default => interior_segments_name(path),
			Self::PackagePage => package_page_name(path),
			Self::Custom(f) => f(path),
		};
		(!name.is_empty()).then_some(name)
	}
}

impl fmt::Debug for RouteNameStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("Default"),
			Self::PackagePage => f.write_str("PackagePage"),
			Self::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

impl FromStr for RouteNameStrategy {
	type Err = UnknownStrategyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"default" => Ok(Self::Default),
			"package_page" => Ok(Self::PackagePage),
			other => Err(UnknownStrategyError(other.to_string())),
		}
	}
}

fn interior_segments_name(path: &str) -> String {
	let segments: Vec<&str> = path.split('/').collect();
	if segments.len() < 3 {
		return String::new();
	}
	segments[1..segments.len() - 1].join("_")
}

fn package_page_name(path: &str) -> String {
	let trimmed = strip_extension(path.trim_start_matches('/'));
	let mut segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
	if segments.last() == Some(&"index") {
		segments.pop();
	}
	segments.join("_")
}

/// Removes the extension of the last path segment, e.g. `index.vue` -> `index`.
fn strip_extension(path: &str) -> &str {
	let last_segment_start = path.rfind('/').map_or(0, |i| i + 1);
	match path[last_segment_start..].rfind('.') {
		Some(dot) if dot > 0 => &path[..last_segment_start + dot],
		_ => path,
	}
}
