//! Error types for navigation.

use thiserror::Error;

/// Error type produced by guards and handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a page-stack primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NavigateError {
	/// Message reported by the runtime.
	pub message: String,
}

impl NavigateError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

/// Error type for navigation attempts.
///
/// A guard denying a navigation is not an error: the attempt simply ends
/// without effect.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RouterError {
	/// The request carried no route name.
	#[error("route name must not be empty")]
	EmptyRouteName,

	/// No route is registered under the requested name.
	#[error("no route registered under name: {0}")]
	RouteNotFound(String),

	/// A before guard returned an error.
	#[error("before guard failed while navigating to {route}: {source}")]
	GuardFailed {
		/// Route being navigated to.
		route: String,
		/// Error raised by the guard.
		source: BoxError,
	},

	/// The route handler returned an error.
	#[error("handler for {route} failed: {source}")]
	HandlerFailed {
		/// Route whose handler failed.
		route: String,
		/// Error raised by the handler.
		source: BoxError,
	},

	/// An after guard returned an error. The handler has already run.
	#[error("after guard failed while navigating to {route}: {source}")]
	AfterGuardFailed {
		/// Route being navigated to.
		route: String,
		/// Error raised by the guard.
		source: BoxError,
	},

	/// The page-stack operation failed; the page cache entry was rolled back.
	#[error("navigation to {url} failed: {source}")]
	NavigationFailed {
		/// Route being navigated to.
		route: String,
		/// URL handed to the primitive.
		url: String,
		/// Failure reported by the runtime.
		source: NavigateError,
	},

	/// Guards kept redirecting past the configured limit.
	#[error("redirect limit of {limit} exceeded while navigating to {route}")]
	RedirectLoopDetected {
		/// Last redirect target.
		route: String,
		/// Configured limit.
		limit: usize,
	},

	/// Another navigation on the same router has not finished yet.
	#[error("navigation to {route} rejected: another navigation is in progress")]
	NavigationInProgress {
		/// Route of the rejected request.
		route: String,
	},
}

impl RouterError {
	/// Returns the route the failed navigation targeted, if known.
	pub fn route(&self) -> Option<&str> {
		match self {
			Self::EmptyRouteName => None,
			Self::RouteNotFound(route)
			| Self::GuardFailed { route, .. }
			| Self::HandlerFailed { route, .. }
			| Self::AfterGuardFailed { route, .. }
			| Self::NavigationFailed { route, .. }
			| Self::RedirectLoopDetected { route, .. }
			| Self::NavigationInProgress { route } => Some(route),
		}
	}
}
