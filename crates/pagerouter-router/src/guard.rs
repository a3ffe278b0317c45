//! Before and after navigation guards.
//!
//! Before guards decide whether a navigation continues. They run strictly in
//! registration order and the first decision other than
//! [`NavigationDecision::Allow`] stops the chain. After guards are
//! notifications: they run in order once the handler has finished and their
//! results are not inspected, but an error from one of them fails the
//! navigation.

use crate::error::BoxError;
use futures::future::BoxFuture;
use pagerouter_core::{Query, RouteLocation, RouteLocationRaw};
use std::sync::Arc;

/// Future returned by a before guard.
pub type GuardResult = BoxFuture<'static, Result<NavigationDecision, BoxError>>;

/// Stored before guard.
pub type BeforeGuard = Arc<dyn Fn(RouteLocation, RouteLocation) -> GuardResult + Send + Sync>;

/// Stored after guard.
pub type AfterGuard =
	Arc<dyn Fn(RouteLocation, RouteLocation) -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// What a before guard wants to happen to a navigation.
///
/// # Examples
///
/// ```
/// use pagerouter_core::Query;
/// use pagerouter_router::NavigationDecision;
///
/// let to_login = NavigationDecision::redirect_with_query("login", Query::new().with("next", "cart"));
/// assert!(matches!(to_login, NavigationDecision::Redirect(_)));
/// assert_eq!(NavigationDecision::from(false), NavigationDecision::Deny);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavigationDecision {
	/// Hand the navigation to the next guard.
	#[default]
	Allow,
	/// Cancel the navigation silently.
	Deny,
	/// Restart the navigation against another route.
	Redirect(RouteLocationRaw),
}

impl NavigationDecision {
	/// Redirects to `name`, keeping the query of the original request.
	pub fn redirect(name: impl Into<String>) -> Self {
		Self::Redirect(RouteLocationRaw::Name(name.into()))
	}

	/// Redirects to `name` with a replacement query.
	pub fn redirect_with_query(name: impl Into<String>, query: Query) -> Self {
		Self::Redirect(RouteLocationRaw::Location {
			path: name.into(),
			query: Some(query),
		})
	}
}

impl From<bool> for NavigationDecision {
	fn from(allow: bool) -> Self {
		if allow { Self::Allow } else { Self::Deny }
	}
}

impl From<()> for NavigationDecision {
	fn from(_: ()) -> Self {
		Self::Allow
	}
}

impl From<RouteLocationRaw> for NavigationDecision {
	fn from(target: RouteLocationRaw) -> Self {
		Self::Redirect(target)
	}
}

/// Combined outcome of a before-guard run.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardVerdict {
	/// Every guard allowed the navigation.
	Continue,
	/// A guard denied the navigation.
	Cancel,
	/// A guard redirected the navigation.
	Redirect(RouteLocationRaw),
}

impl GuardVerdict {
	pub fn should_continue(&self) -> bool {
		matches!(self, Self::Continue)
	}
}

/// Runs `guards` in order against the proposed navigation.
///
/// Stops at the first guard that denies, redirects or fails.
pub async fn run_before_guards(
	guards: &[BeforeGuard],
	to: &RouteLocation,
	from: &RouteLocation,
) -> Result<GuardVerdict, BoxError> {
	for (index, guard) in guards.iter().enumerate() {
		match guard(to.clone(), from.clone()).await? {
			NavigationDecision::Allow => continue,
			NavigationDecision::Deny => {
				tracing::debug!(guard = index, to = %to.name, "before guard denied navigation");
				return Ok(GuardVerdict::Cancel);
			}
			NavigationDecision::Redirect(target) => {
				tracing::debug!(
					guard = index,
					to = %to.name,
					redirect = %target.name(),
					"before guard redirected navigation"
				);
				return Ok(GuardVerdict::Redirect(target));
			}
		}
	}
	Ok(GuardVerdict::Continue)
}

/// Awaits every guard in `guards`, stopping at the first error.
pub async fn run_after_guards(
	guards: &[AfterGuard],
	to: &RouteLocation,
	from: &RouteLocation,
) -> Result<(), BoxError> {
	for guard in guards {
		guard(to.clone(), from.clone()).await?;
	}
	Ok(())
}
