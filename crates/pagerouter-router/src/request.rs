//! Navigation requests.

use crate::error::RouterError;
use pagerouter_core::{CloseType, Query, Value};
use std::fmt;

/// Called with the handler result once the page-stack operation succeeded.
pub type SuccessCallback = Box<dyn FnOnce(Option<Value>) + Send>;

/// Called with the error of a failed navigation.
pub type FailCallback = Box<dyn FnOnce(RouterError) + Send>;

/// A request to navigate to a named route.
///
/// When a fail callback is attached, errors are delivered to it and
/// [`Router::push`](crate::Router::push) returns `Ok(())`; without one the
/// error is returned. Cancellation by a guard is never an error.
///
/// # Examples
///
/// ```
/// use pagerouter_core::{CloseType, Query};
/// use pagerouter_router::PushRequest;
///
/// let request = PushRequest::new("detail")
///     .query(Query::new().with("id", 7))
///     .close("current")
///     .on_fail(|err| eprintln!("navigation failed: {err}"));
///
/// assert_eq!(request.path, "detail");
/// assert_eq!(request.close, CloseType::Current);
///
/// let shorthand: PushRequest = "detail".into();
/// assert!(shorthand.query.is_none());
/// ```
#[derive(Default)]
pub struct PushRequest {
	/// Target route name. Empty means no target was given.
	pub path: String,
	/// Query parameters; `None` navigates without any.
	pub query: Option<Query>,
	/// Page-stack operation to use for non-tab pages.
	pub close: CloseType,
	pub(crate) success: Option<SuccessCallback>,
	pub(crate) fail: Option<FailCallback>,
}

impl PushRequest {
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Default::default()
		}
	}

	pub fn query(mut self, query: Query) -> Self {
		self.query = Some(query);
		self
	}

	pub fn close(mut self, close: impl Into<CloseType>) -> Self {
		self.close = close.into();
		self
	}

	pub fn on_success<F>(mut self, f: F) -> Self
	where
		F: FnOnce(Option<Value>) + Send + 'static,
	{
		self.success = Some(Box::new(f));
		self
	}

	pub fn on_fail<F>(mut self, f: F) -> Self
	where
		F: FnOnce(RouterError) + Send + 'static,
	{
		self.fail = Some(Box::new(f));
		self
	}

	/// Replaces this request's callbacks with the ones set in `callbacks`.
	pub(crate) fn apply(&mut self, callbacks: NavigationCallbacks) {
		if let Some(success) = callbacks.success {
			self.success = Some(success);
		}
		if let Some(fail) = callbacks.fail {
			self.fail = Some(fail);
		}
	}
}

impl From<&str> for PushRequest {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for PushRequest {
	fn from(path: String) -> Self {
		Self::new(path)
	}
}

impl fmt::Debug for PushRequest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PushRequest")
			.field("path", &self.path)
			.field("query", &self.query)
			.field("close", &self.close)
			.field("has_success", &self.success.is_some())
			.field("has_fail", &self.fail.is_some())
			.finish()
	}
}

/// Callbacks passed to [`Router::push_with`](crate::Router::push_with).
///
/// Each callback set here takes the place of the request's own.
#[derive(Default)]
pub struct NavigationCallbacks {
	pub(crate) success: Option<SuccessCallback>,
	pub(crate) fail: Option<FailCallback>,
}

impl NavigationCallbacks {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn on_success<F>(mut self, f: F) -> Self
	where
		F: FnOnce(Option<Value>) + Send + 'static,
	{
		self.success = Some(Box::new(f));
		self
	}

	pub fn on_fail<F>(mut self, f: F) -> Self
	where
		F: FnOnce(RouterError) + Send + 'static,
	{
		self.fail = Some(Box::new(f));
		self
	}
}

impl fmt::Debug for NavigationCallbacks {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationCallbacks")
			.field("has_success", &self.success.is_some())
			.field("has_fail", &self.fail.is_some())
			.finish()
	}
}
