//! Route handlers.

use crate::error::BoxError;
use futures::future::BoxFuture;
use pagerouter_core::{CloseType, Query, RouteMeta, Value};
use std::sync::Arc;

/// Input handed to a route handler.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePayload {
	/// Query of the navigation.
	pub query: Query,
	/// Normalized close mode of the request.
	pub close_type: CloseType,
	/// Metadata of the destination route.
	pub meta: RouteMeta,
}

/// Result of a route handler.
///
/// # Examples
///
/// ```
/// use pagerouter_router::HandlerOutcome;
/// use serde_json::json;
///
/// assert_eq!(HandlerOutcome::from(json!(false)), HandlerOutcome::Abort);
/// assert_eq!(HandlerOutcome::from(json!(42)), HandlerOutcome::Proceed(Some(json!(42))));
/// assert_eq!(HandlerOutcome::from(false), HandlerOutcome::Abort);
/// assert_eq!(HandlerOutcome::from(()), HandlerOutcome::Proceed(None));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
	/// End the navigation without caching or touching the page stack.
	Abort,
	/// Continue; the value is cached as the handler result.
	Proceed(Option<Value>),
}

impl HandlerOutcome {
	pub fn is_abort(&self) -> bool {
		matches!(self, Self::Abort)
	}

	/// Returns the value to cache, or `None` when the handler produced none.
	pub fn into_result(self) -> Option<Value> {
		match self {
			Self::Abort => None,
			Self::Proceed(value) => value,
		}
	}
}

impl Default for HandlerOutcome {
	fn default() -> Self {
		Self::Proceed(None)
	}
}

impl From<Value> for HandlerOutcome {
	fn from(value: Value) -> Self {
		match value {
			Value::Bool(false) => Self::Abort,
			other => Self::Proceed(Some(other)),
		}
	}
}

impl From<bool> for HandlerOutcome {
	fn from(value: bool) -> Self {
		Value::Bool(value).into()
	}
}

impl From<Option<Value>> for HandlerOutcome {
	fn from(value: Option<Value>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Self::Proceed(None),
		}
	}
}

impl From<()> for HandlerOutcome {
	fn from(_: ()) -> Self {
		Self::Proceed(None)
	}
}

/// Stored route handler.
pub type HandlerFn =
	Arc<dyn Fn(RoutePayload) -> BoxFuture<'static, Result<HandlerOutcome, BoxError>> + Send + Sync>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(false), HandlerOutcome::Abort)]
	#[case(json!(true), HandlerOutcome::Proceed(Some(json!(true))))]
	#[case(json!(0), HandlerOutcome::Proceed(Some(json!(0))))]
	#[case(json!(null), HandlerOutcome::Proceed(Some(json!(null))))]
	#[case(json!({"ok": false}), HandlerOutcome::Proceed(Some(json!({"ok": false}))))]
	fn test_outcome_from_value(#[case] value: Value, #[case] expected: HandlerOutcome) {
		assert_eq!(HandlerOutcome::from(value), expected);
	}

	#[rstest]
	#[case(false, HandlerOutcome::Abort)]
	#[case(true, HandlerOutcome::Proceed(Some(json!(true))))]
	fn test_outcome_from_bool(#[case] value: bool, #[case] expected: HandlerOutcome) {
		assert_eq!(HandlerOutcome::from(value), expected);
	}

	#[rstest]
	fn test_outcome_from_option() {
		assert_eq!(HandlerOutcome::from(None::<Value>), HandlerOutcome::Proceed(None));
		assert!(HandlerOutcome::from(Some(json!(false))).is_abort());
	}

	#[rstest]
	fn test_into_result() {
		assert_eq!(HandlerOutcome::Abort.into_result(), None);
		assert_eq!(
			HandlerOutcome::Proceed(Some(json!(42))).into_result(),
			Some(json!(42))
		);
		assert_eq!(HandlerOutcome::default().into_result(), None);
	}
}
