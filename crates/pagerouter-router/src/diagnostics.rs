//! Non-fatal router warnings.
//!
//! Warnings annotate an operation that still completes. Each one is logged
//! with `tracing::warn!` and handed to every listener registered through
//! [`Router::on_warning`](crate::Router::on_warning).

use crate::registration::{Bucket, Registration};
use std::fmt;
use std::sync::Arc;

/// A condition worth reporting that does not stop the operation.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterWarning {
	/// Query parameters were dropped because the destination is a tab page.
	TabBarQueryIgnored {
		/// Destination route.
		route: String,
		/// Dropped parameter names.
		keys: Vec<String>,
	},
	/// No page is displayed, so no route information is available.
	CurrentPageUnavailable,
	/// The displayed page's path yields no route name.
	UnnamedPage {
		/// Page path reported by the runtime.
		route: String,
	},
}

impl fmt::Display for RouterWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TabBarQueryIgnored { route, keys } => write!(
				f,
				"query parameters [{}] ignored when switching to tab page {}",
				keys.join(", "),
				route
			),
			Self::CurrentPageUnavailable => {
				f.write_str("cannot determine route information: no current page")
			}
			Self::UnnamedPage { route } => {
				write!(f, "cannot determine route information: page {} has no route name", route)
			}
		}
	}
}

pub(crate) type WarningListener = Arc<dyn Fn(&RouterWarning) + Send + Sync>;

/// Fans warnings out to the log and to registered listeners.
#[derive(Clone, Default)]
pub(crate) struct Diagnostics {
	listeners: Bucket<WarningListener>,
}

impl Diagnostics {
	pub(crate) fn subscribe(&self, listener: WarningListener) -> Registration {
		self.listeners.push(listener)
	}

	pub(crate) fn emit(&self, warning: RouterWarning) {
		match &warning {
			RouterWarning::TabBarQueryIgnored { route, keys } => {
				tracing::warn!(route = %route, keys = ?keys, "{}", warning);
			}
			RouterWarning::CurrentPageUnavailable => tracing::warn!("{}", warning),
			RouterWarning::UnnamedPage { route } => tracing::warn!(route = %route, "{}", warning),
		}
		for listener in self.listeners.snapshot() {
			listener(&warning);
		}
	}
}

impl fmt::Debug for Diagnostics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Diagnostics")
			.field("listeners", &self.listeners.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use parking_lot::Mutex;
	use rstest::rstest;

	#[rstest]
	fn test_display() {
		let warning = RouterWarning::TabBarQueryIgnored {
			route: "home".to_string(),
			keys: vec!["a".to_string(), "b".to_string()],
		};
		assert_eq!(
			warning.to_string(),
			"query parameters [a, b] ignored when switching to tab page home"
		);
	}

	#[rstest]
	fn test_emit_reaches_every_listener_until_revoked() {
		let diagnostics = Diagnostics::default();
		let seen = Arc::new(Mutex::new(Vec::new()));

		let sink = seen.clone();
		let first = diagnostics.subscribe(Arc::new(move |w: &RouterWarning| {
			sink.lock().push(("first", w.clone()))
		}));
		let sink = seen.clone();
		diagnostics.subscribe(Arc::new(move |w: &RouterWarning| {
			sink.lock().push(("second", w.clone()))
		}));

		diagnostics.emit(RouterWarning::CurrentPageUnavailable);
		first.revoke();
		diagnostics.emit(RouterWarning::CurrentPageUnavailable);

		let labels: Vec<&str> = seen.lock().iter().map(|(label, _)| *label).collect();
		assert_eq!(labels, vec!["first", "second", "second"]);
	}
}
