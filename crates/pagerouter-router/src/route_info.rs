//! What the displayed page was navigated with.

use crate::diagnostics::RouterWarning;
use crate::router::Router;
use pagerouter_core::{Query, RouteMeta, Value};

/// Route information of the page on top of the stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteInfo {
	/// Route name, empty when the page cannot be named.
	pub name: String,
	/// Registered metadata of the route.
	pub meta: Option<RouteMeta>,
	/// Page options overlaid with the cached navigation query.
	pub query: Query,
	/// Handler result cached by the navigation that opened the page.
	pub handler_result: Option<Value>,
}

impl Router {
	/// Describes the currently displayed page.
	///
	/// The page's own options arrive as strings, so cached query values
	/// replace options with the same key and keep their original types.
	/// Without a current page this reports
	/// [`RouterWarning::CurrentPageUnavailable`] and returns an empty record.
	/// A page whose path yields no route name reports
	/// [`RouterWarning::UnnamedPage`] and carries only the page options.
	pub fn current_route(&self) -> RouteInfo {
		let Some(page) = self
			.inner
			.backend
			.current_page()
			.filter(|page| !page.route.is_empty())
		else {
			self.warn(RouterWarning::CurrentPageUnavailable);
			return RouteInfo::default();
		};

		let mut query: Query = page
			.options
			.into_iter()
			.map(|(key, value)| (key, Value::String(value)))
			.collect();
		let Some(name) = self.resolve_name_by_url(&page.route) else {
			self.warn(RouterWarning::UnnamedPage { route: page.route });
			return RouteInfo {
				query,
				..RouteInfo::default()
			};
		};
		let meta = self.route_meta(&name);

		let handler_result = match self.page_cache(&name) {
			Some(entry) => {
				query.merge(&entry.query);
				entry.handler_result
			}
			None => None,
		};

		RouteInfo {
			name,
			meta,
			query,
			handler_result,
		}
	}
}
