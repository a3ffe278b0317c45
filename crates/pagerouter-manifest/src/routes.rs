//! Registry population from a manifest.

use crate::manifest::Manifest;
use indexmap::IndexMap;
use pagerouter_core::{RouteMeta, RouteNameStrategy};

/// Builds route metadata for every nameable page of `manifest`.
///
/// Main-package pages come first, then sub-package pages, whose paths are
/// prefixed with the package root before naming. A page is a tab page when
/// its path is listed in the tab bar or its `type` is `tabBar`. Pages whose
/// computed name is empty are skipped; a later page with the same name
/// replaces an earlier one.
///
/// # Examples
///
/// ```
/// use pagerouter_core::RouteNameStrategy;
/// use pagerouter_manifest::{Manifest, parse_routes};
///
/// let manifest = Manifest::from_json_str(r#"{
///     "pages": [{ "path": "pages/home/index" }],
///     "tabBar": { "list": [{ "pagePath": "pages/home/index" }] }
/// }"#).unwrap();
///
/// let routes = parse_routes(&manifest, &RouteNameStrategy::Default);
/// assert!(routes["home"].is_tab_bar);
/// ```
pub fn parse_routes(manifest: &Manifest, strategy: &RouteNameStrategy) -> IndexMap<String, RouteMeta> {
	let tab_bar_paths = manifest.tab_bar_paths();
	let mut routes = IndexMap::new();

	for (path, page) in manifest.page_paths() {
		let Some(name) = strategy.resolve(&path) else {
			tracing::debug!(path = %path, "skipping unnameable page");
			continue;
		};

		let meta = RouteMeta {
			name: name.clone(),
			is_tab_bar: tab_bar_paths.contains(path.as_str()) || page.is_tab_bar_type(),
			page_type: page.page_type.clone(),
			extra: page.extra.clone(),
			url: path,
		};
		routes.insert(name, meta);
	}

	routes
}
