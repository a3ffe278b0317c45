//! Route registry.

use crate::registration::Registration;
use indexmap::IndexMap;
use pagerouter_core::{RouteMeta, RouteNameStrategy};
use pagerouter_manifest::{Manifest, parse_routes};
use parking_lot::RwLock;
use std::sync::Arc;

/// Route name to metadata mapping shared by every clone of a router.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
	routes: Arc<RwLock<IndexMap<String, RouteMeta>>>,
}

impl RouteRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding `routes`.
	pub fn from_routes(routes: IndexMap<String, RouteMeta>) -> Self {
		Self {
			routes: Arc::new(RwLock::new(routes)),
		}
	}

	/// Creates a registry from every nameable page of `manifest`.
	pub fn from_manifest(manifest: &Manifest, strategy: &RouteNameStrategy) -> Self {
		let routes = parse_routes(manifest, strategy);
		tracing::debug!(count = routes.len(), "route registry populated from manifest");
		Self::from_routes(routes)
	}

	/// Inserts or overwrites the route `name`.
	///
	/// Revoking the returned handle removes `name` whatever it maps to at
	/// that point.
	pub fn define(&self, name: impl Into<String>, meta: RouteMeta) -> Registration {
		let name = name.into();
		self.routes.write().insert(name.clone(), meta);

		let routes = Arc::clone(&self.routes);
		Registration::new(move || {
			routes.write().shift_remove(&name);
		})
	}

	pub fn get(&self, name: &str) -> Option<RouteMeta> {
		self.routes.read().get(name).cloned()
	}

	/// Removes `name`, returning its metadata if it was registered.
	pub fn remove(&self, name: &str) -> Option<RouteMeta> {
		self.routes.write().shift_remove(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.routes.read().contains_key(name)
	}

	/// Returns a copy of every route; later changes do not show through it.
	pub fn snapshot(&self) -> IndexMap<String, RouteMeta> {
		self.routes.read().clone()
	}

	pub fn len(&self) -> usize {
		self.routes.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.read().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[fixture]
	fn registry() -> RouteRegistry {
		let registry = RouteRegistry::new();
		registry.define("home", RouteMeta::new("home", "pages/home/index").tab_bar(true));
		registry.define("detail", RouteMeta::new("detail", "pages/detail/index"));
		registry
	}

	#[rstest]
	fn test_define_and_get(registry: RouteRegistry) {
		assert_eq!(registry.len(), 2);
		assert!(registry.get("home").is_some_and(|meta| meta.is_tab_bar));
		assert!(registry.get("missing").is_none());
	}

	#[rstest]
	fn test_define_overwrites(registry: RouteRegistry) {
		registry.define("detail", RouteMeta::new("detail", "pages/detail/v2"));
		assert_eq!(registry.len(), 2);
		assert_eq!(registry.get("detail").map(|meta| meta.url).as_deref(), Some("pages/detail/v2"));
	}

	#[rstest]
	fn test_revoke_removes_name(registry: RouteRegistry) {
		let handle = registry.define("about", RouteMeta::new("about", "pages/about/index"));
		assert!(registry.contains("about"));
		handle.revoke();
		assert!(!registry.contains("about"));
	}

	#[rstest]
	fn test_revoke_removes_later_redefinition(registry: RouteRegistry) {
		let handle = registry.define("about", RouteMeta::new("about", "pages/about/index"));
		registry.define("about", RouteMeta::new("about", "pages/about/v2"));
		handle.revoke();
		assert!(!registry.contains("about"));
	}

	#[rstest]
	fn test_snapshot_is_isolated(registry: RouteRegistry) {
		let snapshot = registry.snapshot();
		registry.define("late", RouteMeta::new("late", "pages/late/index"));
		registry.remove("home");

		assert_eq!(snapshot.len(), 2);
		assert!(snapshot.contains_key("home"));
		assert!(!snapshot.contains_key("late"));
	}

	#[rstest]
	fn test_from_manifest() {
		let manifest = Manifest::from_json_str(
			r#"{
				"pages": [{ "path": "pages/home/index" }, { "path": "pages/user/detail/index" }],
				"tabBar": { "list": [{ "pagePath": "pages/home/index" }] }
			}"#,
		)
		.unwrap();
		let registry = RouteRegistry::from_manifest(&manifest, &RouteNameStrategy::Default);

		assert!(registry.get("home").is_some_and(|meta| meta.is_tab_bar));
		assert_eq!(
			registry.get("user_detail").map(|meta| meta.url).as_deref(),
			Some("pages/user/detail/index")
		);
	}
}
