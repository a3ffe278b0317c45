//! Router handle and registration API.

use crate::backend::NavigationBackend;
use crate::cache::{PageCache, PageCacheEntry};
use crate::diagnostics::{Diagnostics, RouterWarning};
use crate::error::BoxError;
use crate::guard::{self, AfterGuard, BeforeGuard, GuardVerdict, NavigationDecision};
use crate::handler::{HandlerFn, HandlerOutcome, RoutePayload};
use crate::registration::{Bucket, Registration};
use crate::registry::RouteRegistry;
use crate::settings::RouterSettings;
use futures::FutureExt;
use indexmap::IndexMap;
use pagerouter_core::{RouteLocation, RouteMeta, RouteNameStrategy};
use pagerouter_manifest::Manifest;
use parking_lot::RwLock;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub(crate) struct RouterInner {
	pub(crate) registry: RouteRegistry,
	pub(crate) handlers: Arc<RwLock<IndexMap<String, HandlerFn>>>,
	pub(crate) before_guards: Bucket<BeforeGuard>,
	pub(crate) after_guards: Bucket<AfterGuard>,
	pub(crate) cache: PageCache,
	pub(crate) backend: Arc<dyn NavigationBackend>,
	pub(crate) strategy: RouteNameStrategy,
	pub(crate) settings: RouterSettings,
	pub(crate) diagnostics: Diagnostics,
	pub(crate) in_flight: AtomicBool,
}

/// Named-route navigator.
///
/// Clones share the same registry, guards, handlers and page cache. Separate
/// routers built with [`Router::builder`] are fully independent.
#[derive(Clone)]
pub struct Router {
	pub(crate) inner: Arc<RouterInner>,
}

impl fmt::Debug for Router {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.inner.registry.len())
			.field("handlers", &self.inner.handlers.read().len())
			.field("before_guards", &self.inner.before_guards.len())
			.field("after_guards", &self.inner.after_guards.len())
			.field("strategy", &self.inner.strategy)
			.field("settings", &self.inner.settings)
			.finish()
	}
}

impl Router {
	/// Creates a router with default settings and no routes.
	pub fn new<B>(backend: B) -> Self
	where
		B: NavigationBackend + 'static,
	{
		Self::builder(backend).build()
	}

	/// Starts building a router that drives `backend`.
	pub fn builder<B>(backend: B) -> RouterBuilder
	where
		B: NavigationBackend + 'static,
	{
		RouterBuilder {
			backend: Arc::new(backend),
			settings: RouterSettings::default(),
			manifest: None,
			strategy: None,
		}
	}

	/// Returns the settings the router was built with.
	pub fn settings(&self) -> &RouterSettings {
		&self.inner.settings
	}

	/// Returns the naming strategy shared by registration and current-page lookup.
	pub fn naming_strategy(&self) -> &RouteNameStrategy {
		&self.inner.strategy
	}

	/// Registers the handler for route `name`, replacing any previous one.
	///
	/// The handler's output converts into a [`HandlerOutcome`]: `false`
	/// aborts the navigation, anything else is cached as the handler result.
	/// Revoking the returned handle removes whatever handler `name` has at
	/// that point.
	pub fn register<F, Fut, O>(&self, name: impl Into<String>, handler: F) -> Registration
	where
		F: Fn(RoutePayload) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<O, BoxError>> + Send + 'static,
		O: Into<HandlerOutcome>,
	{
		let name = name.into();
		let handler: HandlerFn = Arc::new(move |payload| {
			let fut = handler(payload);
			async move { fut.await.map(Into::<HandlerOutcome>::into) }.boxed()
		});
		self.inner.handlers.write().insert(name.clone(), handler);
		tracing::debug!(route = %name, "handler registered");

		let handlers = Arc::clone(&self.inner.handlers);
		Registration::new(move || {
			handlers.write().shift_remove(&name);
		})
	}

	/// Removes the handler for `name`, returning whether one was registered.
	pub fn unregister(&self, name: &str) -> bool {
		self.inner.handlers.write().shift_remove(name).is_some()
	}

	/// Returns whether a handler is registered for `name`.
	pub fn has(&self, name: &str) -> bool {
		self.inner.handlers.read().contains_key(name)
	}

	pub(crate) fn handler(&self, name: &str) -> Option<HandlerFn> {
		self.inner.handlers.read().get(name).cloned()
	}

	/// Appends a before guard.
	///
	/// The guard's output converts into a [`NavigationDecision`], so a guard
	/// may return `Ok(true)`/`Ok(false)` as well as explicit decisions.
	pub fn before_each<F, Fut, D>(&self, guard: F) -> Registration
	where
		F: Fn(RouteLocation, RouteLocation) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<D, BoxError>> + Send + 'static,
		D: Into<NavigationDecision>,
	{
		let guard: BeforeGuard = Arc::new(move |to, from| {
			let fut = guard(to, from);
			async move { fut.await.map(Into::<NavigationDecision>::into) }.boxed()
		});
		self.inner.before_guards.push(guard)
	}

	/// Appends an after guard.
	pub fn after_each<F, Fut>(&self, guard: F) -> Registration
	where
		F: Fn(RouteLocation, RouteLocation) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
	{
		let guard: AfterGuard = Arc::new(move |to, from| guard(to, from).boxed());
		self.inner.after_guards.push(guard)
	}

	/// Registers a listener for [`RouterWarning`]s.
	pub fn on_warning<F>(&self, listener: F) -> Registration
	where
		F: Fn(&RouterWarning) + Send + Sync + 'static,
	{
		self.inner.diagnostics.subscribe(Arc::new(listener))
	}

	/// Inserts or overwrites the metadata of route `name`.
	///
	/// Revoking the returned handle removes `name` from the registry.
	pub fn define_route(&self, name: impl Into<String>, meta: RouteMeta) -> Registration {
		self.inner.registry.define(name, meta)
	}

	pub fn route_meta(&self, name: &str) -> Option<RouteMeta> {
		self.inner.registry.get(name)
	}

	/// Returns a copy of every registered route.
	pub fn list_route_meta(&self) -> IndexMap<String, RouteMeta> {
		self.inner.registry.snapshot()
	}

	pub fn registry(&self) -> &RouteRegistry {
		&self.inner.registry
	}

	/// Maps a page path back to its route name with the router's strategy.
	pub fn resolve_name_by_url(&self, url: &str) -> Option<String> {
		self.inner.strategy.resolve(url.trim_start_matches('/'))
	}

	pub fn set_page_cache(&self, name: impl Into<String>, entry: PageCacheEntry) {
		self.inner.cache.set(name, entry)
	}

	pub fn page_cache(&self, name: &str) -> Option<PageCacheEntry> {
		self.inner.cache.get(name)
	}

	pub fn delete_page_cache(&self, name: &str) -> bool {
		self.inner.cache.delete(name)
	}

	/// Runs the before guards registered at call time against a navigation.
	pub async fn run_before_guards(
		&self,
		to: &RouteLocation,
		from: &RouteLocation,
	) -> Result<GuardVerdict, BoxError> {
		let guards = self.inner.before_guards.snapshot();
		guard::run_before_guards(&guards, to, from).await
	}

	/// Runs the after guards registered at call time.
	pub async fn run_after_guards(
		&self,
		to: &RouteLocation,
		from: &RouteLocation,
	) -> Result<(), BoxError> {
		let guards = self.inner.after_guards.snapshot();
		guard::run_after_guards(&guards, to, from).await
	}

	pub(crate) fn warn(&self, warning: RouterWarning) {
		self.inner.diagnostics.emit(warning);
	}
}

/// Builder for [`Router`].
///
/// # Examples
///
/// ```
/// use pagerouter_core::RouteNameStrategy;
/// use pagerouter_manifest::Manifest;
/// use pagerouter_router::{MemoryBackend, Router, RouterSettings};
///
/// let manifest = Manifest::from_json_str(r#"{ "pages": [{ "path": "pages/home/index" }] }"#).unwrap();
/// let router = Router::builder(MemoryBackend::new())
///     .settings(RouterSettings::default().with_max_redirects(3))
///     .manifest(manifest)
///     .naming_strategy(RouteNameStrategy::PackagePage)
///     .build();
///
/// assert!(router.route_meta("pages_home").is_some());
/// ```
pub struct RouterBuilder {
	backend: Arc<dyn NavigationBackend>,
	settings: RouterSettings,
	manifest: Option<Manifest>,
	strategy: Option<RouteNameStrategy>,
}

impl RouterBuilder {
	pub fn settings(mut self, settings: RouterSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Populates the registry from `manifest` when the router is built.
	pub fn manifest(mut self, manifest: Manifest) -> Self {
		self.manifest = Some(manifest);
		self
	}

	/// Overrides the naming strategy chosen in the settings.
	pub fn naming_strategy(mut self, strategy: RouteNameStrategy) -> Self {
		self.strategy = Some(strategy);
		self
	}

	pub fn build(self) -> Router {
		let strategy = self
			.strategy
			.unwrap_or_else(|| self.settings.naming_strategy.into());
		let registry = match &self.manifest {
			Some(manifest) => RouteRegistry::from_manifest(manifest, &strategy),
			None => RouteRegistry::new(),
		};
		tracing::debug!(
			routes = registry.len(),
			strategy = ?strategy,
			max_redirects = self.settings.max_redirects,
			"router built"
		);

		Router {
			inner: Arc::new(RouterInner {
				registry,
				handlers: Arc::new(RwLock::new(IndexMap::new())),
				before_guards: Bucket::default(),
				after_guards: Bucket::default(),
				cache: PageCache::new(),
				backend: self.backend,
				strategy,
				settings: self.settings,
				diagnostics: Diagnostics::default(),
				in_flight: AtomicBool::new(false),
			}),
		}
	}
}

impl fmt::Debug for RouterBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterBuilder")
			.field("settings", &self.settings)
			.field("has_manifest", &self.manifest.is_some())
			.field("strategy", &self.strategy)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::backend::MemoryBackend;
	use pagerouter_core::{Query, RouteLocationRaw, json};
	use rstest::*;

	#[fixture]
	fn router() -> Router {
		Router::new(MemoryBackend::new())
	}

	fn location(name: &str) -> RouteLocation {
		RouteLocation::resolved(
			RouteMeta::new(name, format!("pages/{}/index", name)),
			Query::new(),
		)
	}

	#[rstest]
	fn test_register_has_unregister(router: Router) {
		assert!(!router.has("cart"));
		router.register("cart", |_| async { Ok(()) });
		assert!(router.has("cart"));
		assert!(router.unregister("cart"));
		assert!(!router.unregister("cart"));
	}

	#[rstest]
	fn test_handler_revoke_removes_replacement(router: Router) {
		let first = router.register("cart", |_| async { Ok(json!(1)) });
		router.register("cart", |_| async { Ok(json!(2)) });
		first.revoke();
		assert!(!router.has("cart"));
	}

	#[rstest]
	fn test_define_route_and_list_snapshot(router: Router) {
		let handle = router.define_route("cart", RouteMeta::new("cart", "pages/cart/index"));
		let snapshot = router.list_route_meta();
		handle.revoke();

		assert!(router.route_meta("cart").is_none());
		assert!(snapshot.contains_key("cart"));
	}

	#[rstest]
	fn test_page_cache_accessors(router: Router) {
		router.set_page_cache("cart", PageCacheEntry::new(Query::new().with("a", 1), Some(json!(42))));
		assert_eq!(
			router.page_cache("cart").and_then(|entry| entry.handler_result),
			Some(json!(42))
		);
		assert!(router.delete_page_cache("cart"));
		assert!(router.page_cache("cart").is_none());
	}

	#[rstest]
	#[case(RouteNameStrategy::Default, "pages/user/detail/index", Some("user_detail"))]
	#[case(RouteNameStrategy::Default, "/pages/user/index", Some("user"))]
	#[case(RouteNameStrategy::PackagePage, "pages/user/index", Some("pages_user"))]
	#[case(RouteNameStrategy::Default, "index", None)]
	fn test_resolve_name_by_url(
		#[case] strategy: RouteNameStrategy,
		#[case] url: &str,
		#[case] expected: Option<&str>,
	) {
		let router = Router::builder(MemoryBackend::new())
			.naming_strategy(strategy)
			.build();
		assert_eq!(router.resolve_name_by_url(url).as_deref(), expected);
	}

	#[rstest]
	fn test_settings_strategy_used_without_override() {
		let router = Router::builder(MemoryBackend::new())
			.settings(RouterSettings::default().with_naming_strategy(
				crate::settings::NamingStrategyKind::PackagePage,
			))
			.build();
		assert_eq!(router.resolve_name_by_url("pages/home/index").as_deref(), Some("pages_home"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_run_before_guards_accepts_bool_results(router: Router) {
		router.before_each(|to, _from| async move { Ok(to.name != "admin") });

		let verdict = router
			.run_before_guards(&location("admin"), &RouteLocation::empty())
			.await
			.unwrap();
		assert_eq!(verdict, GuardVerdict::Cancel);

		let verdict = router
			.run_before_guards(&location("cart"), &RouteLocation::empty())
			.await
			.unwrap();
		assert_eq!(verdict, GuardVerdict::Continue);
	}

	#[rstest]
	#[tokio::test]
	async fn test_revoked_guard_no_longer_runs(router: Router) {
		let handle = router.before_each(|_to, _from| async { Ok(NavigationDecision::redirect("login")) });
		let verdict = router
			.run_before_guards(&location("cart"), &RouteLocation::empty())
			.await
			.unwrap();
		assert_eq!(verdict, GuardVerdict::Redirect(RouteLocationRaw::from("login")));

		handle.revoke();
		let verdict = router
			.run_before_guards(&location("cart"), &RouteLocation::empty())
			.await
			.unwrap();
		assert!(verdict.should_continue());
	}

	#[rstest]
	#[tokio::test]
	async fn test_run_after_guards(router: Router) {
		router.after_each(|_to, _from| async { Err::<(), BoxError>("after".into()) });
		let err = router
			.run_after_guards(&location("cart"), &RouteLocation::empty())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "after");
	}
}
