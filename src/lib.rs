//! # pagerouter
//!
//! Named-route navigation for page-stack application runtimes.
//!
//! Pages are declared once in a manifest and addressed by symbolic route
//! names. Every navigation runs through ordered before guards (allow, deny or
//! redirect), a per-route handler and after guards, then caches the query
//! and handler result for the destination page before asking the runtime to
//! change the page stack.
//!
//! ## Crates
//!
//! - [`core`]: route metadata, locations, queries, close modes and naming
//!   strategies
//! - [`manifest`]: manifest model, registry population and route-name code
//!   generation
//! - [`router`]: the router, guard chains, page cache and navigation backends
//!
//! ## Quick Example
//!
//! ```rust
//! use pagerouter::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), RouterError> {
//! let manifest = Manifest::from_json_str(r#"{
//!     "pages": [{ "path": "pages/home/index" }, { "path": "pages/login/index" },
//!               { "path": "pages/order/detail/index" }],
//!     "tabBar": { "list": [{ "pagePath": "pages/home/index" }] }
//! }"#).expect("valid manifest");
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let router = Router::builder(backend.clone()).manifest(manifest).build();
//!
//! router.before_each(|to, _from| async move {
//!     Ok(if to.name == "order_detail" && to.query.get("token").is_none() {
//!         NavigationDecision::redirect("login")
//!     } else {
//!         NavigationDecision::Allow
//!     })
//! });
//! router.register("order_detail", |payload| async move {
//!     Ok(json!({ "order": payload.query.get("id").cloned() }))
//! });
//!
//! router
//!     .push(PushRequest::new("order_detail").query(Query::new().with("id", 5).with("token", "t")))
//!     .await?;
//!
//! let info = router.current_route();
//! assert_eq!(info.handler_result, Some(json!({ "order": 5 })));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod manifest;
pub mod router;

pub use pagerouter_core::{
	CloseType, Query, RouteLocation, RouteLocationRaw, RouteMeta, RouteNameStrategy,
};
pub use pagerouter_manifest::Manifest;
pub use pagerouter_router::{
	MemoryBackend, NavigationBackend, NavigationDecision, PushRequest, RouteInfo, Router,
	RouterError, RouterSettings,
};

/// Commonly used types.
pub mod prelude {
	pub use pagerouter_core::{
		CloseType, Query, RouteLocation, RouteLocationRaw, RouteMeta, RouteNameStrategy, Value, json,
	};
	pub use pagerouter_manifest::Manifest;
	pub use pagerouter_router::{
		BoxError, HandlerOutcome, MemoryBackend, NavigateError, NavigationBackend,
		NavigationCallbacks, NavigationDecision, PageCacheEntry, PageInstance, PushRequest,
		Registration, RouteInfo, RoutePayload, Router, RouterBuilder, RouterError, RouterSettings,
		RouterWarning,
	};
}
