//! Named-route navigation for page-stack application runtimes.
//!
//! A [`Router`] maps symbolic route names to page paths and runs every
//! navigation through the same pipeline:
//!
//! 1. resolve the route name against the [`RouteRegistry`]
//! 2. run the before guards, which may allow, deny or redirect
//! 3. invoke the route's handler, then the after guards
//! 4. write the [`PageCache`] entry for the destination
//! 5. ask the [`NavigationBackend`] to perform the page-stack operation,
//!    rolling the cache entry back if it fails
//!
//! The destination page reads what it was navigated with through
//! [`Router::current_route`].
//!
//! ## Example
//!
//! ```
//! use pagerouter_core::{Query, RouteMeta, json};
//! use pagerouter_router::{MemoryBackend, NavigationDecision, PushRequest, Router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), pagerouter_router::RouterError> {
//! let backend = Arc::new(MemoryBackend::new());
//! let router = Router::builder(backend.clone()).build();
//! router.define_route("detail", RouteMeta::new("detail", "pages/detail/index"));
//!
//! router.register("detail", |payload| async move {
//!     Ok(json!({ "loaded": payload.query.get("id").cloned() }))
//! });
//! router.before_each(|_to, _from| async move { Ok(NavigationDecision::Allow) });
//!
//! router
//!     .push(PushRequest::new("detail").query(Query::new().with("id", 7)))
//!     .await?;
//!
//! let info = router.current_route();
//! assert_eq!(info.name, "detail");
//! assert_eq!(info.query.get("id"), Some(&json!(7)));
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod cache;
pub mod diagnostics;
pub mod error;
pub mod guard;
pub mod handler;
mod navigation;
pub mod registration;
pub mod registry;
pub mod request;
pub mod route_info;
pub mod router;
pub mod settings;

pub use backend::{MemoryBackend, NavigationBackend, PageInstance, StackOperation};
pub use cache::{PageCache, PageCacheEntry};
pub use diagnostics::RouterWarning;
pub use error::{BoxError, NavigateError, RouterError};
pub use guard::{GuardResult, GuardVerdict, NavigationDecision};
pub use handler::{HandlerOutcome, RoutePayload};
pub use registration::Registration;
pub use registry::RouteRegistry;
pub use request::{NavigationCallbacks, PushRequest};
pub use route_info::RouteInfo;
pub use router::{Router, RouterBuilder};
pub use settings::{NamingStrategyKind, RouterSettings, SettingsError};
