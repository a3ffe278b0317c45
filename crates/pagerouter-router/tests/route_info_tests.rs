//! Integration tests for reading route information on the landed page.

use pagerouter_core::{Query, RouteMeta, json};
use pagerouter_router::{
	MemoryBackend, PageInstance, PushRequest, RouteInfo, Router, RouterWarning,
};
use parking_lot::Mutex;
use rstest::*;
use std::sync::Arc;

#[fixture]
fn router() -> Router {
	let router = Router::new(MemoryBackend::new());
	router.define_route("detail", RouteMeta::new("detail", "pages/detail/index"));
	router.define_route("home", RouteMeta::new("home", "pages/home/index").tab_bar(true));
	router.register("detail", |payload| async move {
		Ok(json!({ "loaded": payload.query.get("id").cloned() }))
	});
	router
}

#[rstest]
#[tokio::test]
async fn test_landed_page_sees_navigation_payload(router: Router) {
	router
		.push(
			PushRequest::new("detail").query(
				Query::new()
					.with("id", 7)
					.with("tags", json!(["a", "b"]))
					.with("note", "x y"),
			),
		)
		.await
		.unwrap();

	let info = router.current_route();

	assert_eq!(info.name, "detail");
	assert_eq!(info.meta.map(|meta| meta.url).as_deref(), Some("pages/detail/index"));
	// Typed values from the cache win over the string options of the page URL.
	assert_eq!(info.query.get("id"), Some(&json!(7)));
	assert_eq!(info.query.get("tags"), Some(&json!(["a", "b"])));
	assert_eq!(info.query.get("note"), Some(&json!("x y")));
	assert_eq!(info.handler_result, Some(json!({ "loaded": 7 })));
}

#[rstest]
#[tokio::test]
async fn test_cache_reads_are_repeatable(router: Router) {
	router
		.push(PushRequest::new("detail").query(Query::new().with("id", 1)))
		.await
		.unwrap();

	let first = router.current_route();
	let second = router.current_route();
	assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn test_next_navigation_overwrites_payload(router: Router) {
	for id in [1, 2] {
		router
			.push(PushRequest::new("detail").query(Query::new().with("id", id)))
			.await
			.unwrap();
	}

	let info = router.current_route();
	assert_eq!(info.query.get("id"), Some(&json!(2)));
	assert_eq!(info.handler_result, Some(json!({ "loaded": 2 })));
}

#[rstest]
#[tokio::test]
async fn test_tab_page_reads_query_from_cache(router: Router) {
	router
		.push(PushRequest::new("home").query(Query::new().with("from", "banner")))
		.await
		.unwrap();

	let info = router.current_route();
	assert_eq!(info.name, "home");
	assert_eq!(info.query, Query::new().with("from", "banner"));
	assert!(info.handler_result.is_none());
}

#[rstest]
fn test_page_opened_outside_router_has_string_options() {
	let backend = MemoryBackend::new()
		.with_current_page(PageInstance::new("pages/detail/index").with_option("id", "7"));
	let router = Router::new(backend);
	router.define_route("detail", RouteMeta::new("detail", "pages/detail/index"));

	let info = router.current_route();
	assert_eq!(info.name, "detail");
	assert_eq!(info.query.get("id"), Some(&json!("7")));
	assert!(info.handler_result.is_none());
}

#[rstest]
fn test_no_current_page(router: Router) {
	let warnings = Arc::new(Mutex::new(Vec::new()));
	let sink = warnings.clone();
	router.on_warning(move |warning| sink.lock().push(warning.clone()));

	assert_eq!(router.current_route(), RouteInfo::default());
	assert_eq!(*warnings.lock(), vec![RouterWarning::CurrentPageUnavailable]);
}
