//! Integration tests for route-name generation from manifest files.

use pagerouter_core::RouteNameStrategy;
use pagerouter_manifest::{CodegenError, ManifestError, write_route_names};
use rstest::*;
use std::fs;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
	"pages": [
		{ "path": "pages/home/index" },
		{ "path": "pages/order/list/index" }
	],
	"subPackages": [
		{ "root": "shop", "pages": [{ "path": "pages/cart/index" }] }
	]
}"#;

#[fixture]
fn workspace() -> TempDir {
	let dir = tempfile::tempdir().expect("Failed to create temp directory");
	fs::write(dir.path().join("pages.json"), MANIFEST).expect("Failed to write manifest");
	dir
}

#[rstest]
fn test_write_generates_file(workspace: TempDir) {
	let manifest = workspace.path().join("pages.json");
	let out = workspace.path().join("routes.rs");

	let written = write_route_names(&manifest, &out, &RouteNameStrategy::Default).unwrap();
	assert!(written);

	let source = fs::read_to_string(&out).unwrap();
	assert!(source.contains("RouteName::Home => \"home\","));
	assert!(source.contains("RouteName::OrderList => \"order_list\","));
	assert!(source.contains("RouteName::PagesCart => \"pages_cart\","));
}

#[rstest]
fn test_write_is_idempotent(workspace: TempDir) {
	let manifest = workspace.path().join("pages.json");
	let out = workspace.path().join("routes.rs");

	assert!(write_route_names(&manifest, &out, &RouteNameStrategy::Default).unwrap());
	assert!(!write_route_names(&manifest, &out, &RouteNameStrategy::Default).unwrap());
}

#[rstest]
fn test_manifest_change_regenerates(workspace: TempDir) {
	let manifest = workspace.path().join("pages.json");
	let out = workspace.path().join("routes.rs");
	write_route_names(&manifest, &out, &RouteNameStrategy::PackagePage).unwrap();

	fs::write(
		&manifest,
		r#"{ "pages": [{ "path": "pages/profile/index" }] }"#,
	)
	.unwrap();

	assert!(write_route_names(&manifest, &out, &RouteNameStrategy::PackagePage).unwrap());
	let source = fs::read_to_string(&out).unwrap();
	assert!(source.contains("\"pages_profile\""));
	assert!(!source.contains("\"pages_home\""));
}

#[rstest]
fn test_missing_manifest_reports_manifest_error(workspace: TempDir) {
	let result = write_route_names(
		workspace.path().join("absent.json"),
		workspace.path().join("routes.rs"),
		&RouteNameStrategy::Default,
	);
	assert!(matches!(
		result,
		Err(CodegenError::Manifest(ManifestError::Io { .. }))
	));
}

#[rstest]
fn test_unwritable_output_reports_write_error(workspace: TempDir) {
	let result = write_route_names(
		workspace.path().join("pages.json"),
		workspace.path().join("missing-dir").join("routes.rs"),
		&RouteNameStrategy::Default,
	);
	assert!(matches!(result, Err(CodegenError::Write { .. })));
}
