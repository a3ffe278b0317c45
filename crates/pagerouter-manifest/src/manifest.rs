//! Manifest data model.
//!
//! Mirrors the JSON page manifest:
//!
//! ```json
//! {
//!   "pages": [{ "path": "pages/home/index", "type": "tabBar" }],
//!   "subPackages": [{ "root": "pkg", "pages": [{ "path": "pages/a/index" }] }],
//!   "tabBar": { "list": [{ "pagePath": "pages/home/index" }] }
//! }
//! ```

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

/// A parsed page manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
	/// Main package pages.
	#[serde(default)]
	pub pages: Vec<PageEntry>,
	/// Sub-packages, each rooted at its own directory.
	#[serde(default, alias = "subpackages")]
	pub sub_packages: Vec<SubPackage>,
	/// Tab-bar configuration.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tab_bar: Option<TabBar>,
}

/// One page declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
	/// Page path relative to its package root.
	pub path: String,
	/// Declared page type; `tabBar` marks a tab page.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub page_type: Option<String>,
	/// Fields the router passes through untouched (`style`, ...).
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A sub-package and its pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPackage {
	/// Directory prefix of every page in this package.
	pub root: String,
	#[serde(default)]
	pub pages: Vec<PageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
	#[serde(default)]
	pub list: Vec<TabBarItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarItem {
	/// Path of the tab page, as written in `pages`.
	pub page_path: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl PageEntry {
	/// Creates an entry with no type and no extra fields.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			page_type: None,
			extra: Map::new(),
		}
	}

	/// Whether the entry declares itself a tab page.
	pub fn is_tab_bar_type(&self) -> bool {
		self.page_type.as_deref() == Some("tabBar")
	}
}

impl Manifest {
	/// Parses a manifest from JSON text.
	///
	/// # Errors
	///
	/// Returns [`ManifestError::Json`] if the text is not a valid manifest.
	pub fn from_json_str(text: &str) -> Result<Self, ManifestError> {
		Ok(serde_json::from_str(text)?)
	}

	/// Reads and parses a manifest file.
	///
	/// # Errors
	///
	/// Returns [`ManifestError::Io`] if the file cannot be read and
	/// [`ManifestError::Json`] if it cannot be parsed.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_json_str(&text)
	}

	/// Returns the set of page paths listed in the tab bar.
	pub fn tab_bar_paths(&self) -> HashSet<&str> {
		self.tab_bar
			.iter()
			.flat_map(|tab_bar| tab_bar.list.iter())
			.map(|item| item.page_path.as_str())
			.collect()
	}

	/// Iterates over every page as `(full path, entry)`, main package first.
	///
	/// Sub-package pages are prefixed with their package root.
	pub fn page_paths(&self) -> impl Iterator<Item = (String, &PageEntry)> {
		let main = self.pages.iter().map(|page| (page.path.clone(), page));
		let sub = self.sub_packages.iter().flat_map(|package| {
			package
				.pages
				.iter()
				.map(move |page| (format!("{}/{}", package.root, page.path), page))
		});
		main.chain(sub)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;
	use serde_json::json;

	#[fixture]
	fn manifest_json() -> &'static str {
		r##"{
			"pages": [
				{ "path": "pages/home/index", "style": { "navigationBarTitleText": "Home" } },
				{ "path": "pages/mine/index", "type": "tabBar" }
			],
			"subPackages": [
				{ "root": "shop", "pages": [{ "path": "pages/cart/index" }] }
			],
			"tabBar": { "color": "#999", "list": [{ "pagePath": "pages/home/index", "text": "Home" }] },
			"globalStyle": {}
		}"##
	}

	#[rstest]
	fn test_parse_manifest(manifest_json: &str) {
		let manifest = Manifest::from_json_str(manifest_json).unwrap();

		assert_eq!(manifest.pages.len(), 2);
		assert_eq!(
			manifest.pages[0].extra.get("style"),
			Some(&json!({"navigationBarTitleText": "Home"}))
		);
		assert!(manifest.pages[1].is_tab_bar_type());
		assert_eq!(manifest.sub_packages[0].root, "shop");
		assert_eq!(
			manifest.tab_bar_paths(),
			HashSet::from(["pages/home/index"])
		);
	}

	#[rstest]
	fn test_page_paths_prefix_sub_packages(manifest_json: &str) {
		let manifest = Manifest::from_json_str(manifest_json).unwrap();
		let paths: Vec<String> = manifest.page_paths().map(|(path, _)| path).collect();

		assert_eq!(
			paths,
			vec![
				"pages/home/index".to_string(),
				"pages/mine/index".to_string(),
				"shop/pages/cart/index".to_string(),
			]
		);
	}

	#[rstest]
	fn test_lowercase_subpackages_alias() {
		let manifest = Manifest::from_json_str(
			r#"{ "subpackages": [{ "root": "a", "pages": [{ "path": "b/c/index" }] }] }"#,
		)
		.unwrap();
		assert_eq!(manifest.sub_packages.len(), 1);
	}

	#[rstest]
	fn test_empty_object_is_empty_manifest() {
		let manifest = Manifest::from_json_str("{}").unwrap();
		assert_eq!(manifest, Manifest::default());
		assert!(manifest.tab_bar_paths().is_empty());
	}

	#[rstest]
	fn test_invalid_json_is_error() {
		assert!(matches!(
			Manifest::from_json_str("{ pages: ["),
			Err(ManifestError::Json(_))
		));
	}

	#[rstest]
	fn test_from_missing_path_is_io_error() {
		let result = Manifest::from_path("/definitely/not/here/pages.json");
		assert!(matches!(result, Err(ManifestError::Io { .. })));
	}
}
