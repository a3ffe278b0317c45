//! Route metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata registered for one route name.
///
/// `name` is derived from `url` by the router's naming strategy when the
/// route comes from a manifest. Any manifest fields the router does not
/// interpret (style hints and the like) are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
	/// Unique route name.
	pub name: String,
	/// Underlying page path, e.g. `pages/home/index`.
	pub url: String,
	/// Whether the page is a fixed tab page.
	#[serde(default)]
	pub is_tab_bar: bool,
	/// Page type declared by the manifest.
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub page_type: Option<String>,
	/// Opaque manifest fields.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl RouteMeta {
	/// Creates metadata for a regular (non-tab) page.
	///
	/// # Examples
	///
	/// ```
	/// use pagerouter_core::RouteMeta;
	///
	/// let meta = RouteMeta::new("home", "pages/home/index").tab_bar(true);
	/// assert!(meta.is_tab_bar);
	/// assert_eq!(meta.url, "pages/home/index");
	/// ```
	pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			url: url.into(),
			is_tab_bar: false,
			page_type: None,
			extra: Map::new(),
		}
	}

	pub fn tab_bar(mut self, is_tab_bar: bool) -> Self {
		self.is_tab_bar = is_tab_bar;
		self
	}

	pub fn page_type(mut self, page_type: impl Into<String>) -> Self {
		self.page_type = Some(page_type.into());
		self
	}

	/// Attaches an opaque manifest field.
	pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
		self.extra.insert(key.into(), value);
		self
	}
}
