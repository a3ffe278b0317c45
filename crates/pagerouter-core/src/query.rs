//! Navigation query parameters and URL construction.
//!
//! A [`Query`] keeps its entries in insertion order so the generated query
//! string is stable. Values are arbitrary JSON; when appended to a page URL
//! they are serialized as follows:
//!
//! | Value | Text |
//! |-------|------|
//! | string | the string itself |
//! | number, bool, null | display form (`1`, `2.5`, `true`, `null`); integral floats drop `.0` |
//! | array, object | compact JSON |
//!
//! Keys and values are then escaped with the same character set as
//! JavaScript's `encodeURIComponent`.

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Insertion-ordered navigation parameters.
///
/// # Examples
///
/// ```
/// use pagerouter_core::Query;
///
/// let query = Query::new()
///     .with("id", 42)
///     .with("tab", "info")
///     .with_opt("filter", None::<String>);
///
/// assert_eq!(query.len(), 2);
/// assert_eq!(query.get("id"), Some(&serde_json::json!(42)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(IndexMap<String, Value>);

impl Query {
	/// Creates an empty query.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an entry, replacing any previous value for `key`.
	///
	/// Non-finite floats have no JSON form and are stored as `null`.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Adds an entry only when `value` is `Some`.
	pub fn with_opt<T: Into<Value>>(mut self, key: impl Into<String>, value: Option<T>) -> Self {
		if let Some(value) = value {
			self.insert(key, value);
		}
		self
	}

	/// Adds an entry from any serializable value.
	///
	/// # Errors
	///
	/// Returns the serialization error when `value` has no JSON form, e.g. a
	/// map with non-string keys.
	pub fn try_with(
		mut self,
		key: impl Into<String>,
		value: impl Serialize,
	) -> Result<Self, serde_json::Error> {
		self.try_insert(key, value)?;
		Ok(self)
	}

	/// Inserts an entry, returning the previous value if any.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0.insert(key.into(), value.into())
	}

	/// Serializes `value` and inserts it, returning the previous value if any.
	///
	/// Nothing is inserted when serialization fails.
	pub fn try_insert(
		&mut self,
		key: impl Into<String>,
		value: impl Serialize,
	) -> Result<Option<Value>, serde_json::Error> {
		let value = serde_json::to_value(value)?;
		Ok(self.0.insert(key.into(), value))
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Removes `key`, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.shift_remove(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> Iter<'_, String, Value> {
		self.0.iter()
	}

	/// Copies every entry of `other` into `self`, overwriting existing keys.
	pub fn merge(&mut self, other: &Query) {
		for (key, value) in other.iter() {
			self.0.insert(key.clone(), value.clone());
		}
	}

	/// Renders the `key=value&...` form of this query without a leading `?`.
	pub fn to_query_string(&self) -> String {
		self.0
			.iter()
			.map(|(key, value)| {
				let text = value_text(value);
				format!(
					"{}={}",
					utf8_percent_encode(key, URI_COMPONENT),
					utf8_percent_encode(&text, URI_COMPONENT)
				)
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Query {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}
}

impl From<serde_json::Map<String, Value>> for Query {
	fn from(map: serde_json::Map<String, Value>) -> Self {
		map.into_iter().collect()
	}
}

impl IntoIterator for Query {
	type Item = (String, Value);
	type IntoIter = IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Query {
	type Item = (&'a String, &'a Value);
	type IntoIter = Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

fn value_text(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(s) => Cow::Borrowed(s),
		Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
		Value::Number(n) => Cow::Owned(number_text(n)),
		Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
		Value::Null => Cow::Borrowed("null"),
	}
}

/// Integral floats drop their fraction (`2.0` becomes `2`), as in
/// JavaScript's `String(value)`.
fn number_text(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
			if f == 0.0 {
				"0".to_string()
			} else {
				format!("{:.0}", f)
			}
		}
		_ => n.to_string(),
	}
}

/// Prefixes `url` with `/` unless it already starts with one.
pub fn ensure_leading_slash(url: &str) -> Cow<'_, str> {
	if url.starts_with('/') {
		Cow::Borrowed(url)
	} else {
		Cow::Owned(format!("/{}", url))
	}
}

/// Builds the URL handed to the page-stack primitives.
///
/// # Examples
///
/// ```
/// use pagerouter_core::{Query, build_url_with_query};
///
/// let query = Query::new().with("a", 1).with("q", "x y");
/// assert_eq!(build_url_with_query("pages/home/index", &query), "/pages/home/index?a=1&q=x%20y");
/// assert_eq!(build_url_with_query("/pages/home/index", &Query::new()), "/pages/home/index");
/// ```
pub fn build_url_with_query(url: &str, query: &Query) -> String {
	let normalized = ensure_leading_slash(url);
	if query.is_empty() {
		return normalized.into_owned();
	}
	format!("{}?{}", normalized, query.to_query_string())
}
