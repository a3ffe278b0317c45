//! Cross-navigation page cache.
//!
//! The router writes an entry for the destination route right before the
//! page-stack operation and removes it again if that operation fails. Reads
//! never consume an entry, so a page mounted twice sees the same payload
//! until the next navigation to its route overwrites it.

use indexmap::IndexMap;
use pagerouter_core::{Query, Value};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Payload recorded for the most recent navigation to a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCacheEntry {
	/// Query the navigation was made with.
	pub query: Query,
	/// Value returned by the route handler.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub handler_result: Option<Value>,
}

impl PageCacheEntry {
	pub fn new(query: Query, handler_result: Option<Value>) -> Self {
		Self {
			query,
			handler_result,
		}
	}
}

/// Route name to [`PageCacheEntry`] store. At most one entry per name.
#[derive(Debug, Clone, Default)]
pub struct PageCache {
	entries: Arc<RwLock<IndexMap<String, PageCacheEntry>>>,
}

impl PageCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores `entry` under `name`, replacing any previous entry.
	pub fn set(&self, name: impl Into<String>, entry: PageCacheEntry) {
		self.entries.write().insert(name.into(), entry);
	}

	pub fn get(&self, name: &str) -> Option<PageCacheEntry> {
		self.entries.read().get(name).cloned()
	}

	/// Removes the entry for `name`, returning whether one existed.
	pub fn delete(&self, name: &str) -> bool {
		self.entries.write().shift_remove(name).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}
