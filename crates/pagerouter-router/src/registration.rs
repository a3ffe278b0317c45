//! De-registration handles and the ordered callback lists behind them.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Handle returned by every registration call.
///
/// Calling [`Registration::revoke`] undoes the registration. Dropping the
/// handle leaves the registration in place.
pub struct Registration {
	revoke: Box<dyn FnOnce() + Send + Sync>,
}

impl Registration {
	pub(crate) fn new<F>(revoke: F) -> Self
	where
		F: FnOnce() + Send + Sync + 'static,
	{
		Self {
			revoke: Box::new(revoke),
		}
	}

	/// Undoes the registration.
	pub fn revoke(self) {
		(self.revoke)()
	}
}

impl fmt::Debug for Registration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registration").finish_non_exhaustive()
	}
}

/// Ordered list of callbacks, each removable through its [`Registration`].
pub(crate) struct Bucket<T> {
	entries: Arc<RwLock<Vec<(u64, T)>>>,
	next_id: Arc<AtomicU64>,
}

impl<T> Clone for Bucket<T> {
	fn clone(&self) -> Self {
		Self {
			entries: Arc::clone(&self.entries),
			next_id: Arc::clone(&self.next_id),
		}
	}
}

impl<T> Default for Bucket<T> {
	fn default() -> Self {
		Self {
			entries: Arc::new(RwLock::new(Vec::new())),
			next_id: Arc::new(AtomicU64::new(0)),
		}
	}
}

impl<T: Clone + Send + Sync + 'static> Bucket<T> {
	/// Appends `item`; revoking the returned handle removes exactly this item.
	pub(crate) fn push(&self, item: T) -> Registration {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		self.entries.write().push((id, item));

		let entries = Arc::clone(&self.entries);
		Registration::new(move || {
			entries.write().retain(|(entry_id, _)| *entry_id != id);
		})
	}

	/// Copies the current items so callers can iterate without holding the lock.
	pub(crate) fn snapshot(&self) -> Vec<T> {
		self.entries
			.read()
			.iter()
			.map(|(_, item)| item.clone())
			.collect()
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.read().len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_push_keeps_order() {
		let bucket = Bucket::default();
		bucket.push("a");
		bucket.push("b");
		bucket.push("c");
		assert_eq!(bucket.snapshot(), vec!["a", "b", "c"]);
	}

	#[rstest]
	fn test_revoke_removes_only_its_entry() {
		let bucket = Bucket::default();
		let _first = bucket.push("same");
		let second = bucket.push("same");
		second.revoke();
		assert_eq!(bucket.len(), 1);
	}

	#[rstest]
	fn test_revoke_twice_registered_is_independent() {
		let bucket = Bucket::default();
		let first = bucket.push(1);
		bucket.push(2);
		first.revoke();
		assert_eq!(bucket.snapshot(), vec![2]);
	}

	#[rstest]
	fn test_snapshot_is_detached() {
		let bucket = Bucket::default();
		bucket.push(1);
		let snapshot = bucket.snapshot();
		bucket.push(2);
		assert_eq!(snapshot, vec![1]);
	}
}
