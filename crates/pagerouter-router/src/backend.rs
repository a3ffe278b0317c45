//! Page-stack primitives the router drives.
//!
//! A [`NavigationBackend`] wraps the runtime's page stack. The router only
//! orders calls to it and reacts to their results; it never inspects the
//! stack beyond asking for the page currently on top.

mod memory;

pub use memory::MemoryBackend;

use crate::error::NavigateError;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// The page on top of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInstance {
	/// Page path without a leading slash, e.g. `pages/home/index`.
	pub route: String,
	/// Parameters the runtime decoded from the page URL.
	pub options: IndexMap<String, String>,
}

impl PageInstance {
	pub fn new(route: impl Into<String>) -> Self {
		Self {
			route: route.into(),
			options: IndexMap::new(),
		}
	}

	pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.options.insert(key.into(), value.into());
		self
	}
}

/// Page-stack operation performed by a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOperation {
	/// Push a new page.
	NavigateTo,
	/// Replace the current page.
	RedirectTo,
	/// Clear the stack and open a page.
	Relaunch,
	/// Switch to a tab page.
	SwitchTab,
}

impl StackOperation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::NavigateTo => "navigate_to",
			Self::RedirectTo => "redirect_to",
			Self::Relaunch => "relaunch",
			Self::SwitchTab => "switch_tab",
		}
	}
}

impl fmt::Display for StackOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Page-stack primitives of the host runtime.
///
/// Every operation receives a URL with a leading slash. Non-tab URLs carry
/// the serialized query; tab URLs never do.
#[async_trait]
pub trait NavigationBackend: Send + Sync {
	/// Pushes the page at `url`.
	async fn navigate_to(&self, url: &str) -> Result<(), NavigateError>;

	/// Replaces the current page with the page at `url`.
	async fn redirect_to(&self, url: &str) -> Result<(), NavigateError>;

	/// Closes every page and opens the page at `url`.
	async fn relaunch(&self, url: &str) -> Result<(), NavigateError>;

	/// Switches to the tab page at `url`.
	async fn switch_tab(&self, url: &str) -> Result<(), NavigateError>;

	/// Returns the page on top of the stack, if any.
	fn current_page(&self) -> Option<PageInstance>;
}

#[async_trait]
impl<T: NavigationBackend + ?Sized> NavigationBackend for Arc<T> {
	async fn navigate_to(&self, url: &str) -> Result<(), NavigateError> {
		(**self).navigate_to(url).await
	}

	async fn redirect_to(&self, url: &str) -> Result<(), NavigateError> {
		(**self).redirect_to(url).await
	}

	async fn relaunch(&self, url: &str) -> Result<(), NavigateError> {
		(**self).relaunch(url).await
	}

	async fn switch_tab(&self, url: &str) -> Result<(), NavigateError> {
		(**self).switch_tab(url).await
	}

	fn current_page(&self) -> Option<PageInstance> {
		(**self).current_page()
	}
}
