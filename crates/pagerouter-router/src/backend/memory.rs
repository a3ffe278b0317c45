//! In-memory page stack.

use super::{NavigationBackend, PageInstance, StackOperation};
use crate::error::NavigateError;
use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use percent_encoding::percent_decode_str;

#[derive(Debug, Default)]
struct MemoryState {
	stack: Vec<PageInstance>,
	calls: Vec<(StackOperation, String)>,
	fail_next: Option<NavigateError>,
}

/// Page stack kept in memory.
///
/// Records every primitive call in order, decodes page URLs into
/// [`PageInstance`]s the way a runtime would, and can be told to fail the
/// next operation.
///
/// # Examples
///
/// ```
/// use pagerouter_router::{MemoryBackend, NavigationBackend, StackOperation};
///
/// # futures::executor::block_on(async {
/// let backend = MemoryBackend::new();
/// backend.navigate_to("/pages/detail/index?id=7").await.unwrap();
///
/// let page = backend.current_page().unwrap();
/// assert_eq!(page.route, "pages/detail/index");
/// assert_eq!(page.options.get("id").map(String::as_str), Some("7"));
/// assert_eq!(backend.calls()[0].0, StackOperation::NavigateTo);
/// # });
/// ```
#[derive(Debug)]
pub struct MemoryBackend {
	state: Mutex<MemoryState>,
	max_depth: usize,
}

impl MemoryBackend {
	/// Creates an empty stack with no depth limit.
	pub fn new() -> Self {
		Self {
			state: Mutex::new(MemoryState::default()),
			max_depth: usize::MAX,
		}
	}

	/// Creates an empty stack that refuses to grow past `max_depth` pages.
	pub fn with_max_depth(max_depth: usize) -> Self {
		Self {
			max_depth,
			..Self::new()
		}
	}

	/// Puts `page` on top of the stack without recording a call.
	pub fn with_current_page(self, page: PageInstance) -> Self {
		self.state.lock().stack.push(page);
		self
	}

	/// Makes the next primitive call fail with `message`.
	pub fn fail_next(&self, message: impl Into<String>) {
		self.state.lock().fail_next = Some(NavigateError::new(message));
	}

	/// Returns every primitive call so far with the URL it received.
	pub fn calls(&self) -> Vec<(StackOperation, String)> {
		self.state.lock().calls.clone()
	}

	/// Returns the current stack, bottom first.
	pub fn stack(&self) -> Vec<PageInstance> {
		self.state.lock().stack.clone()
	}

	fn apply(&self, operation: StackOperation, url: &str) -> Result<(), NavigateError> {
		let mut state = self.state.lock();
		state.calls.push((operation, url.to_string()));

		if let Some(err) = state.fail_next.take() {
			return Err(err);
		}

		let page = parse_page(url);
		match operation {
			StackOperation::NavigateTo => {
				if state.stack.len() >= self.max_depth {
					return Err(NavigateError::new(format!(
						"navigate_to:fail page limit exceed: {}",
						self.max_depth
					)));
				}
				state.stack.push(page);
			}
			StackOperation::RedirectTo => {
				state.stack.pop();
				state.stack.push(page);
			}
			StackOperation::Relaunch | StackOperation::SwitchTab => {
				state.stack.clear();
				state.stack.push(page);
			}
		}
		Ok(())
	}
}

impl Default for MemoryBackend {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl NavigationBackend for MemoryBackend {
	async fn navigate_to(&self, url: &str) -> Result<(), NavigateError> {
		self.apply(StackOperation::NavigateTo, url)
	}

	async fn redirect_to(&self, url: &str) -> Result<(), NavigateError> {
		self.apply(StackOperation::RedirectTo, url)
	}

	async fn relaunch(&self, url: &str) -> Result<(), NavigateError> {
		self.apply(StackOperation::Relaunch, url)
	}

	async fn switch_tab(&self, url: &str) -> Result<(), NavigateError> {
		self.apply(StackOperation::SwitchTab, url)
	}

	fn current_page(&self) -> Option<PageInstance> {
		self.state.lock().stack.last().cloned()
	}
}

/// Splits `/path?a=1&b=2` into a page with decoded string options.
fn parse_page(url: &str) -> PageInstance {
	let url = url.trim_start_matches('/');
	let (route, query) = url.split_once('?').unwrap_or((url, ""));

	let options: IndexMap<String, String> = query
		.split('&')
		.filter(|pair| !pair.is_empty())
		.map(|pair| {
			let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
			(decode(key), decode(value))
		})
		.collect();

	PageInstance {
		route: route.to_string(),
		options,
	}
}

fn decode(component: &str) -> String {
	percent_decode_str(component).decode_utf8_lossy().into_owned()
}
