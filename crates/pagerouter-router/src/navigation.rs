//! The push pipeline.
//!
//! Every push runs resolve, before guards, handler, after guards, cache write
//! and page-stack commit in that order. A redirect from a before guard
//! restarts the pipeline at the resolve step with the same callbacks and
//! close mode, up to `max_redirects` times.

use crate::backend::StackOperation;
use crate::cache::PageCacheEntry;
use crate::diagnostics::RouterWarning;
use crate::error::RouterError;
use crate::guard::GuardVerdict;
use crate::handler::{HandlerOutcome, RoutePayload};
use crate::request::{FailCallback, NavigationCallbacks, PushRequest};
use crate::router::Router;
use pagerouter_core::{
	CloseType, Query, RouteLocation, RouteMeta, Value, build_url_with_query, ensure_leading_slash,
};
use std::sync::atomic::{AtomicBool, Ordering};

/// How a pipeline run that did not fail ended.
#[derive(Debug)]
enum Outcome {
	/// The page-stack operation succeeded.
	Committed(Option<Value>),
	/// A before guard denied the navigation.
	Cancelled,
	/// The handler returned `false`.
	Aborted,
}

/// Marks a router as navigating for as long as it is alive.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
	fn acquire(flag: &'a AtomicBool) -> Option<Self> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| Self(flag))
	}
}

impl Drop for InFlight<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

impl Router {
	/// Navigates to a named route.
	///
	/// Accepts a route name or a [`PushRequest`]. A guard denying the
	/// navigation and a handler returning `false` both end the attempt with
	/// `Ok(())` and no page-stack call.
	///
	/// Only one push runs per router at a time; a push started while another
	/// is in flight fails with [`RouterError::NavigationInProgress`]. That
	/// includes a push issued from inside a guard or handler.
	///
	/// # Errors
	///
	/// Returns the [`RouterError`] of a failed attempt unless the request
	/// carries a fail callback, in which case the callback receives it and
	/// this returns `Ok(())`.
	pub async fn push(&self, target: impl Into<PushRequest>) -> Result<(), RouterError> {
		self.push_with(target, NavigationCallbacks::default()).await
	}

	/// Navigates like [`Router::push`], with `callbacks` taking the place of
	/// the request's own callbacks.
	pub async fn push_with(
		&self,
		target: impl Into<PushRequest>,
		callbacks: NavigationCallbacks,
	) -> Result<(), RouterError> {
		let mut request = target.into();
		request.apply(callbacks);
		let PushRequest {
			path,
			query,
			close,
			success,
			fail,
		} = request;

		if path.is_empty() {
			return report(fail, RouterError::EmptyRouteName);
		}
		let Some(in_flight) = InFlight::acquire(&self.inner.in_flight) else {
			tracing::debug!(route = %path, "navigation rejected while another is in flight");
			return report(fail, RouterError::NavigationInProgress { route: path });
		};
		let result = self.navigate(path, query, close).await;
		drop(in_flight);

		match result {
			Ok(Outcome::Committed(handler_result)) => {
				if let Some(success) = success {
					success(handler_result);
				}
				Ok(())
			}
			Ok(Outcome::Cancelled | Outcome::Aborted) => Ok(()),
			Err(err) => report(fail, err),
		}
	}

	async fn navigate(
		&self,
		mut path: String,
		mut query: Option<Query>,
		close: CloseType,
	) -> Result<Outcome, RouterError> {
		let limit = self.inner.settings.max_redirects;
		let mut redirects = 0;

		loop {
			if path.is_empty() {
				return Err(RouterError::EmptyRouteName);
			}
			let Some(meta) = self.route_meta(&path) else {
				return Err(RouterError::RouteNotFound(path));
			};
			let route_query = query.clone().unwrap_or_default();
			tracing::debug!(route = %path, url = %meta.url, close = %close, "navigation resolved");

			let from = self.current_location();
			let to = RouteLocation {
				name: path.clone(),
				meta: Some(meta.clone()),
				query: route_query.clone(),
				path: meta.url.clone(),
			};

			let verdict = self
				.run_before_guards(&to, &from)
				.await
				.map_err(|source| RouterError::GuardFailed {
					route: path.clone(),
					source,
				})?;

			match verdict {
				GuardVerdict::Continue => {
					return self.dispatch(path, meta, route_query, close, &to, &from).await;
				}
				GuardVerdict::Cancel => {
					tracing::debug!(route = %path, "navigation cancelled by guard");
					return Ok(Outcome::Cancelled);
				}
				GuardVerdict::Redirect(target) => {
					redirects += 1;
					if redirects > limit {
						return Err(RouterError::RedirectLoopDetected {
							route: target.name().to_string(),
							limit,
						});
					}
					tracing::debug!(from = %path, to = %target.name(), redirects, "navigation redirected");
					if let Some(redirect_query) = target.query() {
						query = Some(redirect_query.clone());
					}
					path = target.name().to_string();
				}
			}
		}
	}

	async fn dispatch(
		&self,
		path: String,
		meta: RouteMeta,
		query: Query,
		close: CloseType,
		to: &RouteLocation,
		from: &RouteLocation,
	) -> Result<Outcome, RouterError> {
		let outcome = match self.handler(&path) {
			Some(handler) => {
				let payload = RoutePayload {
					query: query.clone(),
					close_type: close,
					meta: meta.clone(),
				};
				handler(payload)
					.await
					.map_err(|source| RouterError::HandlerFailed {
						route: path.clone(),
						source,
					})?
			}
			None => HandlerOutcome::default(),
		};

		self.run_after_guards(to, from)
			.await
			.map_err(|source| RouterError::AfterGuardFailed {
				route: path.clone(),
				source,
			})?;

		let handler_result = match outcome {
			HandlerOutcome::Abort => {
				tracing::debug!(route = %path, "navigation aborted by handler");
				return Ok(Outcome::Aborted);
			}
			HandlerOutcome::Proceed(value) => value,
		};

		self.inner.cache.set(
			path.clone(),
			PageCacheEntry::new(query.clone(), handler_result.clone()),
		);

		let (operation, url) = if meta.is_tab_bar {
			if !query.is_empty() && self.inner.settings.warn_on_tab_query {
				self.warn(RouterWarning::TabBarQueryIgnored {
					route: path.clone(),
					keys: query.keys().map(str::to_string).collect(),
				});
			}
			(
				StackOperation::SwitchTab,
				ensure_leading_slash(&meta.url).into_owned(),
			)
		} else {
			(operation_for(close), build_url_with_query(&meta.url, &query))
		};
		tracing::debug!(route = %path, operation = %operation, url = %url, "committing navigation");

		let backend = &self.inner.backend;
		let committed = match operation {
			StackOperation::NavigateTo => backend.navigate_to(&url).await,
			StackOperation::RedirectTo => backend.redirect_to(&url).await,
			StackOperation::Relaunch => backend.relaunch(&url).await,
			StackOperation::SwitchTab => backend.switch_tab(&url).await,
		};

		if let Err(source) = committed {
			self.inner.cache.delete(&path);
			tracing::debug!(route = %path, error = %source, "page cache entry rolled back");
			return Err(RouterError::NavigationFailed {
				route: path,
				url,
				source,
			});
		}
		Ok(Outcome::Committed(handler_result))
	}

	/// The route currently displayed, or an empty location on a cold start.
	fn current_location(&self) -> RouteLocation {
		let Some(name) = self
			.inner
			.backend
			.current_page()
			.and_then(|page| self.resolve_name_by_url(&page.route))
		else {
			return RouteLocation::empty();
		};
		let meta = self.route_meta(&name);
		RouteLocation {
			path: meta.as_ref().map(|meta| meta.url.clone()).unwrap_or_default(),
			name,
			meta,
			query: Query::new(),
		}
	}
}

fn operation_for(close: CloseType) -> StackOperation {
	match close {
		CloseType::Default => StackOperation::NavigateTo,
		CloseType::Current => StackOperation::RedirectTo,
		CloseType::All => StackOperation::Relaunch,
	}
}

/// Delivers `err` to `fail` when present, otherwise returns it.
fn report(fail: Option<FailCallback>, err: RouterError) -> Result<(), RouterError> {
	tracing::debug!(error = %err, delivered_to_callback = fail.is_some(), "navigation failed");
	match fail {
		Some(fail) => {
			fail(err);
			Ok(())
		}
		None => Err(err),
	}
}
