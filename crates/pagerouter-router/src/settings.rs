//! Router configuration.
//!
//! Settings can be built in code or loaded from TOML:
//!
//! ```toml
//! naming_strategy = "package_page"
//! max_redirects = 5
//! warn_on_tab_query = false
//! ```
//!
//! Missing keys fall back to their defaults.

use pagerouter_core::RouteNameStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Built-in naming strategies selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategyKind {
	#[default]
	Default,
	PackagePage,
}

impl From<NamingStrategyKind> for RouteNameStrategy {
	fn from(kind: NamingStrategyKind) -> Self {
		match kind {
			NamingStrategyKind::Default => Self::Default,
			NamingStrategyKind::PackagePage => Self::PackagePage,
		}
	}
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSettings {
	/// How page paths become route names.
	pub naming_strategy: NamingStrategyKind,
	/// Redirects a single push may follow before failing.
	pub max_redirects: usize,
	/// Whether dropping query parameters on tab navigation is reported.
	pub warn_on_tab_query: bool,
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			naming_strategy: NamingStrategyKind::Default,
			max_redirects: 10,
			warn_on_tab_query: true,
		}
	}
}

impl RouterSettings {
	/// Parses settings from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Loads settings from a TOML file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	pub fn with_naming_strategy(mut self, kind: NamingStrategyKind) -> Self {
		self.naming_strategy = kind;
		self
	}

	pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
		self.max_redirects = max_redirects;
		self
	}

	pub fn with_warn_on_tab_query(mut self, warn: bool) -> Self {
		self.warn_on_tab_query = warn;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = RouterSettings::default();
		assert_eq!(settings.naming_strategy, NamingStrategyKind::Default);
		assert_eq!(settings.max_redirects, 10);
		assert!(settings.warn_on_tab_query);
	}

	#[rstest]
	#[case("", RouterSettings::default())]
	#[case(
		"naming_strategy = \"package_page\"",
		RouterSettings::default().with_naming_strategy(NamingStrategyKind::PackagePage)
	)]
	#[case(
		"max_redirects = 3\nwarn_on_tab_query = false",
		RouterSettings::default().with_max_redirects(3).with_warn_on_tab_query(false)
	)]
	fn test_from_toml_str(#[case] content: &str, #[case] expected: RouterSettings) {
		assert_eq!(RouterSettings::from_toml_str(content).unwrap(), expected);
	}

	#[rstest]
	fn test_unknown_strategy_is_rejected() {
		let result = RouterSettings::from_toml_str("naming_strategy = \"by_title\"");
		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}

	#[rstest]
	fn test_from_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "max_redirects = 1").unwrap();

		let settings = RouterSettings::from_path(file.path()).unwrap();
		assert_eq!(settings.max_redirects, 1);
	}

	#[rstest]
	fn test_missing_file() {
		let result = RouterSettings::from_path("/nonexistent/pagerouter.toml");
		assert!(matches!(result, Err(SettingsError::Io { .. })));
	}

	#[rstest]
	fn test_kind_into_strategy() {
		let strategy: RouteNameStrategy = NamingStrategyKind::PackagePage.into();
		assert_eq!(strategy.resolve("pages/home/index").as_deref(), Some("pages_home"));
	}
}
