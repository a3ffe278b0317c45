//! Page close strategies.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Which page-stack operation a navigation performs.
///
/// Unknown or missing input always normalizes to [`CloseType::Default`].
///
/// # Examples
///
/// ```
/// use pagerouter_core::CloseType;
///
/// assert_eq!(CloseType::resolve(Some("current")), CloseType::Current);
/// assert_eq!(CloseType::resolve(Some("sideways")), CloseType::Default);
/// assert_eq!(CloseType::resolve(None), CloseType::Default);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseType {
	/// Push a new page onto the stack.
	#[default]
	Default,
	/// Replace the current page.
	Current,
	/// Clear the stack and land on a fresh page.
	All,
}

impl CloseType {
	/// Normalizes optional textual input into a close type.
	pub fn resolve(input: Option<&str>) -> Self {
		match input {
			Some("current") => Self::Current,
			Some("all") => Self::All,
			_ => Self::Default,
		}
	}

	/// Returns the canonical name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Current => "current",
			Self::All => "all",
		}
	}
}

impl From<&str> for CloseType {
	fn from(value: &str) -> Self {
		Self::resolve(Some(value))
	}
}

impl fmt::Display for CloseType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for CloseType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = Option::<String>::deserialize(deserializer)?;
		Ok(Self::resolve(raw.as_deref()))
	}
}
