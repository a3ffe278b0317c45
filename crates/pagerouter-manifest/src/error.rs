//! Error types for manifest loading and code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a manifest.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ManifestError {
	/// The manifest file could not be read.
	#[error("failed to read manifest {path}: {source}")]
	Io {
		/// Manifest location.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The manifest is not valid JSON or has the wrong shape.
	#[error("invalid manifest: {0}")]
	Json(#[from] serde_json::Error),
}

/// Errors raised while generating route-name sources.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodegenError {
	#[error(transparent)]
	Manifest(#[from] ManifestError),

	/// The generated file could not be written.
	#[error("failed to write {path}: {source}")]
	Write {
		/// Output location.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
}
