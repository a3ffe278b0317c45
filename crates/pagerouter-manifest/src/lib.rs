//! Page manifest support for pagerouter.
//!
//! The manifest is the static list of pages an application ships with: the
//! main package pages, the sub-package pages (each under its own root) and
//! the tab-bar list. This crate provides:
//!
//! - [`Manifest`]: the deserialized manifest
//! - [`parse_routes`]: registry population from a manifest
//! - [`codegen`]: generation of a Rust source file enumerating every route name

pub mod codegen;
pub mod error;
pub mod manifest;
pub mod routes;

pub use codegen::{collect_route_names, render_route_names, write_route_names};
pub use error::{CodegenError, ManifestError};
pub use manifest::{Manifest, PageEntry, SubPackage, TabBar, TabBarItem};
pub use routes::parse_routes;
