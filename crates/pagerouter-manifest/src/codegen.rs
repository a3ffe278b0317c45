//! Route-name source generation.
//!
//! Generates a Rust module with a `RouteName` enum listing every route the
//! manifest declares, so navigation targets can be checked at compile time.
//! Intended for build scripts:
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     println!("cargo:rerun-if-changed=src/pages.json");
//!     let out = std::path::Path::new(&std::env::var("OUT_DIR").unwrap()).join("routes.rs");
//!     pagerouter_manifest::write_route_names("src/pages.json", &out, &Default::default()).unwrap();
//! }
//! ```

use crate::error::CodegenError;
use crate::manifest::Manifest;
use pagerouter_core::RouteNameStrategy;
use std::collections::{BTreeSet, HashSet};
use std::fmt::Write as _;
use std::path::Path;

/// Collects the route names of every main-package and sub-package page.
///
/// The result is sorted and free of duplicates; unnameable pages are left out.
pub fn collect_route_names(manifest: &Manifest, strategy: &RouteNameStrategy) -> BTreeSet<String> {
	manifest
		.page_paths()
		.filter_map(|(path, _)| strategy.resolve(&path))
		.collect()
}

/// Renders the generated module for `names`.
pub fn render_route_names<'a, I>(names: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	let sorted: BTreeSet<&str> = names.into_iter().collect();
	let mut used = HashSet::new();
	let variants: Vec<(String, &str)> = sorted
		.iter()
		.map(|name| (unique_variant(name, &mut used), *name))
		.collect();

	let mut out = String::new();
	out.push_str("// @generated by pagerouter-manifest from the page manifest. Do not edit.\n\n");
	out.push_str("/// Every route name declared by the page manifest.\n");
	out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
	out.push_str("pub enum RouteName {\n");
	for (variant, name) in &variants {
		let _ = writeln!(out, "\t/// `{}`", name);
		let _ = writeln!(out, "\t{},", variant);
	}
	out.push_str("}\n\n");

	out.push_str("impl RouteName {\n");
	out.push_str("\t/// All route names, sorted.\n");
	out.push_str("\tpub const ALL: &'static [RouteName] = &[");
	let all: Vec<String> = variants
		.iter()
		.map(|(variant, _)| format!("RouteName::{}", variant))
		.collect();
	out.push_str(&all.join(", "));
	out.push_str("];\n\n");
	out.push_str("\t/// Returns the route name as registered with the router.\n");
	out.push_str("\tpub const fn as_str(self) -> &'static str {\n");
	out.push_str("\t\tmatch self {\n");
	for (variant, name) in &variants {
		let _ = writeln!(out, "\t\t\tRouteName::{} => {:?},", variant, name);
	}
	out.push_str("\t\t}\n\t}\n}\n\n");

	out.push_str(
		"impl ::core::convert::AsRef<str> for RouteName {\n\
		 \tfn as_ref(&self) -> &str {\n\
		 \t\tself.as_str()\n\
		 \t}\n\
		 }\n\n\
		 impl ::core::fmt::Display for RouteName {\n\
		 \tfn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {\n\
		 \t\tf.write_str(self.as_str())\n\
		 \t}\n\
		 }\n\n\
		 impl ::core::convert::From<RouteName> for ::std::string::String {\n\
		 \tfn from(name: RouteName) -> Self {\n\
		 \t\tname.as_str().to_string()\n\
		 \t}\n\
		 }\n",
	);
	out
}

/// Regenerates `out_path` from the manifest at `manifest_path`.
///
/// The file is only rewritten when its contents change. Returns whether a
/// write happened.
///
/// # Errors
///
/// Returns [`CodegenError::Manifest`] if the manifest cannot be loaded and
/// [`CodegenError::Write`] if the output cannot be written.
pub fn write_route_names(
	manifest_path: impl AsRef<Path>,
	out_path: impl AsRef<Path>,
	strategy: &RouteNameStrategy,
) -> Result<bool, CodegenError> {
	let manifest = Manifest::from_path(manifest_path)?;
	let names = collect_route_names(&manifest, strategy);
	let rendered = render_route_names(names.iter().map(String::as_str));

	let out_path = out_path.as_ref();
	if std::fs::read_to_string(out_path).is_ok_and(|existing| existing == rendered) {
		tracing::debug!(path = %out_path.display(), "route names unchanged");
		return Ok(false);
	}

	std::fs::write(out_path, rendered).map_err(|source| CodegenError::Write {
		path: out_path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %out_path.display(), count = names.len(), "route names regenerated");
	Ok(true)
}

fn unique_variant(name: &str, used: &mut HashSet<String>) -> String {
	let base = variant_ident(name);
	let mut candidate = base.clone();
	let mut suffix = 2;
	while !used.insert(candidate.clone()) {
		candidate = format!("{}{}", base, suffix);
		suffix += 1;
	}
	candidate
}

/// Converts a route name into an UpperCamelCase identifier.
fn variant_ident(name: &str) -> String {
	let mut ident: String = name
		.split(|c: char| !c.is_alphanumeric())
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect();

	if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
		ident.insert_str(0, "Route");
	}
	if ident == "Self" {
		ident.push_str("Route");
	}
	ident
}
