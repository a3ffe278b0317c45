//! Router, guard chains, page cache and navigation backends.

pub use pagerouter_router::*;
