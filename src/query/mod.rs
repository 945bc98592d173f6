//! Query Cache
//!
//! Loads SQL resources from a directory tree, strips comments on load and
//! memoizes the cleaned text keyed by (module, resource-name). The cache is
//! an explicit owned object with no global state; a scanner invocation per
//! load keeps the whole path reentrant.

pub mod cache;

pub use cache::{QueryCache, QueryCacheError};
