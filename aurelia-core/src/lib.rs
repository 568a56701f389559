//! Shared primitives, traits, and utilities for the Aurelia sequence-analysis workspace.
//!
//! `aurelia-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`AureliaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`], [`ContentAddressable`], [`Scored`], [`Summarizable`]
//! - **Hashing** — SHA-256 content addressing for memoization keys
//! - **Caching** — [`MemoCache`], a bounded LRU memoization cache

pub mod cache;
pub mod error;
pub mod hash;
pub mod traits;

pub use cache::MemoCache;
pub use error::{AureliaError, Result};
pub use traits::*;
