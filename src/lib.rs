//! Shared API schema types: validated [`PageOptions`], [`SortOrder`] and the
//! [`TimedMixin`] timestamp/etag bundle.
//!
//! Optional features:
//! - `utoipa`: OpenAPI `ToSchema`/`IntoParams` derivations, with bounds and defaults.
//! - `schemars`: JSON Schema derivations.
//! - `axum`: the `rest` module, mapping [`SchemaError`] to `400 Bad Request` responses.
//! - `all`: every feature above.

mod errors;
pub use errors::*;

mod sorter;
pub use sorter::*;
mod paged;
pub use paged::*;

mod timed;
pub use timed::*;

#[cfg(feature = "axum")]
pub mod rest;
