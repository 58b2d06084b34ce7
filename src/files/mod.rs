//! Static file serving.
//!
//! This module implements the request-to-response pipeline:
//!
//! - **`resolver`**: maps a request URI to a concrete file beneath the
//!   document root, applying the directory -> `index.html` fallback
//! - **`handler`**: drives one request through method check, resolution,
//!   file read, and MIME classification, producing a [`Response`] or a
//!   [`ServeError`]
//!
//! [`Response`]: crate::http::response::Response
//! [`ServeError`]: handler::ServeError

pub mod handler;
pub mod resolver;

pub use handler::{ServeError, StaticServer};
pub use resolver::{ResolvedTarget, resolve};
