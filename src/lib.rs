//! vhttpd - Very Simple HTTP Daemon
//!
//! Core library for serving static files over HTTP/1.x.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
