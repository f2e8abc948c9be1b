//! Burrow - minimal static file server
//!
//! Serves files from a base directory over a small HTTP/1.x subset with
//! keep-alive connections.

pub mod config;
pub mod http;
pub mod log;
pub mod server;
