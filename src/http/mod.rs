//! HTTP protocol implementation.
//!
//! A small HTTP/1.x subset for serving files: GET and HEAD only, line-framed
//! requests, keep-alive unless the client asks to close.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection request/response state machine
//! - **`parser`**: request line and header line grammar, line reading
//! - **`request`**: request representation
//! - **`files`**: maps a request onto the base directory and builds the response
//! - **`mime`**: MIME type detection based on file extensions
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitRequestLine │ ← EOF or malformed line → Closed
//!        └──────┬───────────┘
//!               │ GET/HEAD request line
//!               ▼
//!        ┌──────────────────┐
//!        │  ReadingHeaders  │ ← one header per line, bad lines skipped
//!        └──────┬───────────┘
//!               │ blank line
//!               ▼
//!        ┌──────────────────┐
//!        │     Dispatch     │ ← resolve file, write response
//!        └──────┬───────────┘
//!               ├─ Connection: Close/close → Closed
//!               └─ anything else → AwaitRequestLine
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use burrow::http::connection::Connection;
//! use burrow::log::Logger;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let base_dir: Arc<str> = Arc::from("./public");
//!     let log = Logger::new("http");
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let conn = Connection::new(socket, peer, base_dir.clone(), &log);
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod files;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
