//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack, graceful shutdown)
//!     → request.rs (assign/propagate request ID)
//!     → middleware/ (request metrics)
//!     → service router (backend:: or frontend::)
//!     → Send to client
//! ```

pub mod health;
pub mod middleware;
pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
