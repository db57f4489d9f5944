//! Hostname relay: two small HTTP services for exercising load-balancer
//! health checks.
//!
//! # Architecture Overview
//!
//! ```text
//!   client ──▶ frontend /info ──GET (timeout)──▶ backend /info
//!                 │                                  │
//!                 ◀──────── {"backend_host": …} ─────┘
//!                 │
//!   client ◀── "Frontend: <host>\nBackend: <host>\n"  (200 or 502)
//!
//!   both services: GET /health → 200 "ok"
//! ```
//!
//! Each binary (`backend`, `frontend`) loads a [`ServiceConfig`], reads its
//! host name once, builds its router and hands it to
//! [`lifecycle::serve`], which wraps it in the shared [`HttpServer`]
//! middleware stack.

// Services
pub mod backend;
pub mod frontend;

// Core subsystems
pub mod config;
pub mod hostname;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{ServiceConfig, ServiceRole};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
