//! Axum middleware applied to every service router.

pub mod metrics;

pub use self::metrics::track_requests;
