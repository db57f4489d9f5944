//! Host name discovery.
//!
//! Each service reads its host name once at startup and reports it in
//! every `/info` response, which is how a client can tell which instance
//! behind a load balancer answered.

use std::env;

/// Name of the machine or container this process runs on.
///
/// Uses the system node name (`uname`/`gethostname`), then `$HOSTNAME`,
/// and finally falls back to `localhost`.
pub fn hostname() -> String {
    gethostname::gethostname()
        .into_string()
        .ok()
        .and_then(non_empty)
        .or_else(|| env::var("HOSTNAME").ok().and_then(non_empty))
        .unwrap_or_else(|| "localhost".to_string())
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
