//! Tokio Runtime Bridge
//!
//! The interactive session is a plain blocking loop, while the store and the
//! HTTP client are async. This module owns the runtime that drives them.
//!
//! ## Pattern
//!
//! ```text
//! session command
//!       │
//!       ▼
//! block_on(store.refresh_history())
//!       │
//!       ▼
//! tokio::Runtime::block_on()
//!       │
//!       ▼
//! state updated, command returns
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Block on a future until it completes
///
/// Store operations run to completion on the calling thread, so a command
/// observes its own state writes as soon as it returns.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_on_returns_value() {
        let value = block_on(async { 40 + 2 });
        assert_eq!(value, 42);
    }
}
