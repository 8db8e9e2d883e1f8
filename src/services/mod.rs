//! Service Layer
//!
//! Access to the remote forecast service and the async runtime that drives it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              PredictionStore                 │
//! └─────────────────────────────────────────────┘
//!                       │ ForecastApi
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │  HttpForecastApi (reqwest)  │  block_on()    │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼ HTTP/JSON
//!              remote forecast service
//! ```

mod api;
mod runtime;

#[cfg(test)]
pub(crate) mod testing;

pub use api::*;
pub use runtime::*;
