//! State Management Layer
//!
//! Store and presentation state. Data flows one way:
//!
//! ```text
//! View action → PredictionStore operation → ForecastApi → state write → UIEvent → view re-render
//! ```

mod app;
mod history_table;
mod prediction;
mod session;
mod toasts;
mod ui_event;

pub use app::*;
pub use history_table::*;
pub use prediction::*;
pub use session::*;
pub use toasts::*;
pub use ui_event::*;
