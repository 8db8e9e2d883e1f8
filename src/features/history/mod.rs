//! History - filtered, paginated upload history

mod controller;
mod page;

pub use controller::HistoryController;
pub use page::render;
