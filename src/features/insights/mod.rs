//! Insights - server insights, bill distribution and the summary report

mod controller;
mod page;

pub use controller::InsightsController;
pub use page::render;
