//! Dashboard - summary stats, forecast series, upload and prediction

mod controller;
mod page;

pub use controller::DashboardController;
pub use page::render;
