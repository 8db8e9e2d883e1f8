//! Energy Dash Client Library
//!
//! A terminal client for an energy consumption forecasting service. The
//! [`states::PredictionStore`] owns all server-derived data (forecast,
//! insights, history, prediction) and is the only code that talks to the
//! service; the feature views render its snapshots.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;
pub mod utils;
