//! Application services
//!
//! This module contains the driver loop and the application wiring that
//! feeds it from configuration.

pub mod app;
pub mod driver;

pub use app::Application;
pub use driver::{Driver, DriverOptions, RunSummary};
