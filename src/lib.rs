//! Synthetic Events - a generator of fake analytics records
//!
//! A fixed pool of synthetic users feeds two generators that produce page
//! views and tracked custom events. A driver loop emits one of each per
//! iteration to an output sink, pausing between iterations.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use error::{Error, Result};
