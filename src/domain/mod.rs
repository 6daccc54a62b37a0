//! Domain types and generation logic
//!
//! This module contains the record types and the three cooperating
//! generators: the user pool and the page/track event generators.

pub mod config_types;
pub mod events;
pub mod generators;
pub mod identifiers;
pub mod provider;
pub mod test_data;
pub mod timestamp;
pub mod types;
pub mod user;
pub mod user_pool;

pub use config_types::*;
pub use events::*;
pub use generators::*;
pub use provider::*;
pub use user::*;
pub use user_pool::*;
