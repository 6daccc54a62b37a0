//! Log message constants
//!
//! This module centralizes the log messages emitted while generating so
//! wording stays consistent between the binary and the library.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting synthetic event generator";
    pub const FINISHED: &str = "Synthetic event generation finished";
    pub const SEEDED_RNG: &str = "Using seeded random source";
    pub const ENTROPY_RNG: &str = "Using entropy-seeded random source";
}

/// User pool messages
pub mod pool {
    pub const INITIALIZED: &str = "User pool initialized";
    pub const SHORT_OF_SEED_COUNT: &str = "User pool holds fewer users than requested";
}

/// Driver loop messages
pub mod driver {
    pub const RUN_STARTED: &str = "Driver run started";
    pub const GENERATORS_BUILT: &str = "Event generators built";
    pub const ITERATION_EMITTED: &str = "Iteration emitted page and track events";
    pub const RUN_FAILED: &str = "Driver run aborted";
    pub const RUN_COMPLETED: &str = "Driver run completed";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}
