//! Test data constants for consistent testing
//!
//! This module centralizes the fixed values used throughout the test suite
//! so fixtures stay consistent and easy to change.

/// User agent strings for testing
pub mod user_agents {
    pub const FIREFOX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
    pub const CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
}

/// IPv4 addresses for testing
pub mod ips {
    pub const PRIVATE_1: &str = "10.0.0.1";
    pub const PRIVATE_2: &str = "192.168.1.20";
}

/// Candidate page URLs for testing
pub mod urls {
    pub const SHOP: &str = "https://www.shop.example.com/";
    pub const BLOG: &str = "https://blog.example.org/";
    pub const DOCS: &str = "https://docs.example.net/";
}

/// RNG seeds for deterministic providers
pub mod seeds {
    pub const FIXED: u64 = 42;
    pub const ALTERNATE: u64 = 7;
}

/// Reference instants pinned as "now" in deterministic providers
pub mod reference_times {
    pub const MID_YEAR: &str = "2026-06-15T12:00:00Z";
    pub const NEW_YEAR: &str = "2026-01-01T00:00:00Z";
}
