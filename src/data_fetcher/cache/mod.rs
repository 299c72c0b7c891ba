pub mod week_cache;

// Re-export week cache types and naming helpers
pub use week_cache::*;
