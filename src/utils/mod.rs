/// TOML configuration with environment overrides.
pub mod config;
/// Cancellable wrappers for in-flight API calls.
pub mod task;
