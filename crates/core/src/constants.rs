/// Constants used throughout the pipekit codebase
// Highest operator count that still gets a fully typed signature
pub const MAX_TYPED_OPERATORS: usize = 20;

// Tracing target for every event emitted by this crate
pub const LOG_TARGET: &str = "pipekit";

// Environment variable read by the test subscriber
pub const LOG_ENV_VAR: &str = "PIPEKIT_LOG";

// Filter used when the environment variable is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
