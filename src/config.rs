// Configuration module for osc
// Resolves environment signals and command-line options into typed settings

mod env;
mod settings;

pub use env::Environment;
pub use settings::{DEFAULT_TIMEOUT_SECS, Options, Settings};
