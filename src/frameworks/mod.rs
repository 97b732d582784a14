// Frameworks layer: config file IO and runtime bootstrap.

pub mod config;
pub mod host;
