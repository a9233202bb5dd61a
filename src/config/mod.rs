// Configuration module for Multipong
// Handles loading and managing game configuration from TOML file

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from};
pub use types::{AIConfig, BallConfig, Config, FieldConfig, KeyBindings, PaddleConfig};
