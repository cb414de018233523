//! Configuration schema and file loading for sparkbot.

pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, find_or_default_config_path, load_config},
    schema::{BotConfig, ServerConfig},
};
