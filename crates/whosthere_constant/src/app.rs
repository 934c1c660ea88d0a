//! Application metadata constants

pub const APP_NAME: &str = "whosthere";
pub const DESCRIPTION: &str = "Local network discovery tool with a modern TUI interface.";
pub const LONG_DESCRIPTION: &str = "Local network discovery tool with a modern TUI interface.
Discover, explore, and understand your Local Area Network in an intuitive way.

Knock Knock... who's there? 🚪";

/// Directory name for whosthere config within the platform config dir
pub const CONFIG_DIR: &str = "whosthere";
/// Config file name within CONFIG_DIR
pub const CONFIG_FILE: &str = "config.json";
/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "WHOSTHERE_CONFIG";
