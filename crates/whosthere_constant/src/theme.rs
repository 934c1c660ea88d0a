//! Theme defaults.

/// Theme used when neither the command line nor the config file names one.
pub const DEFAULT_THEME: &str = "default";
