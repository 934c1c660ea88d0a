//! whosthere observability — tracing subscriber setup.
//!
//! Builds one global subscriber from an [ObservabilityConfig]: an env filter,
//! an optional console `fmt` layer, and an optional sink layer that forwards
//! each formatted event as a single line (used by the TUI log screen, since
//! the TUI owns the terminal while it runs).
//!
//! ```no_run
//! use std::sync::Arc;
//! use whosthere_observability::{init, ObservabilityConfig};
//!
//! let sink = Arc::new(|line: String| eprintln!("{line}"));
//! let config = ObservabilityConfig::from_env()
//!     .with_console(false)
//!     .with_log_sink(sink);
//! init(config)?;
//! tracing::info!("ready");
//! # Ok::<(), whosthere_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `WHOSTHERE_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod subscriber;
mod tui_log_layer;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use subscriber::init;
