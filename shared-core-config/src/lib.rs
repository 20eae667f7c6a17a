//! String key/value configuration with typed accessors.
//!
//! ```
//! use std::time::Duration;
//! use shared_core_config::Config;
//!
//! let mut config = Config::new();
//! config.set("PORT", "8080");
//! config.set("TIMEOUT", "1m30s");
//! config.set("ALLOWED_ORIGINS", "a.example, b.example,,");
//!
//! assert_eq!(config.get_int("PORT")?, 8080);
//! assert_eq!(config.get_duration("TIMEOUT")?, Duration::from_secs(90));
//! assert_eq!(config.get_string_list("ALLOWED_ORIGINS"), ["a.example", "b.example"]);
//! assert!(!config.get_bool_or("DEBUG", false));
//! config.validate(["PORT", "TIMEOUT"])?;
//! # Ok::<(), shared_core_config::ConfigError>(())
//! ```

mod config;
mod duration;
mod error;

pub use config::Config;
pub use duration::{parse_duration, DurationError};
pub use error::{ConfigError, ValueError};
