//! # Shared Core
//!
//! Utilities shared by backend services, re-exported from one place:
//!
//! - [`validation`]: declarative field validation with `#[derive(Validate)]`;
//! - [`config`]: string key/value configuration with typed accessors;
//! - [`http`]: a JSON HTTP client and response builders;
//! - [`providers`]: injectable ID generators and clocks;
//! - [`logging`]: `tracing` subscriber bootstrap driven by [`config::Config`].
//!
//! `#[derive(Validate)]` expands to paths under `::shared_core_validation`.
//! Crates that only depend on `shared-core` point the derive at the
//! re-export instead:
//!
//! ```
//! use shared_core::validation::{FieldValidator, Validate};
//!
//! #[derive(Validate)]
//! #[validate(crate = "shared_core::validation")]
//! pub struct Signup {
//!     #[validate("required,min=8,pattern=[0-9],pattern=[a-z]")]
//!     pub password: String,
//! }
//!
//! let signup = Signup { password: "hunter22".into() };
//! assert!(FieldValidator::new().validate(&signup).is_ok());
//! ```
//!
//! ```no_run
//! use shared_core::config::Config;
//! use shared_core::providers::{IdGenerator, PrefixedIdGenerator};
//!
//! let mut config = Config::new();
//! config.load_from_env();
//! shared_core::logging::init(&config)?;
//!
//! let ids = PrefixedIdGenerator::new("req");
//! tracing::info!(request_id = %ids.generate(), "ready");
//! # Ok::<(), shared_core::logging::LoggingError>(())
//! ```

pub mod logging;

pub use shared_core_config as config;
pub use shared_core_http as http;
pub use shared_core_providers as providers;
pub use shared_core_validation as validation;

pub mod prelude {
    pub use shared_core_config::Config;
    pub use shared_core_providers::{IdGenerator, TimeProvider};
    pub use shared_core_validation::prelude::*;
}
