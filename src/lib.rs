//! Account lockout options.
//!
//! [`LockoutOptions`] holds the settings an authentication layer uses to lock
//! accounts after repeated failed logins. [`Config`] loads them from TOML and
//! the environment at startup.

pub mod config;
pub mod error;
pub mod lockout;
pub mod logging;

pub use config::{Config, LoggingConfig};
pub use error::{LockoutError, Result};
pub use lockout::{
    LockoutOptions, SharedLockoutOptions, DEFAULT_ALLOWED_FOR_NEW_USERS,
    DEFAULT_LOCKOUT_DURATION_SECS, DEFAULT_MAX_FAILED_ACCESS_ATTEMPTS,
};
