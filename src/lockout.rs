//! Account lockout options.
//!
//! [`LockoutOptions`] is a plain settings value read by whatever component
//! enforces lockouts. It performs no validation: a negative duration or a
//! negative attempt count is stored as given. Consumers that need sane values
//! should check them at startup (see [`crate::Config::validate`]).

use std::sync::Arc;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Whether new accounts take part in lockout tracking by default.
pub const DEFAULT_ALLOWED_FOR_NEW_USERS: bool = true;

/// Default lockout duration (30 seconds).
pub const DEFAULT_LOCKOUT_DURATION_SECS: i64 = 30;

/// Failed attempts tolerated before lockout by default.
pub const DEFAULT_MAX_FAILED_ACCESS_ATTEMPTS: i32 = 5;

/// Options shared read-only after startup.
pub type SharedLockoutOptions = Arc<LockoutOptions>;

/// Lockout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutOptions {
    /// Whether a newly created account can be locked out.
    #[serde(default = "default_allowed_for_new_users")]
    pub allowed_for_new_users: bool,
    /// How long an account stays locked once a lockout is triggered.
    #[serde(
        rename = "default_lockout_duration_secs",
        with = "duration_secs",
        default = "default_lockout_duration"
    )]
    pub default_lockout_duration: TimeDelta,
    /// Consecutive failed attempts allowed before the account is locked.
    #[serde(default = "default_max_failed_access_attempts")]
    pub max_failed_access_attempts: i32,
}

fn default_allowed_for_new_users() -> bool {
    DEFAULT_ALLOWED_FOR_NEW_USERS
}

fn default_lockout_duration() -> TimeDelta {
    TimeDelta::seconds(DEFAULT_LOCKOUT_DURATION_SECS)
}

fn default_max_failed_access_attempts() -> i32 {
    DEFAULT_MAX_FAILED_ACCESS_ATTEMPTS
}

impl Default for LockoutOptions {
    fn default() -> Self {
        Self {
            allowed_for_new_users: default_allowed_for_new_users(),
            default_lockout_duration: default_lockout_duration(),
            max_failed_access_attempts: default_max_failed_access_attempts(),
        }
    }
}

impl LockoutOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether new users can be locked out.
    pub fn with_allowed_for_new_users(mut self, allowed: bool) -> Self {
        self.allowed_for_new_users = allowed;
        self
    }

    /// Set the lockout duration.
    pub fn with_default_lockout_duration(mut self, duration: TimeDelta) -> Self {
        self.default_lockout_duration = duration;
        self
    }

    /// Set the failed attempt threshold.
    pub fn with_max_failed_access_attempts(mut self, attempts: i32) -> Self {
        self.max_failed_access_attempts = attempts;
        self
    }

    /// Freeze the options for read-only sharing.
    pub fn into_shared(self) -> SharedLockoutOptions {
        Arc::new(self)
    }
}

/// Serializes a [`TimeDelta`] as signed whole seconds.
///
/// Durations with a sub-second part are refused rather than truncated.
mod duration_secs {
    use chrono::TimeDelta;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
        if value.subsec_nanos() != 0 {
            return Err(S::Error::custom(format!(
                "duration {value} is not a whole number of seconds"
            )));
        }
        serializer.serialize_i64(value.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        TimeDelta::try_seconds(secs)
            .ok_or_else(|| D::Error::custom(format!("duration of {secs} seconds is out of range")))
    }
}
