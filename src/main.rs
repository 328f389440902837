use tracing::{info, warn};

use lockout_config::logging::LOG_TARGET;
use lockout_config::Config;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    // Load configuration
    let config = match Config::load_with_env(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = lockout_config::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        lockout_config::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        warn!(target: LOG_TARGET, "{e}");
    }

    let options = config.lockout.into_shared();

    info!(
        target: LOG_TARGET,
        allowed_for_new_users = options.allowed_for_new_users,
        default_lockout_duration_secs = options.default_lockout_duration.num_seconds(),
        max_failed_access_attempts = options.max_failed_access_attempts,
        "Lockout policy loaded"
    );
}
