
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads. Cleared by `setup_config_dir` so a
/// developer's shell cannot leak into a test.
const OVERRIDE_VARS: &[&str] = &[
    "UA_SERVER_HOST",
    "UA_SERVER_PORT",
    "UA_DATABASE_PATH",
    "UA_DATABASE_URL",
    "UA_DATABASE_MAX_CONNECTIONS",
    "UA_DATABASE_CONNECT_ATTEMPTS",
    "UA_DATABASE_CONNECT_DELAY_MS",
    "UA_LOG_LEVEL",
    "UA_LOG_COLORED",
    "UA_LOG_FILE",
];

/// Snapshot of environment variables, put back on drop.
/// Tests touching the environment must be `#[serial]`.
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn snapshot(keys: &[&'static str]) -> Self {
        Self {
            saved: keys.iter().map(|&k| (k, env::var(k).ok())).collect(),
        }
    }

    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::snapshot(&[key]);
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { env::set_var(key, value) };
        guard
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        let guard = Self::snapshot(&[key]);
        unsafe { env::remove_var(key) };
        guard
    }

    /// Point UA_CONFIG_DIR at `dir` and clear every override
    fn isolated(dir: &str) -> Self {
        let mut keys = vec![crate::CONFIG_DIR_ENV];
        keys.extend_from_slice(OVERRIDE_VARS);
        let guard = Self::snapshot(&keys);
        unsafe {
            env::set_var(crate::CONFIG_DIR_ENV, dir);
            for key in OVERRIDE_VARS {
                env::remove_var(key);
            }
        }
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Reverse order so a key saved twice ends at its oldest value
        for (key, original) in self.saved.iter().rev() {
            unsafe {
                match original {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

/// Fresh temp config dir with no UA_* overrides in effect
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::isolated(temp.path().to_str().unwrap());
    (temp, guard)
}
