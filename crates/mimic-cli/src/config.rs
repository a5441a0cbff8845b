//! Configuration vault – reads/writes `~/.mimic/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted user configuration stored in `~/.mimic/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Drive amplitude of the reference mapping policy, in radians.
    /// Configuration, not semantics — no biomechanical meaning is implied.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Extra directory searched when resolving a robot model path, between
    /// the executable directory and `~/Downloads`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_dir: Option<PathBuf>,
}

fn default_amplitude() -> f64 {
    0.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            model_dir: None,
        }
    }
}

/// Return the path to `~/.mimic/config.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
/// Extracted for testability without mutating environment variables.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".mimic").join("config.toml")
}

/// Load the effective config: the file on disk when present, the
/// built-in defaults otherwise.  `MIMIC_*` overrides apply either way,
/// so a fresh install without `~/.mimic/config.toml` still honours them.
pub fn load_effective() -> Result<Config, String> {
    load_effective_from(&config_path())
}

pub(crate) fn load_effective_from(path: &PathBuf) -> Result<Config, String> {
    match load_from(path)? {
        Some(cfg) => Ok(cfg),
        None => {
            let mut cfg = Config::default();
            apply_env_overrides(&mut cfg);
            Ok(cfg)
        }
    }
}

/// Load the config from a specific path.  Returns `None` if the file
/// does not exist.
pub(crate) fn load_from(path: &PathBuf) -> Result<Option<Config>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
    let mut cfg: Config =
        toml::from_str(&raw).map_err(|e| format!("Failed to parse config: {}", e))?;
    apply_env_overrides(&mut cfg);
    Ok(Some(cfg))
}

/// Apply `MIMIC_*` environment variable overrides to `cfg`.
///
/// Supported variables:
///
/// | Variable | Config field |
/// |---|---|
/// | `MIMIC_AMPLITUDE` | `amplitude` |
/// | `MIMIC_MODEL_DIR` | `model_dir` |
pub fn apply_env_overrides(cfg: &mut Config) {
    if let Ok(v) = std::env::var("MIMIC_AMPLITUDE")
        && let Ok(amplitude) = v.parse::<f64>()
    {
        cfg.amplitude = amplitude;
    }
    if let Ok(v) = std::env::var("MIMIC_MODEL_DIR") {
        cfg.model_dir = Some(PathBuf::from(v));
    }
}

/// Save the config to disk, creating `~/.mimic/` if necessary.
pub fn save(cfg: &Config) -> Result<(), String> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub(crate) fn save_to(cfg: &Config, path: &PathBuf) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }
    let raw =
        toml::to_string_pretty(cfg).map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, raw)
        .map_err(|e| format!("Failed to write config at {}: {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; every test that reads or
    // writes MIMIC_* takes this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn roundtrip_default_config() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());

        let cfg = Config::default();
        save_to(&cfg, &path).expect("save");

        let loaded = load_from(&path).expect("load ok").expect("some");
        assert_eq!(loaded.amplitude, 0.5);
        assert_eq!(loaded.model_dir, None);
    }

    #[test]
    fn config_path_points_to_mimic_dir() {
        let p = config_path_for_home("/home/testuser");
        assert!(p.to_string_lossy().contains(".mimic"));
        assert!(p.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn load_from_returns_none_when_missing() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        let result = load_from(&path).expect("no error");
        assert!(result.is_none());
    }

    #[test]
    fn env_override_applies_without_config_file() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = config_path_for_home(&dir.path().to_string_lossy());
        assert!(!path.exists());

        // SAFETY: ENV_LOCK serialises every test that touches MIMIC_*.
        unsafe { std::env::set_var("MIMIC_AMPLITUDE", "0.9") };
        let cfg = load_effective_from(&path).expect("load ok");
        assert_eq!(cfg.amplitude, 0.9);
        unsafe { std::env::remove_var("MIMIC_AMPLITUDE") };
    }

    #[test]
    fn apply_env_overrides_changes_amplitude_and_ignores_garbage() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: ENV_LOCK serialises every test that touches MIMIC_*.
        unsafe { std::env::set_var("MIMIC_AMPLITUDE", "0.25") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.amplitude, 0.25);

        unsafe { std::env::set_var("MIMIC_AMPLITUDE", "not-a-number") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.amplitude, 0.5);
        unsafe { std::env::remove_var("MIMIC_AMPLITUDE") };
    }

    #[test]
    fn apply_env_overrides_changes_model_dir() {
        let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: ENV_LOCK serialises every test that touches MIMIC_*.
        unsafe { std::env::set_var("MIMIC_MODEL_DIR", "/opt/robots") };
        let mut cfg = Config::default();
        apply_env_overrides(&mut cfg);
        assert_eq!(cfg.model_dir, Some(PathBuf::from("/opt/robots")));
        unsafe { std::env::remove_var("MIMIC_MODEL_DIR") };
    }
}
