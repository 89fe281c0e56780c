use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "Ramaera Industries";
pub const DEFAULT_AUTOPLAY_SECS: u64 = 5;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub static_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// Alternate slide deck; the built-in table is used when unset.
    pub slides_path: Option<PathBuf>,
    pub autoplay_period: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            static_dir: PathBuf::from("./static"),
            assets_dir: PathBuf::from("./assets"),
            slides_path: None,
            autoplay_period: Duration::from_secs(DEFAULT_AUTOPLAY_SECS),
        }
    }
}

impl AppConfig {
    /// Read the process environment. Load `.env` first if it should count.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(name) = get("APP_NAME") {
            config.app_name = name;
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        config.slides_path = get("SLIDES_PATH").map(PathBuf::from);

        match get("AUTOPLAY_SECS").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs >= 1 => config.autoplay_period = Duration::from_secs(secs),
            Some(Ok(secs)) => {
                log::warn!("AUTOPLAY_SECS must be at least 1 (got {secs}), using {DEFAULT_AUTOPLAY_SECS}");
            }
            Some(Err(e)) => {
                log::warn!("AUTOPLAY_SECS is not a number ({e}), using {DEFAULT_AUTOPLAY_SECS}");
            }
            None => {}
        }

        config
    }
}
