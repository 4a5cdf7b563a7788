use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind: String,
    /// Page templates, and overrides for the bundled map fragments
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Reload templates when files under `template_dir` change
    pub watch_templates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
            watch_templates: true,
        }
    }
}

impl Config {
    /// Reads `MAPTAGS_*` variables, falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::default();
        Self {
            bind: lookup("MAPTAGS_BIND").unwrap_or(defaults.bind),
            template_dir: lookup("MAPTAGS_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            static_dir: lookup("MAPTAGS_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            watch_templates: lookup("MAPTAGS_WATCH_TEMPLATES")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.watch_templates),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off" | ""
    )
}

// Read once; main loads `.env` before anything touches this.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
