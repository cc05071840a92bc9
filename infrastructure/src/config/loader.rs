//! Configuration file loader with multi-source merging

use super::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "research-report";
const PROJECT_FILE: &str = "research-report.toml";
const ENV_PREFIX: &str = "REPORT_";

/// Well-known environment variables and the config keys they fill
const WELL_KNOWN_ENV: &[(&str, &str)] = &[
    ("GEMINI_API_KEY", "llm.api_key"),
    ("SERPER_API_KEY", "search.serper_api_key"),
    ("SERPAPI_API_KEY", "search.serpapi_api_key"),
    ("SEARCH_PROVIDER", "search.provider"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Well-known environment keys (`GEMINI_API_KEY`, ...)
    /// 2. `REPORT_`-prefixed environment variables, `__` separating sections
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./research-report.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/research-report/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let config: FileConfig = Self::figment(config_path)
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the merged provider chain without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::merge_env(figment)
    }

    fn merge_env(figment: Figment) -> Figment {
        let mut figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        for &(var, key) in WELL_KNOWN_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment
    }

    /// Load defaults plus environment variables, skipping every file (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, ConfigError> {
        let figment =
            Self::merge_env(Figment::new().merge(Serialized::defaults(FileConfig::default())));
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/research-report/config.toml if set,
    /// otherwise falls back to the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     GEMINI_API_KEY, SERPER_API_KEY, SERPAPI_API_KEY, SEARCH_PROVIDER");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{}", PROJECT_FILE);
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
