//! Configuration document loader

use figment::{
    Figment,
    providers::{Format, Json, Serialized, Toml},
};
use logweave_application::{ConfigSourceError, LogConfigSource};
use logweave_domain::LogConfiguration;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Well-known document names, looked up in the working directory
const WELL_KNOWN: [&str; 2] = ["logs.json", "logs.toml"];

/// Loads the [`LogConfiguration`] from the first document found.
///
/// The first existing candidate wins; documents are never merged with
/// each other, only with the built-in defaults. A present field replaces
/// its default wholesale (arrays included).
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Loader over the standard candidates, preceded by `explicit` if given
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let mut search_paths: Vec<PathBuf> = WELL_KNOWN.iter().map(PathBuf::from).collect();
        search_paths.extend(Self::global_config_path());
        Self {
            explicit,
            search_paths,
        }
    }

    /// Replace the implicit candidates (the explicit path still comes first).
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> LogConfiguration {
        LogConfiguration::default()
    }

    /// Get the user-level document path
    ///
    /// Returns XDG_CONFIG_HOME/logweave/logs.toml if set,
    /// otherwise falls back to ~/.config/logweave/logs.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("logweave").join("logs.toml"))
    }

    /// The document that [`load`](LogConfigSource::load) would read, if any
    pub fn discover(&self) -> Option<&Path> {
        if let Some(path) = &self.explicit {
            return Some(path);
        }
        self.search_paths
            .iter()
            .find(|path| path.exists())
            .map(PathBuf::as_path)
    }

    /// Parse one document over the defaults.
    ///
    /// `.toml` files are read as TOML, anything else as JSON.
    pub fn load_from(path: &Path) -> Result<LogConfiguration, ConfigSourceError> {
        if !path.exists() {
            return Err(ConfigSourceError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigSourceError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let figment = Figment::from(Serialized::defaults(LogConfiguration::default()));
        let figment = if is_toml(path) {
            figment.merge(Toml::string(&content))
        } else {
            figment.merge(Json::string(&content))
        };

        figment
            .extract()
            .map_err(|e| ConfigSourceError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Print the document locations being considered (for debugging)
    pub fn print_config_sources(&self) {
        println!("Configuration sources (first found wins):");

        if let Some(path) = &self.explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:^7}] Explicit: {}", path.display());
        }

        for path in &self.search_paths {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{mark:^7}] {}", path.display());
        }

        println!("  [       ] Default: built-in defaults");
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

impl LogConfigSource for ConfigLoader {
    fn load(&self) -> Result<LogConfiguration, ConfigSourceError> {
        match self.discover() {
            Some(path) => {
                info!("Loading log configuration from {}", path.display());
                Self::load_from(path)
            }
            None => {
                debug!("No log configuration document found, using defaults");
                Ok(Self::load_defaults())
            }
        }
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
