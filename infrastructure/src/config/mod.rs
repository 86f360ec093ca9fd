//! Configuration document loading for logweave
//!
//! The document overlays the built-in defaults. Candidates, in order:
//!
//! 1. `--config <path>` specified file (must exist)
//! 2. Working directory: `./logs.json`, then `./logs.toml`
//! 3. User config: `$XDG_CONFIG_HOME/logweave/logs.toml`
//! 4. Default values

mod loader;

pub use loader::ConfigLoader;
