//! Centralized path definitions for docval
//!
//! docval only touches one file, the optional user configuration:
//!
//! ```text
//! ~/.config/docval/            # platform config dir on other systems
//! └── config.toml              # default document type, output preferences
//! ```

use std::path::PathBuf;

/// Config directory name
const GLOBAL_DIR: &str = "docval";

/// Config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the docval config directory.
///
/// Returns `~/.config/docval/` on Linux. Falls back to `~/.docval/` when the
/// platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".docval"),
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
