use skeleton_types::{LoaderConfig, LoaderDefaults};
use std::path::Path;

/// Default location of the loader config, relative to the working directory.
pub const CONFIG_PATH: &str = "loading.toml";

/// Parse the `[auto_skeleton]` table from TOML text.
pub fn parse_defaults(contents: &str) -> Result<LoaderDefaults, toml::de::Error> {
    toml::from_str::<LoaderConfig>(contents).map(|config| config.auto_skeleton)
}

/// Read loader defaults from a TOML file.
///
/// A missing or unparseable file is not an error for callers: it is logged
/// and the built-in defaults are returned.
pub fn load_defaults(path: impl AsRef<Path>) -> LoaderDefaults {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_defaults(&contents) {
            Ok(defaults) => {
                tracing::info!(path = %path.display(), "Loaded auto-skeleton defaults");
                defaults
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse loader config; using built-in defaults");
                LoaderDefaults::default()
            }
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Loader config not found; using built-in defaults");
            LoaderDefaults::default()
        }
    }
}
