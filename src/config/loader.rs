// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("multipong");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        load_config_from(&config_path)
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Load configuration from an existing file. A file that fails to parse
/// yields the defaults rather than an error.
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_config(&contents))
}

pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config file, using defaults");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Multipong Configuration File\n\
         # Edit this file to customize game behavior\n\
         #\n\
         # Key binding format: \"Up\", \"Down\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"W\", \"S\", \"P\"\n\
         #\n\
         # AI difficulties: \"easy\", \"medium\", \"hard\"\n\
         # Presets can be tuned with error_range, speed_multiplier and\n\
         # relax_when_away under [ai]\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    tracing::info!(path = %path.display(), "created default config file");
    Ok(())
}
