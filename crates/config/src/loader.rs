use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::BotConfig;

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "sparkbot.toml",
    "sparkbot.yaml",
    "sparkbot.yml",
    "sparkbot.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<BotConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./sparkbot.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/sparkbot/sparkbot.{toml,yaml,yml,json}` (user-global)
///
/// Returns `BotConfig::default()` if no config file is found.
pub fn discover_and_load() -> BotConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(config) => return config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    BotConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/sparkbot/
    if let Some(dirs) = directories::ProjectDirs::from("", "", "sparkbot") {
        let config_dir = dirs.config_dir();
        for name in CONFIG_FILENAMES {
            let p = config_dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/sparkbot/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "sparkbot").map(|d| d.config_dir().to_path_buf())
}

/// Returns the path of an existing config file, or the default TOML path.
pub fn find_or_default_config_path() -> PathBuf {
    if let Some(path) = find_config_file() {
        return path;
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sparkbot.toml")
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<BotConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn loads_toml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparkbot.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[spark]\ntoken = \"NjM0-token\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.spark.token.expose_secret(), "NjM0-token");
        assert!(!config.spark.token_is_placeholder());
    }

    #[test]
    fn loads_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparkbot.yaml");
        std::fs::write(&path, "server:\n  bind: 0.0.0.0\n  port: 9000\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparkbot.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.spark.token_is_placeholder());
        assert_eq!(config.spark.base_url, "https://api.ciscospark.com");
        assert_eq!(config.spark.request_timeout_secs, 30);
    }

    #[test]
    fn rejects_unsupported_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparkbot.ini");
        std::fs::write(&path, "port = 8080\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
