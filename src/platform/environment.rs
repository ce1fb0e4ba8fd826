//! Build-mode detection and environment-sourced analytics configuration.

use std::env;
use std::fmt;
use std::fs;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::str::FromStr;

use crate::analytics::AnalyticsConfig;

pub const BUILD_MODE_ENV: &str = "WEB_ANALYTICS_ENV";
pub const NODE_ENV: &str = "NODE_ENV";
pub const CONFIG_ENV: &str = "WEB_ANALYTICS_CONFIG";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuildMode {
    Development,
    #[default]
    Production,
}

impl BuildMode {
    pub fn from_development_flag(is_development: bool) -> Self {
        if is_development {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBuildMode(pub String);

impl fmt::Display for UnknownBuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown build mode \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownBuildMode {}

impl FromStr for BuildMode {
    type Err = UnknownBuildMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(UnknownBuildMode(other.to_string())),
        }
    }
}

/// Resolves the build mode from `WEB_ANALYTICS_ENV`, then `NODE_ENV`, defaulting to production.
///
/// A variable holding an unrecognized value is ignored and the next source is consulted.
pub fn build_mode() -> BuildMode {
    resolve_build_mode(env::var(BUILD_MODE_ENV).ok(), env::var(NODE_ENV).ok())
}

pub fn is_development_build() -> bool {
    build_mode().is_development()
}

fn resolve_build_mode(explicit: Option<String>, node_env: Option<String>) -> BuildMode {
    for (source, raw) in [(BUILD_MODE_ENV, explicit), (NODE_ENV, node_env)] {
        let Some(raw) = raw else { continue };
        match raw.parse::<BuildMode>() {
            Ok(mode) => return mode,
            Err(err) => log::debug!("ignoring {source}: {err}"),
        }
    }
    BuildMode::default()
}

/// Reads the analytics config from `WEB_ANALYTICS_CONFIG`, which holds inline JSON or a path
/// to a JSON file. Returns `None` when the variable is unset or cannot be parsed.
pub fn analytics_config_from_env() -> Option<AnalyticsConfig> {
    let raw = env::var(CONFIG_ENV).ok()?;
    let config = parse_config_source(&raw);
    if config.is_none() {
        log::warn!("{CONFIG_ENV} is set but does not hold a usable analytics config");
    }
    config
}

fn parse_config_source(raw: &str) -> Option<AnalyticsConfig> {
    if raw.trim_start().starts_with('{') {
        return AnalyticsConfig::from_json_str(raw)
            .map_err(|err| log::warn!("{err}"))
            .ok();
    }

    let path = treat_as_path(raw)?;
    let contents = fs::read_to_string(&path).ok()?;
    AnalyticsConfig::from_json_str(&contents)
        .map_err(|err| log::warn!("{path}: {err}"))
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn treat_as_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let path = Path::new(trimmed);
    if path.exists() {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(target_arch = "wasm32")]
fn treat_as_path(_raw: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_build_mode_aliases() {
        assert_eq!("development".parse::<BuildMode>(), Ok(BuildMode::Development));
        assert_eq!(" DEV ".parse::<BuildMode>(), Ok(BuildMode::Development));
        assert_eq!("Production".parse::<BuildMode>(), Ok(BuildMode::Production));
        assert_eq!("prod".parse::<BuildMode>(), Ok(BuildMode::Production));
        assert_eq!(
            "staging".parse::<BuildMode>(),
            Err(UnknownBuildMode("staging".into()))
        );
    }

    #[test]
    fn explicit_mode_wins_over_node_env() {
        assert_eq!(
            resolve_build_mode(Some("production".into()), Some("development".into())),
            BuildMode::Production
        );
        assert_eq!(
            resolve_build_mode(Some("dev".into()), Some("production".into())),
            BuildMode::Development
        );
    }

    #[test]
    fn unknown_values_fall_through() {
        assert_eq!(
            resolve_build_mode(Some("staging".into()), Some("development".into())),
            BuildMode::Development
        );
        assert_eq!(
            resolve_build_mode(Some("staging".into()), Some("test".into())),
            BuildMode::Production
        );
    }

    #[test]
    fn defaults_to_production() {
        assert_eq!(resolve_build_mode(None, None), BuildMode::Production);
        assert!(!BuildMode::default().is_development());
        assert_eq!(BuildMode::from_development_flag(true), BuildMode::Development);
    }

    #[test]
    fn build_mode_reads_process_env() {
        env::set_var(BUILD_MODE_ENV, "development");
        assert!(is_development_build());
        env::set_var(BUILD_MODE_ENV, "prod");
        assert_eq!(build_mode(), BuildMode::Production);
        env::remove_var(BUILD_MODE_ENV);
    }

    #[test]
    fn parse_config_source_accepts_files_and_json() {
        let inline = parse_config_source(r#"{"enable":true,"google":{"measurementId":"G-1"}}"#)
            .unwrap();
        assert!(inline.enable);
        assert_eq!(inline.google.unwrap().measurement_id, "G-1");

        let mut path = env::temp_dir();
        path.push(format!(
            "web_analytics_env_test_{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::write(&path, r#"{"analytics":{"enable":true,"baidu":{"projectId":"bd"}}}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();
        let from_file = parse_config_source(&path_str).unwrap();
        assert_eq!(from_file.baidu.unwrap().project_id, "bd");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn parse_config_source_rejects_garbage() {
        assert!(parse_config_source("{ not json").is_none());
        assert!(parse_config_source("/definitely/not/a/config.json").is_none());
    }
}
