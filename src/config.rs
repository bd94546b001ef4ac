use crate::events::AppEvent;
use async_channel::Sender;
use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::rgb::FromHexError;
use palette::{Srgb, Srgba, WithAlpha};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use strum::EnumString;
use thiserror::Error;

/// Where the arcs of a node begin, relative to the fan angle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, DeserializeFromStr, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ArcStart {
    /// `90° - angle`: the arcs are centred on the downward axis, between the lines.
    #[default]
    #[strum(serialize = "centered", serialize = "centred", serialize = "c")]
    Centered,
    /// `angle`: the arcs start at the fan angle itself.
    #[strum(serialize = "offset", serialize = "o")]
    Offset,
}

impl ArcStart {
    pub fn start_angle(self, fan_angle: f64) -> f64 {
        match self {
            Self::Centered => 90.0 - fan_angle,
            Self::Offset => fan_angle,
        }
    }
}

/// An sRGB colour written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay, Deref, From, Into)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::<u8>::new(red, green, blue))
    }

    pub fn to_rgba(self) -> Srgba<f64> {
        self.0.into_format::<f64>().with_alpha(1.0)
    }
}

impl FromStr for HexColor {
    type Err = FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::<u8>::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.red, self.0.green, self.0.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub nodes: usize,
    pub lines: usize,
    pub arcs: usize,
    pub fan_angle: f64,
    pub arc_start: ArcStart,
    pub size_factor: f64,
    pub stroke_factor: f64,
    pub delay_ms: u64,
    pub foreground: HexColor,
    pub background: HexColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nodes: 5,
            lines: 2,
            arcs: 3,
            fan_angle: 45.0,
            arc_start: ArcStart::Centered,
            size_factor: 2.9,
            stroke_factor: 90.0,
            delay_ms: 20,
            foreground: HexColor::new(0x67, 0x3A, 0xB7),
            background: HexColor::new(0xBD, 0xBD, 0xBD),
        }
    }
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        let checks = [
            ("nodes", self.nodes >= 1, "must be at least 1"),
            ("lines", self.lines >= 1, "must be at least 1"),
            ("arcs", self.arcs >= 1, "must be at least 1"),
            ("delay_ms", self.delay_ms >= 1, "must be at least 1"),
            ("size_factor", self.size_factor > 0.0, "must be positive"),
            ("stroke_factor", self.stroke_factor > 0.0, "must be positive"),
            (
                "fan_angle",
                self.fan_angle.is_finite() && self.fan_angle > 0.0,
                "must be a positive number",
            ),
        ];
        match checks.into_iter().find(|(_, ok, _)| !*ok) {
            Some((key, _, reason)) => Err(ConfigError::Invalid { key, reason }),
            None => Ok(self),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid value for `{key}`: {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "linearcs", "linearcs")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Explicit path if one was given, the per-user config file otherwise.
pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    explicit.map_or_else(get_config_path, Ok)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("LINEARCS"))
        .build()?;

    s.try_deserialize::<Config>()?.validate()
}

pub fn load_or_default(path: &Path) -> Config {
    load_config(path).unwrap_or_else(|e| {
        log::warn!("Using default configuration: {}", e);
        Config::default()
    })
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("linearcs-test-{}-{}", std::process::id(), name))
            .join("config.toml")
    }

    #[test]
    fn test_arc_start_deserialization() {
        let cases = vec![
            ("\"centered\"", ArcStart::Centered),
            ("\"Centered\"", ArcStart::Centered),
            ("\"CENTRED\"", ArcStart::Centered),
            ("\"c\"", ArcStart::Centered),
            ("\"offset\"", ArcStart::Offset),
            ("\"O\"", ArcStart::Offset),
        ];

        for (json, expected) in cases {
            let deserialized: ArcStart = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_arc_start_angles() {
        assert_eq!(ArcStart::Centered.start_angle(45.0), 45.0);
        assert_eq!(ArcStart::Centered.start_angle(60.0), 30.0);
        assert_eq!(ArcStart::Offset.start_angle(60.0), 60.0);
    }

    #[test]
    fn test_hex_color_roundtrip_text() {
        let color: HexColor = serde_json::from_str("\"#673ab7\"").unwrap();
        assert_eq!(color, HexColor::new(0x67, 0x3A, 0xB7));
        assert_eq!(color.to_string(), "#673AB7");
        assert!("not-a-color".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_hex_color_to_rgba() {
        let rgba = HexColor::new(255, 0, 0).to_rgba();
        assert_eq!(rgba.into_components(), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = scratch_path("partial");
        fs_err::create_dir_all(path.parent().unwrap()).unwrap();
        fs_err::write(&path, "fan_angle = 60.0\narc_start = \"offset\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.fan_angle, 60.0);
        assert_eq!(config.arc_start, ArcStart::Offset);
        assert_eq!(config.nodes, 5);
        assert_eq!(config.delay(), Duration::from_millis(20));

        let _ = fs_err::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = load_config(&scratch_path("missing")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let path = scratch_path("invalid");
        fs_err::create_dir_all(path.parent().unwrap()).unwrap();
        fs_err::write(&path, "nodes = 0\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Invalid { key: "nodes", .. })
        ));
        assert_eq!(load_or_default(&path), Config::default());

        let _ = fs_err::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_fan_angle_must_be_positive() {
        for fan_angle in [0.0, -45.0, f64::NAN, f64::INFINITY] {
            let config = Config {
                fan_angle,
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid { key: "fan_angle", .. })
            ));
        }

        let wide = Config {
            fan_angle: 60.0,
            ..Config::default()
        };
        assert!(wide.validate().is_ok());
    }

    #[test]
    fn test_write_default_config_keeps_existing_file() {
        let path = scratch_path("write");
        let written = write_default_config(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "nodes = 3\n").unwrap();
        write_default_config(&path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "nodes = 3\n");

        let _ = fs_err::remove_dir_all(path.parent().unwrap());
    }
}
