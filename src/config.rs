//! Configuration management for the PDF Library server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Sections shipped with the library when `LIBRARY_SECTIONS` is unset.
/// Each label doubles as its folder name.
pub const DEFAULT_SECTIONS: &[&str] = &[
    "Current Affairs",
    "Static GK",
    "Geography",
    "History",
    "Advanced Maths",
    "Arithmatic Maths",
    "Science",
    "Polity",
    "Computer",
    "English",
    "Reasoning",
    "Economics",
];

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_MB: usize = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub library: LibraryConfig,
    pub render: RenderMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    pub base_dir: PathBuf,
    pub sections: Vec<SectionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    pub label: String,
    pub folder: String,
}

impl SectionConfig {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            folder: label.clone(),
            label,
        }
    }
}

/// Requested rendering mode, as read from `PDF_RENDERING`.
///
/// Whether rendering actually happens also depends on the `render` feature;
/// see [`crate::pdf::RenderCapability::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Auto,
    On,
    Off,
}

impl RenderMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(RenderMode::Auto),
            "on" | "true" | "1" => Some(RenderMode::On),
            "off" | "false" | "0" => Some(RenderMode::Off),
            _ => None,
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    DEFAULT_SECTIONS.iter().map(|s| SectionConfig::new(*s)).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            },
            library: LibraryConfig {
                base_dir: PathBuf::from("pdfs"),
                sections: default_sections(),
            },
            render: RenderMode::Auto,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Invalid values fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_MB") {
            Some(raw) => match raw
                .parse::<usize>()
                .ok()
                .filter(|mb| *mb > 0)
                .and_then(|mb| mb.checked_mul(1024 * 1024))
            {
                Some(bytes) => bytes,
                None => {
                    tracing::warn!("Invalid MAX_UPLOAD_MB {:?}, using {}", raw, DEFAULT_MAX_UPLOAD_MB);
                    defaults.server.max_upload_bytes
                }
            },
            None => defaults.server.max_upload_bytes,
        };

        let sections = match lookup("LIBRARY_SECTIONS") {
            Some(raw) => {
                let parsed = parse_sections(&raw);
                if parsed.is_empty() {
                    tracing::warn!("LIBRARY_SECTIONS is empty, using default sections");
                    default_sections()
                } else {
                    parsed
                }
            }
            None => default_sections(),
        };

        let render = match lookup("PDF_RENDERING") {
            Some(raw) => RenderMode::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Invalid PDF_RENDERING {:?}, using auto", raw);
                RenderMode::Auto
            }),
            None => RenderMode::Auto,
        };

        Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port,
                max_upload_bytes,
            },
            library: LibraryConfig {
                base_dir: lookup("LIBRARY_BASE_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.library.base_dir),
                sections,
            },
            render,
        }
    }
}

/// Parse a comma-separated section list, dropping blanks and duplicates.
fn parse_sections(raw: &str) -> Vec<SectionConfig> {
    let mut sections: Vec<SectionConfig> = Vec::new();
    for label in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if sections.iter().any(|s| s.label == label) {
            continue;
        }
        sections.push(SectionConfig::new(label));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.library.base_dir, PathBuf::from("pdfs"));
        assert_eq!(config.library.sections.len(), DEFAULT_SECTIONS.len());
        assert_eq!(config.library.sections[0].label, "Current Affairs");
        assert_eq!(config.library.sections[0].folder, "Current Affairs");
        assert_eq!(config.render, RenderMode::Auto);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "8080"),
            ("LIBRARY_BASE_DIR", "/srv/notes"),
            ("LIBRARY_SECTIONS", "History, Science ,,History"),
            ("MAX_UPLOAD_MB", "5"),
            ("PDF_RENDERING", "off"),
        ]));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.library.base_dir, PathBuf::from("/srv/notes"));
        assert_eq!(
            config.library.sections,
            vec![SectionConfig::new("History"), SectionConfig::new("Science")]
        );
        assert_eq!(config.render, RenderMode::Off);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "not-a-port"),
            ("MAX_UPLOAD_MB", "0"),
            ("LIBRARY_SECTIONS", " , "),
            ("PDF_RENDERING", "sometimes"),
        ]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_upload_bytes, 200 * 1024 * 1024);
        assert_eq!(config.library.sections.len(), DEFAULT_SECTIONS.len());
        assert_eq!(config.render, RenderMode::Auto);

        let huge = usize::MAX.to_string();
        let config = Config::from_lookup(lookup_from(&[("MAX_UPLOAD_MB", huge.as_str())]));
        assert_eq!(config.server.max_upload_bytes, 200 * 1024 * 1024);
    }
}
