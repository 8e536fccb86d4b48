//! Configuration loaded from `config.toml`
//!
//! Every section is optional. A missing file yields [`Config::default`];
//! a file that exists but does not parse is an error, so a typo never
//! silently falls back to defaults.
//!
//! ```toml
//! images = "art/"
//!
//! [display]
//! columns = 40
//! rows = 28
//! fps = 60
//!
//! [input]
//! port = 0
//!
//! [highlight]
//! keyword = 9
//!
//! [[palette]]
//! id = 9
//! rgb = "f38ba8"
//! ```

use crate::error::{Error, Result};
use crate::platform::{PaletteId, Rgb};
use crate::presentation::PresentationOptions;
use crate::render::CodePalettes;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "tileshow";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Palette slots to override at startup
    #[serde(default)]
    pub palette: Vec<PaletteEntry>,

    /// Directory holding `<name>.txt` image art
    #[serde(default)]
    pub images: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_columns")]
    pub columns: u16,

    #[serde(default = "default_rows")]
    pub rows: u16,

    /// Frame rate the terminal host paces itself to
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            columns: default_columns(),
            rows: default_rows(),
            fps: default_fps(),
        }
    }
}

fn default_columns() -> u16 {
    40
}

fn default_rows() -> u16 {
    28
}

fn default_fps() -> u32 {
    60
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default)]
    pub port: u8,
}

/// Palette ids for each code token class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightConfig {
    #[serde(default)]
    pub plain: PaletteId,
    #[serde(default = "default_keyword")]
    pub keyword: PaletteId,
    #[serde(default = "default_identifier")]
    pub identifier: PaletteId,
    #[serde(default = "default_string")]
    pub string: PaletteId,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        let palettes = CodePalettes::default();
        HighlightConfig {
            plain: palettes.plain,
            keyword: palettes.keyword,
            identifier: palettes.identifier,
            string: palettes.string,
        }
    }
}

fn default_keyword() -> PaletteId {
    CodePalettes::default().keyword
}

fn default_identifier() -> PaletteId {
    CodePalettes::default().identifier
}

fn default_string() -> PaletteId {
    CodePalettes::default().string
}

impl From<HighlightConfig> for CodePalettes {
    fn from(config: HighlightConfig) -> Self {
        CodePalettes {
            plain: config.plain,
            keyword: config.keyword,
            identifier: config.identifier,
            string: config.string,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteEntry {
    pub id: PaletteId,
    /// `RGB` or `RRGGBB` hex, with or without a leading `#`
    pub rgb: String,
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicitly given path must exist; the default location may not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                other => {
                    debug!("No config file at {:?}, using defaults", other);
                    return Ok(Config::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Config::from_toml(&content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.display.columns == 0 || self.display.rows == 0 {
            return Err(Error::invalid("display size must be at least 1x1"));
        }
        if self.display.fps == 0 {
            return Err(Error::invalid("fps must be positive"));
        }
        self.palette_colours().map(|_| ())
    }

    /// Palette overrides with their colours parsed
    pub fn palette_colours(&self) -> Result<Vec<(PaletteId, Rgb)>> {
        self.palette
            .iter()
            .map(|entry| {
                let hex = entry.rgb.trim_start_matches('#');
                Rgb::from_hex(hex).map(|rgb| (entry.id, rgb)).ok_or_else(|| {
                    Error::invalid(format!(
                        "palette {}: '{}' is not RGB or RRGGBB hex",
                        entry.id, entry.rgb
                    ))
                })
            })
            .collect()
    }

    pub fn presentation_options(&self) -> PresentationOptions {
        PresentationOptions {
            port: self.input.port,
            palettes: self.highlight.into(),
            columns: i32::from(self.display.columns),
        }
    }
}

/// `<config_dir>/tileshow/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
