use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level luach configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Output formatting settings.
    #[serde(default)]
    pub format: FormatToml,
}

/// Formatting options for printed dates and numerals.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    /// Prefix full Hebrew years with the ה' millennium marker.
    #[serde(default = "default_true")]
    pub millennium_prefix: bool,

    /// Punctuate gematria numerals with geresh/gershayim.
    #[serde(default = "default_true")]
    pub punctuation: bool,

    /// Print the Gregorian-side forms alongside a conversion.
    #[serde(default = "default_true")]
    pub show_gregorian: bool,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            millennium_prefix: true,
            punctuation: true,
            show_gregorian: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Loads configuration.
///
/// With an explicit path the file must exist and parse. Without one, a
/// `luach.toml` in the working directory is used when present, and the
/// built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<LuachConfig> {
    match path {
        Some(p) => read(p),
        None => {
            let default = Path::new("luach.toml");
            if default.exists() {
                read(default)
            } else {
                Ok(LuachConfig::default())
            }
        }
    }
}

fn read(path: &Path) -> Result<LuachConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: LuachConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(config)
}
