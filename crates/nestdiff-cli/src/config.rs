use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use nestdiff_render::RenderOptions;

use crate::cli::{Cli, OutputFormat};

/// Effective settings for one run: defaults, then the config file, then
/// command-line flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub strict: bool,
    pub format: OutputFormat,
    #[serde(flatten)]
    pub render: RenderOptions,
}

impl Settings {
    /// Load a TOML settings file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolve the settings for `cli`.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.strict |= cli.strict;
        settings.render.no_second |= cli.no_second || cli.second.is_none();
        if let Some(title) = &cli.title1 {
            settings.render.title1 = title.clone();
        }
        if let Some(title) = &cli.title2 {
            settings.render.title2 = title.clone();
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        Ok(settings)
    }
}
