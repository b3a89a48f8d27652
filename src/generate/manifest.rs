//! JSON manifest of generated sprites for the asset importer

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::plan::PlannedSprite;
use crate::constants::SPRITE_SIZE;

/// Everything written by one run; contains no timestamps so reruns match
#[derive(Debug, Serialize)]
pub struct SpriteManifest<'a> {
    pub sprite_size: u32,
    pub format: &'static str,
    pub sprites: &'a [PlannedSprite],
}

impl<'a> SpriteManifest<'a> {
    pub fn new(sprites: &'a [PlannedSprite]) -> Self {
        Self {
            sprite_size: SPRITE_SIZE,
            format: "png-rgba8",
            sprites,
        }
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write manifest {}", path.display()))
    }
}
