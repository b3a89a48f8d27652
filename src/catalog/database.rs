//! Sprite catalog - default tables, TOML loading, and file generation

use anyhow::{Context, Result, bail};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::types::{Habitat, PartDefinition, Rgb, ShapeKind, SizeClass};
use crate::generate::skeleton_file_name;

/// All configuration tables the generator enumerates
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCatalog {
    pub habitats: Vec<Habitat>,
    pub size_classes: Vec<SizeClass>,
    pub parts: Vec<PartDefinition>,
}

/// On-disk layout; part shapes are optional and classified on load
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    habitats: Vec<Habitat>,
    size_classes: Vec<SizeClass>,
    parts: Vec<PartEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PartEntry {
    name: String,
    color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shape: Option<ShapeKind>,
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl SpriteCatalog {
    /// Built-in tables
    pub fn default_catalog() -> Self {
        let habitat = |name: &str, color: Rgb| Habitat {
            name: name.to_string(),
            color,
        };
        let size = |name: &str, scale: f64| SizeClass {
            name: name.to_string(),
            scale,
        };

        Self {
            habitats: vec![
                habitat("Forest", [34, 139, 34]),
                habitat("Desert", [210, 180, 140]),
                habitat("Tundra", [176, 224, 230]),
                habitat("Swamp", [85, 107, 47]),
                habitat("Mountain", [139, 137, 137]),
                habitat("Ocean", [0, 105, 148]),
            ],
            size_classes: vec![
                size("Tiny", 0.4),
                size("Small", 0.6),
                size("Medium", 0.8),
                size("Large", 1.0),
                size("Giant", 1.0),
            ],
            parts: vec![
                PartDefinition::new("FireWings", [255, 69, 0]),
                PartDefinition::new("FireTail", [255, 140, 0]),
                PartDefinition::new("RockArmor", [105, 105, 105]),
                PartDefinition::new("IceHorns", [135, 206, 250]),
                PartDefinition::new("PoisonSpikes", [124, 252, 0]),
                PartDefinition::new("LightningBolt", [255, 255, 0]),
                PartDefinition::new("ShadowCloak", [47, 79, 79]),
                PartDefinition::new("HealingAura", [255, 182, 193]),
            ],
        }
    }

    /// Load the catalog from a TOML file, or use the built-in tables when the
    /// file does not exist. A present but broken file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "No catalog file at {}, using built-in tables",
                path.display()
            );
            return Ok(Self::default_catalog());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::parse(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        info!(
            "Loaded catalog from {}: {} habitats, {} size classes, {} parts",
            path.display(),
            catalog.habitats.len(),
            catalog.size_classes.len(),
            catalog.parts.len()
        );
        Ok(catalog)
    }

    /// Parse and validate catalog TOML
    pub fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let catalog = Self {
            habitats: file.habitats,
            size_classes: file.size_classes,
            parts: file
                .parts
                .into_iter()
                .map(|entry| PartDefinition {
                    shape: entry
                        .shape
                        .unwrap_or_else(|| ShapeKind::classify(&entry.name)),
                    name: entry.name,
                    color: entry.color,
                })
                .collect(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_toml(&self) -> Result<String> {
        let file = CatalogFile {
            habitats: self.habitats.clone(),
            size_classes: self.size_classes.clone(),
            parts: self
                .parts
                .iter()
                .map(|part| PartEntry {
                    name: part.name.clone(),
                    color: part.color,
                    shape: Some(part.shape),
                })
                .collect(),
        };
        let body = toml::to_string_pretty(&file)?;
        Ok(format!(
            "# Placeholder sprite catalog\n\
             # habitats x size_classes -> S_<habitat>_<size>_Body.png\n\
             # parts -> S_<part>.png (shape: {})\n\n{}",
            ShapeKind::ALL.map(|k| k.as_str()).join(" | "),
            body
        ))
    }

    /// Write the catalog as TOML, creating parent directories
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write catalog {}", path.display()))?;
        Ok(())
    }

    /// Check the tables are usable for filename generation
    pub fn validate(&self) -> Result<()> {
        check_names("habitats", self.habitats.iter().map(|h| h.name.as_str()))?;
        check_names(
            "size_classes",
            self.size_classes.iter().map(|s| s.name.as_str()),
        )?;
        check_names("parts", self.parts.iter().map(|p| p.name.as_str()))?;

        for size in &self.size_classes {
            if !size.scale.is_finite() || size.scale <= 0.0 || size.scale > 1.0 {
                bail!(
                    "size_classes: '{}' has scale {}, expected a value in (0, 1]",
                    size.name,
                    size.scale
                );
            }
        }

        // '_' is a legal name character, so distinct pairs can share a filename
        let mut skeleton_files: HashMap<String, (&str, &str)> = HashMap::new();
        for habitat in &self.habitats {
            for size in &self.size_classes {
                let file = skeleton_file_name(&habitat.name, &size.name);
                if let Some((other_habitat, other_size)) =
                    skeleton_files.insert(file.clone(), (habitat.name.as_str(), size.name.as_str()))
                {
                    bail!(
                        "habitat '{}' + size '{}' and habitat '{}' + size '{}' both map to {}",
                        other_habitat,
                        other_size,
                        habitat.name,
                        size.name,
                        file
                    );
                }
            }
        }
        Ok(())
    }

    /// Number of sprites a full run writes
    pub fn sprite_count(&self) -> usize {
        self.habitats.len() * self.size_classes.len() + self.parts.len()
    }
}

fn check_names<'a>(table: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    let mut count = 0;
    for name in names {
        count += 1;
        if name.is_empty() {
            bail!("{}: entry {} has an empty name", table, count);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            bail!(
                "{}: '{}' may only contain ASCII letters, digits, '_' or '-'",
                table,
                name
            );
        }
        if !seen.insert(name) {
            bail!("{}: duplicate name '{}'", table, name);
        }
    }
    if count == 0 {
        bail!("{}: table is empty", table);
    }
    Ok(())
}
