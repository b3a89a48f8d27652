//! Which sprites a run writes, and where

use serde::Serialize;

use crate::catalog::{PartDefinition, Rgb, ShapeKind, SpriteCatalog};
use crate::constants::{PART_DIR, SKELETON_DIR};

/// Subset of the catalog to render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SpriteSet {
    #[default]
    All,
    Skeletons,
    Parts,
}

impl SpriteSet {
    pub fn includes_skeletons(self) -> bool {
        matches!(self, SpriteSet::All | SpriteSet::Skeletons)
    }

    pub fn includes_parts(self) -> bool {
        matches!(self, SpriteSet::All | SpriteSet::Parts)
    }
}

/// Catalog entry a sprite is rendered from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpriteSource {
    Skeleton {
        habitat: String,
        size_class: String,
        color: Rgb,
        scale: f64,
    },
    Part {
        part: String,
        color: Rgb,
        shape: ShapeKind,
    },
}

/// One output file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSprite {
    /// Path relative to the output root, `/`-separated
    pub path: String,
    #[serde(flatten)]
    pub source: SpriteSource,
}

impl PlannedSprite {
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn is_skeleton(&self) -> bool {
        matches!(self.source, SpriteSource::Skeleton { .. })
    }
}

pub fn skeleton_file_name(habitat: &str, size_class: &str) -> String {
    format!("S_{}_{}_Body.png", habitat, size_class)
}

pub fn part_file_name(part: &str) -> String {
    format!("S_{}.png", part)
}

/// Every sprite to write, skeletons (habitat-major) first, then parts, in
/// catalog order.
pub fn plan_sprites(catalog: &SpriteCatalog, set: SpriteSet) -> Vec<PlannedSprite> {
    let mut planned = Vec::with_capacity(catalog.sprite_count());

    if set.includes_skeletons() {
        for habitat in &catalog.habitats {
            for size in &catalog.size_classes {
                planned.push(PlannedSprite {
                    path: format!(
                        "{}/{}",
                        SKELETON_DIR,
                        skeleton_file_name(&habitat.name, &size.name)
                    ),
                    source: SpriteSource::Skeleton {
                        habitat: habitat.name.clone(),
                        size_class: size.name.clone(),
                        color: habitat.color,
                        scale: size.scale,
                    },
                });
            }
        }
    }

    if set.includes_parts() {
        planned.extend(catalog.parts.iter().map(plan_part));
    }

    planned
}

fn plan_part(part: &PartDefinition) -> PlannedSprite {
    PlannedSprite {
        path: format!("{}/{}", PART_DIR, part_file_name(&part.name)),
        source: SpriteSource::Part {
            part: part.name.clone(),
            color: part.color,
            shape: part.shape,
        },
    }
}
