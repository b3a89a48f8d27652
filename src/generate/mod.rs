//! Placeholder sprite generation
//!
//! Renders the catalog into solid-color PNG sprites:
//! - skeleton bodies for every habitat × size class
//! - one sprite per part, shaped by its `ShapeKind`
//!
//! Output is sequential and deterministic; rerunning overwrites files in place.

pub mod draw;
pub mod font;
pub mod label;
pub mod manifest;
pub mod parts;
pub mod plan;
pub mod skeleton;

pub use font::LabelFont;
pub use manifest::SpriteManifest;
pub use parts::{render_part, render_part_sprite};
pub use plan::{
    PlannedSprite, SpriteSet, SpriteSource, part_file_name, plan_sprites, skeleton_file_name,
};
pub use skeleton::{SkeletonLayout, render_skeleton};

use anyhow::{Context, Result};
use image::RgbaImage;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::SpriteCatalog;
use crate::constants::{
    DEFAULT_FONT_PATH, LABEL_FONT_SIZE, MANIFEST_FILE, PART_DIR, SKELETON_DIR, SPRITES_DIR,
};

/// Settings for one generator run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the `TempAssets/...` tree is created under
    pub output_root: PathBuf,
    pub font_path: PathBuf,
    pub only: SpriteSet,
    /// Write `TempAssets/Sprites/manifest.json`
    pub manifest: bool,
    /// Delete `S_*.png` files in the output directories that this run won't write
    pub clean: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            only: SpriteSet::All,
            manifest: false,
            clean: false,
        }
    }
}

/// What a run produced
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub skeletons: usize,
    pub parts: usize,
    pub removed: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub bitmap_font: bool,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.skeletons + self.parts
    }
}

/// Render a planned sprite
pub fn render_sprite(font: &LabelFont, sprite: &PlannedSprite) -> RgbaImage {
    match &sprite.source {
        SpriteSource::Skeleton {
            habitat,
            size_class,
            color,
            scale,
        } => render_skeleton(font, habitat, size_class, *color, *scale),
        SpriteSource::Part { part, color, shape } => render_part(font, part, *color, *shape),
    }
}

/// Generate every sprite in the catalog subset selected by `options`
pub fn run(catalog: &SpriteCatalog, options: &GenerateOptions) -> Result<GenerateReport> {
    let planned = plan_sprites(catalog, options.only);
    let root = &options.output_root;

    let mut dirs = Vec::new();
    if options.only.includes_skeletons() {
        dirs.push(SKELETON_DIR);
    }
    if options.only.includes_parts() {
        dirs.push(PART_DIR);
    }
    for dir in &dirs {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        debug!("Output directory ready: {}", path.display());
    }

    let mut report = GenerateReport::default();

    if options.clean {
        let keep: HashSet<&str> = planned.iter().map(|s| s.file_name()).collect();
        for dir in &dirs {
            report.removed.extend(sweep_stale(&root.join(dir), &keep)?);
        }
    }

    let font = LabelFont::load_or_fallback(&options.font_path, LABEL_FONT_SIZE);
    report.bitmap_font = font.is_bitmap();

    for sprite in &planned {
        let path = root.join(&sprite.path);
        render_sprite(&font, sprite)
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if sprite.is_skeleton() {
            report.skeletons += 1;
        } else {
            report.parts += 1;
        }
        println!("  [{}] {}", report.total(), sprite.file_name());
    }

    if options.manifest {
        let path = root.join(MANIFEST_FILE);
        fs::create_dir_all(root.join(SPRITES_DIR))
            .with_context(|| format!("Failed to create {}", root.join(SPRITES_DIR).display()))?;
        SpriteManifest::new(&planned).write_to_file(&path)?;
        info!("Manifest written to {}", path.display());
        report.manifest = Some(path);
    }

    info!(
        "Generated {} skeleton and {} part sprites under {}",
        report.skeletons,
        report.parts,
        root.display()
    );
    Ok(report)
}

/// Remove generator-named files (`S_*.png`) in `dir` that are not in `keep`
fn sweep_stale(dir: &Path, keep: &HashSet<&str>) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with("S_") || !name.ends_with(".png") || keep.contains(name) {
            continue;
        }
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove stale {}", path.display()))?;
        warn!("Removed stale sprite {}", path.display());
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(root: &Path) -> GenerateOptions {
        GenerateOptions {
            output_root: root.to_path_buf(),
            // hold the font path constant so output does not depend on the host
            font_path: root.join("no-such-font.ttf"),
            ..GenerateOptions::default()
        }
    }

    fn list_dir(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn full_run_writes_38_rgba_sprites_with_expected_names() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = SpriteCatalog::default();
        let report = run(&catalog, &options_for(dir.path())).unwrap();

        assert_eq!(report.skeletons, 30);
        assert_eq!(report.parts, 8);
        assert!(report.bitmap_font);

        let skeletons = list_dir(&dir.path().join(SKELETON_DIR));
        let parts = list_dir(&dir.path().join(PART_DIR));
        assert_eq!(skeletons.len() + parts.len(), 38);

        for habitat in &catalog.habitats {
            for size in &catalog.size_classes {
                let name = skeleton_file_name(&habitat.name, &size.name);
                assert!(skeletons.contains(&name), "missing {}", name);
            }
        }
        for part in &catalog.parts {
            assert!(parts.contains(&part_file_name(&part.name)));
        }
        assert!(
            skeletons
                .iter()
                .all(|n| n.starts_with("S_") && n.ends_with("_Body.png"))
        );
        assert!(parts.iter().all(|n| n.starts_with("S_") && n.ends_with(".png")));

        for sprite in plan_sprites(&catalog, SpriteSet::All) {
            let img = image::open(dir.path().join(&sprite.path))
                .unwrap_or_else(|e| panic!("cannot open {}: {}", sprite.path, e));
            assert_eq!((img.width(), img.height()), (256, 256), "{}", sprite.path);
            assert_eq!(img.color(), image::ColorType::Rgba8, "{}", sprite.path);
        }
    }

    #[test]
    fn rerun_is_byte_identical_and_does_not_accumulate_files() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = SpriteCatalog::default();
        let options = options_for(dir.path());

        let planned = plan_sprites(&catalog, SpriteSet::All);
        let read_all = || -> Vec<Vec<u8>> {
            planned
                .iter()
                .map(|sprite| fs::read(dir.path().join(&sprite.path)).unwrap())
                .collect()
        };

        run(&catalog, &options).unwrap();
        let first = read_all();
        run(&catalog, &options).unwrap();
        let second = read_all();

        assert_eq!(first.len(), 38);
        for (sprite, (a, b)) in planned.iter().zip(first.iter().zip(&second)) {
            assert!(a == b, "{} changed between runs", sprite.path);
        }
        assert_eq!(list_dir(&dir.path().join(SKELETON_DIR)).len(), 30);
        assert_eq!(list_dir(&dir.path().join(PART_DIR)).len(), 8);
    }

    #[test]
    fn written_part_sprite_shows_its_shape() {
        let dir = tempfile::tempdir().unwrap();
        run(&SpriteCatalog::default(), &options_for(dir.path())).unwrap();

        let wings = image::open(dir.path().join(PART_DIR).join("S_FireWings.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(wings.get_pixel(230, 128).0, [255, 69, 0, 255]);
        assert_eq!(wings.get_pixel(20, 128)[3], 0);

        let aura = image::open(dir.path().join(PART_DIR).join("S_HealingAura.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(aura.get_pixel(128, 45).0, [255, 182, 193, 255]);
        assert_eq!(aura.get_pixel(128, 128)[3], 0);
    }

    #[test]
    fn clean_removes_only_stale_generator_files() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton_dir = dir.path().join(SKELETON_DIR);
        fs::create_dir_all(&skeleton_dir).unwrap();
        fs::write(skeleton_dir.join("S_Old_Tiny_Body.png"), b"stale").unwrap();
        fs::write(skeleton_dir.join("notes.txt"), b"keep me").unwrap();

        let options = GenerateOptions {
            clean: true,
            ..options_for(dir.path())
        };
        let report = run(&SpriteCatalog::default(), &options).unwrap();

        assert_eq!(report.removed, vec![skeleton_dir.join("S_Old_Tiny_Body.png")]);
        let names = list_dir(&skeleton_dir);
        assert!(!names.contains(&"S_Old_Tiny_Body.png".to_string()));
        assert!(names.contains(&"notes.txt".to_string()));
        assert_eq!(names.len(), 31);
    }

    #[test]
    fn stale_files_survive_without_clean() {
        let dir = tempfile::tempdir().unwrap();
        let part_dir = dir.path().join(PART_DIR);
        fs::create_dir_all(&part_dir).unwrap();
        fs::write(part_dir.join("S_Old.png"), b"stale").unwrap();

        let report = run(&SpriteCatalog::default(), &options_for(dir.path())).unwrap();
        assert!(report.removed.is_empty());
        assert!(part_dir.join("S_Old.png").exists());
    }

    #[test]
    fn parts_only_run_skips_skeleton_directory() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            only: SpriteSet::Parts,
            ..options_for(dir.path())
        };
        let report = run(&SpriteCatalog::default(), &options).unwrap();

        assert_eq!(report.total(), 8);
        assert!(!dir.path().join(SKELETON_DIR).exists());
        assert_eq!(list_dir(&dir.path().join(PART_DIR)).len(), 8);
    }

    #[test]
    fn manifest_lists_every_sprite() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            manifest: true,
            ..options_for(dir.path())
        };
        let report = run(&SpriteCatalog::default(), &options).unwrap();

        let path = report.manifest.unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["sprite_size"], 256);
        let sprites = json["sprites"].as_array().unwrap();
        assert_eq!(sprites.len(), 38);
        assert_eq!(sprites[0]["kind"], "skeleton");
        assert_eq!(sprites[0]["habitat"], "Forest");
        assert_eq!(sprites[37]["shape"], "aura");
    }

    #[test]
    fn unwritable_output_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();

        let result = run(&SpriteCatalog::default(), &options_for(&blocker));
        assert!(result.is_err());
    }
}
