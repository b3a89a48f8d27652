//! Sprite catalog: habitats, size classes and parts to render

mod database;
mod types;

pub use database::SpriteCatalog;
pub use types::{Habitat, PartDefinition, Rgb, ShapeKind, SizeClass};
