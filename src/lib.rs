//! Placeholder sprite generator for the monster skeleton/part asset pipeline
//!
//! Produces 256×256 RGBA PNGs with simple shapes and text labels so the
//! importer and the monster assembly code can be exercised before real art
//! exists.

pub mod catalog;
pub mod constants;
pub mod generate;

pub use catalog::{Habitat, PartDefinition, Rgb, ShapeKind, SizeClass, SpriteCatalog};
pub use generate::{GenerateOptions, GenerateReport, SpriteSet};
