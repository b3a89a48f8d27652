//! Catalog entry types: habitats, size classes and parts

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color as stored in the catalog (0-255)
pub type Rgb = [u8; 3];

/// Thematic environment that names and colors a skeleton variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habitat {
    pub name: String,
    pub color: Rgb,
}

/// Named scale multiplier applied to a skeleton body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeClass {
    pub name: String,
    /// Fraction of the full body size, in (0, 1]
    pub scale: f64,
}

/// Shape drawn for a part sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Wings,
    Tail,
    Armor,
    Horns,
    Spikes,
    Bolt,
    Cloak,
    Aura,
    /// Plain centered rectangle for names matching no keyword
    Block,
}

/// Keywords checked in priority order; first substring hit wins.
const SHAPE_KEYWORDS: [(&str, ShapeKind); 9] = [
    ("Wings", ShapeKind::Wings),
    ("Tail", ShapeKind::Tail),
    ("Armor", ShapeKind::Armor),
    ("Shell", ShapeKind::Armor),
    ("Horns", ShapeKind::Horns),
    ("Spikes", ShapeKind::Spikes),
    ("Bolt", ShapeKind::Bolt),
    ("Cloak", ShapeKind::Cloak),
    ("Aura", ShapeKind::Aura),
];

impl ShapeKind {
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Wings,
        ShapeKind::Tail,
        ShapeKind::Armor,
        ShapeKind::Horns,
        ShapeKind::Spikes,
        ShapeKind::Bolt,
        ShapeKind::Cloak,
        ShapeKind::Aura,
        ShapeKind::Block,
    ];

    /// Pick the shape for a part from keywords in its name
    pub fn classify(part_name: &str) -> Self {
        SHAPE_KEYWORDS
            .iter()
            .find(|(keyword, _)| part_name.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(ShapeKind::Block)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Wings => "wings",
            ShapeKind::Tail => "tail",
            ShapeKind::Armor => "armor",
            ShapeKind::Horns => "horns",
            ShapeKind::Spikes => "spikes",
            ShapeKind::Bolt => "bolt",
            ShapeKind::Cloak => "cloak",
            ShapeKind::Aura => "aura",
            ShapeKind::Block => "block",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Standalone attachable part with its resolved shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    pub name: String,
    pub color: Rgb,
    pub shape: ShapeKind,
}

impl PartDefinition {
    /// Create a part whose shape is classified from its name
    pub fn new(name: &str, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            color,
            shape: ShapeKind::classify(name),
        }
    }
}
