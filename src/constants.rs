//! Fixed values for placeholder sprite generation
//!
//! Canvas geometry, output layout and label styling live here so the
//! renderers and the CLI agree on them.

// =============================================================================
// CANVAS
// =============================================================================

/// Width and height of every generated sprite
pub const SPRITE_SIZE: u32 = 256;

/// Linear size of a scale-1.0 skeleton body
pub const SKELETON_BASE_SIZE: f64 = 200.0;

/// Margin kept between part shapes and the canvas edge
pub const PART_MARGIN: i32 = 20;

// =============================================================================
// OUTPUT LAYOUT (relative to the output root)
// =============================================================================

pub const SPRITES_DIR: &str = "TempAssets/Sprites";
pub const SKELETON_DIR: &str = "TempAssets/Sprites/Skeletons";
pub const PART_DIR: &str = "TempAssets/Sprites/Parts";
pub const MANIFEST_FILE: &str = "TempAssets/Sprites/manifest.json";

/// Default location for an editable catalog file
pub const CATALOG_FILE: &str = "config/sprites.toml";

// =============================================================================
// LABELS
// =============================================================================

pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
pub const LABEL_FONT_SIZE: f32 = 16.0;
pub const LABEL_LINE_SPACING: u32 = 4;
pub const LABEL_BOTTOM_MARGIN: i32 = 10;
pub const LABEL_PADDING: i32 = 5;

pub const LABEL_BACKGROUND: [u8; 4] = [255, 255, 255, 200];
pub const LABEL_TEXT: [u8; 4] = [0, 0, 0, 255];
pub const EYE_COLOR: [u8; 4] = [0, 0, 0, 255];
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
