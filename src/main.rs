//! Placeholder sprite generator
//!
//! Writes solid-color test sprites for the monster skeleton/part pipeline.
//! Replace with real art later; only the filenames and pixel format matter.
//!
//! Usage:
//!   cargo run                               # Generate all 38 sprites
//!   cargo run -- generate --only parts      # Parts only
//!   cargo run -- generate --clean --manifest
//!   cargo run -- list                       # Show what would be written
//!   cargo run -- write-config               # Dump default catalog to config/sprites.toml

use anyhow::{Result, bail};
use clap::{Args, Command, FromArgMatches, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use placeholder_sprites::constants::{CATALOG_FILE, DEFAULT_FONT_PATH, PART_DIR, SKELETON_DIR};
use placeholder_sprites::generate::{self, GenerateOptions, SpriteSet, SpriteSource};
use placeholder_sprites::SpriteCatalog;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate placeholder monster sprites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render skeleton and part sprites to PNG (default)
    Generate(GenerateArgs),
    /// Print the sprites a run would write without rendering them
    List(CatalogArgs),
    /// Write the built-in catalog as an editable TOML file
    WriteConfig(WriteConfigArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog TOML; built-in tables are used when the file does not exist
    #[arg(long, default_value = CATALOG_FILE)]
    config: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Directory the TempAssets/ tree is written under
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// Label font; a built-in bitmap font is used if it can't be loaded
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,
    #[arg(long, value_enum, default_value_t = SpriteSet::All)]
    only: SpriteSet,
    /// Also write TempAssets/Sprites/manifest.json
    #[arg(long)]
    manifest: bool,
    /// Delete S_*.png files in the output folders that this run doesn't produce
    #[arg(long)]
    clean: bool,
}

impl GenerateArgs {
    /// `generate` with every flag left at its declared default
    fn from_defaults() -> Result<Self> {
        let matches =
            Self::augment_args(Command::new("generate")).try_get_matches_from(["generate"])?;
        Ok(Self::from_arg_matches(&matches)?)
    }
}

#[derive(Args, Debug)]
struct WriteConfigArgs {
    #[arg(default_value = CATALOG_FILE)]
    path: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let catalog = SpriteCatalog::load_or_default(&args.catalog.config)?;
    let options = GenerateOptions {
        output_root: args.out,
        font_path: args.font,
        only: args.only,
        manifest: args.manifest,
        clean: args.clean,
    };

    println!("Generating placeholder sprites...");
    let report = generate::run(&catalog, &options)?;

    println!();
    println!("Generated {} skeleton sprites", report.skeletons);
    println!("Generated {} part sprites", report.parts);
    if !report.removed.is_empty() {
        println!("Removed {} stale sprites", report.removed.len());
    }
    if options.only.includes_skeletons() {
        println!("  Skeletons: {}", options.output_root.join(SKELETON_DIR).display());
    }
    if options.only.includes_parts() {
        println!("  Parts:     {}", options.output_root.join(PART_DIR).display());
    }
    if let Some(path) = &report.manifest {
        println!("  Manifest:  {}", path.display());
    }
    Ok(())
}

fn cmd_list(args: CatalogArgs) -> Result<()> {
    let catalog = SpriteCatalog::load_or_default(&args.config)?;
    for sprite in generate::plan_sprites(&catalog, SpriteSet::All) {
        match &sprite.source {
            SpriteSource::Skeleton { scale, .. } => {
                println!("{:<50} scale {:.2}", sprite.path, scale)
            }
            SpriteSource::Part { shape, .. } => println!("{:<50} {}", sprite.path, shape),
        }
    }
    println!("\n{} sprites", catalog.sprite_count());
    Ok(())
}

fn cmd_write_config(args: WriteConfigArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "Refusing to overwrite {} (use --force)",
            args.path.display()
        );
    }
    SpriteCatalog::default().write_to_file(&args.path)?;
    println!("Wrote default catalog to {}", args.path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let command = match Cli::parse().command {
        Some(command) => command,
        None => Commands::Generate(GenerateArgs::from_defaults()?),
    };
    match command {
        Commands::Generate(args) => cmd_generate(args),
        Commands::List(args) => cmd_list(args),
        Commands::WriteConfig(args) => cmd_write_config(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_matches_explicit_generate() {
        let bare = Cli::parse_from(["placeholder-sprites"]);
        assert!(bare.command.is_none());

        let Some(Commands::Generate(explicit)) =
            Cli::parse_from(["placeholder-sprites", "generate"]).command
        else {
            panic!("expected the generate subcommand");
        };
        let defaults = GenerateArgs::from_defaults().unwrap();
        assert_eq!(format!("{:?}", defaults), format!("{:?}", explicit));

        assert_eq!(defaults.catalog.config, PathBuf::from(CATALOG_FILE));
        assert_eq!(defaults.out, PathBuf::from("."));
        assert_eq!(defaults.font, PathBuf::from(DEFAULT_FONT_PATH));
        assert_eq!(defaults.only, SpriteSet::All);
        assert!(!defaults.manifest && !defaults.clean);
    }

    #[test]
    fn generate_flags_override_defaults() {
        let Some(Commands::Generate(args)) = Cli::parse_from([
            "placeholder-sprites",
            "generate",
            "--only",
            "parts",
            "--clean",
            "--out",
            "build",
        ])
        .command
        else {
            panic!("expected the generate subcommand");
        };
        assert_eq!(args.only, SpriteSet::Parts);
        assert!(args.clean);
        assert_eq!(args.out, PathBuf::from("build"));
    }
}
