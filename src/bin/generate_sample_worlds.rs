//! Generate Sample World Articles
//!
//! Renders every world in a catalog file to a markdown article.
//! Run with: cargo run --bin generate_sample_worlds -- [CATALOG] [OUTPUT_DIR]

use std::fs;
use std::path::Path;

use anyhow::Context;
use world_encyclopedia::encyclopedia::generator::article_file_name;
use world_encyclopedia::encyclopedia::{build_world_page, EncyclopediaGenerator};
use world_encyclopedia::WorldCatalog;

const DEFAULT_CATALOG: &str = "data/worlds.json";
const DEFAULT_OUTPUT_DIR: &str = "worlds_md";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let catalog_path = args.next().unwrap_or_else(|| DEFAULT_CATALOG.to_string());
    let output_dir = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

    println!("Generating world articles from {}...\n", catalog_path);

    let catalog = WorldCatalog::from_path(&catalog_path)
        .with_context(|| format!("loading world catalog from {}", catalog_path))?;

    fs::create_dir_all(&output_dir)?;
    let generator = EncyclopediaGenerator::new();

    for world in catalog.worlds() {
        let page = build_world_page(world);
        let markdown = generator.generate(&page);

        let output_path = Path::new(&output_dir).join(article_file_name(world.id.as_str()));
        fs::write(&output_path, &markdown)
            .with_context(|| format!("writing {}", output_path.display()))?;
        println!("  {} -> {}", world.name, output_path.display());
    }

    println!("\nDone: {} articles", catalog.len());
    Ok(())
}
