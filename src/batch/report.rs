/// Console output for the converter
///
/// Progress is printed as the batch runs; the summary and the list of
/// resulting PNG files come at the end.
use std::path::Path;
use walkdir::WalkDir;

use super::driver::BatchSummary;
use super::mapping::MappingEntry;
use crate::convert::{ConvertError, ConvertedImage};

/// Documentation files that live next to the logos
const EXCLUDED_NAMES: [&str; 2] = ["README.md", "INSTRUCTIONS.md"];

fn rule() -> String {
    "=".repeat(70)
}

pub fn banner(asset_dir: &Path) {
    println!("{}", rule());
    println!("Brand Logo Converter - Converting to PNG");
    println!("{}", rule());
    println!("Working directory: {}\n", asset_dir.display());
}

pub fn skipped_missing(entry: &MappingEntry) {
    println!("[SKIP] {} - file not found", entry.source);
}

pub fn skipped_existing(entry: &MappingEntry) {
    println!("[SKIP] {} - already exists", entry.target);
}

pub fn converting(entry: &MappingEntry) {
    println!("Converting {} -> {}...", entry.source, entry.target);
}

pub fn converted(image: &ConvertedImage) {
    if image.was_resized() {
        println!(
            "   [SUCCESS] Converted to PNG (resized {}x{} -> {}x{})",
            image.original.0, image.original.1, image.output.0, image.output.1
        );
    } else {
        println!("   [SUCCESS] Converted to PNG");
    }
}

pub fn cleaned_up() {
    println!("   [CLEANUP] Removed original file");
}

pub fn failed(error: &ConvertError) {
    println!("   Error: {}", error);
    println!("   [FAILED] Could not convert");
}

/// Print the totals and every PNG now present in the asset directory
pub fn summary(summary: &BatchSummary, asset_dir: &Path) {
    println!("\n{}", rule());
    println!("Conversion Complete!");
    println!("{}", rule());
    println!("Successfully converted: {} logos", summary.success_count());
    println!("Originals removed: {}\n", summary.removed_count());

    println!("Final logo files:");
    for name in final_png_files(asset_dir) {
        println!("  ✓ {}", name);
    }

    println!("\nNext steps:");
    println!("1. Restart your Next.js dev server");
    println!("2. Visit the homepage to see the brand logos!");
}

/// PNG file names directly inside `dir`, sorted
pub fn final_png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !EXCLUDED_NAMES.contains(&name.as_str()))
        .collect();

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_final_png_files_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        for name in ["vichy.png", "avene.png", "Rossmax.jpg", "README.md", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        fs::write(dir.path().join("nested.png").join("deep.png"), b"x").unwrap();

        assert_eq!(final_png_files(dir.path()), ["avene.png", "vichy.png"]);
    }

    #[test]
    fn test_final_png_files_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(final_png_files(dir.path()).is_empty());
    }

    #[test]
    fn test_final_png_files_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(final_png_files(&dir.path().join("gone")).is_empty());
    }
}
