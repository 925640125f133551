use crate::constants::output::FILE_PREFIX;
use crate::icon::render_icon;
use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the icon for `size` inside `dir`, e.g. `icons/icon-16.png`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("{}{}.png", FILE_PREFIX, size))
}

/// Render each size in order and write it as PNG into `out_dir`.
///
/// Stops at the first failure. Files written before it are kept.
pub fn generate_icons(out_dir: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(sizes.len());

    for &size in sizes {
        println!("Creating {}x{} icon...", size, size);

        let path = icon_path(out_dir, size);
        let img = render_icon(size)
            .with_context(|| format!("Failed to render {}x{} icon", size, size))?;

        let _span = tracing::debug_span!("save", size, path = %path.display()).entered();
        img.save_with_format(&path, ImageFormat::Png).with_context(|| {
            format!("Failed to save {}x{} icon to {}", size, size, path.display())
        })?;

        println!("✓ Saved {}", path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn print_summary(paths: &[PathBuf]) {
    println!("\n🎉 All icons created successfully!");
    println!("Generated files:");
    for path in paths {
        println!("  - {}", path.display());
    }
}
