use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage, Rgba};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use super::error::ConvertError;

/// Dimensions before and after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertedImage {
    pub original: (u32, u32),
    pub output: (u32, u32),
}

impl ConvertedImage {
    pub fn was_resized(&self) -> bool {
        self.original != self.output
    }
}

/// Convert any supported image into a PNG at `target`.
///
/// The source is decoded fully into memory before anything is written, and
/// the PNG goes through a temporary file in the target's directory that is
/// renamed into place at the end. A failure therefore never leaves a partial
/// target behind, and converting a file onto itself is safe.
///
/// The source file is never deleted here; that is up to the caller.
pub fn convert_to_png(
    source: &Path,
    target: &Path,
    max_width: u32,
) -> Result<ConvertedImage, ConvertError> {
    let img = decode(source)?;
    let original = (img.width(), img.height());

    let img = normalize_color(img);
    let img = limit_width(img, max_width);
    let output = (img.width(), img.height());

    write_png(&img, source, target)?;

    Ok(ConvertedImage { original, output })
}

/// Decode by sniffing the file contents, falling back to the extension
fn decode(path: &Path) -> Result<DynamicImage, ConvertError> {
    let open_err = |source: std::io::Error| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Bring any decoded image down to 8-bit RGB.
///
/// Images with an alpha channel are composited over white, so transparent
/// logo backgrounds end up white. 8-bit RGB passes through untouched and
/// everything else (grey, 16-bit, float) is converted.
pub fn normalize_color(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        return DynamicImage::ImageRgb8(flatten_onto_white(&img));
    }

    match img {
        DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

fn flatten_onto_white(img: &DynamicImage) -> RgbImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    RgbImage::from_fn(width, height, |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        Rgb([blend_white(r, a), blend_white(g, a), blend_white(b, a)])
    })
}

/// `channel * alpha + 255 * (1 - alpha)`, rounded
fn blend_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Width-constrained output size, or `None` when the image already fits.
///
/// The height is truncated, never rounded, and never drops below one pixel.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }

    let new_height = (height as u64 * max_width as u64 / width as u64) as u32;
    Some((max_width, new_height.max(1)))
}

fn limit_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    match target_dimensions(img.width(), img.height(), max_width) {
        Some((width, height)) => img.resize_exact(width, height, FilterType::Lanczos3),
        None => img,
    }
}

/// Encode with maximum compression, then rename over the target
fn write_png(img: &DynamicImage, source: &Path, target: &Path) -> Result<(), ConvertError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;

    // Temp files are created private; keep the original's permissions instead
    if let Ok(meta) = fs::metadata(source) {
        if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
            tracing::warn!(
                "Could not copy permissions of {} onto {}: {}",
                source.display(),
                target.display(),
                e
            );
        }
    }

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder =
            PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive);
        img.write_with_encoder(encoder).map_err(ConvertError::Encode)?;
        writer.flush()?;
    }

    tmp.persist(target)?;
    Ok(())
}
