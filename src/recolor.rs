//! Dark variant generation for a single icon.
//!
//! Loads an icon, paints every visible pixel with the target colour while
//! keeping its alpha, and writes the result next to the source.

use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::colour::Colour;
use crate::error::{DarkError, Result};

/// Substring replaced in the source path to name the output.
const SOURCE_EXT: &str = ".png";

/// Replacement for [`SOURCE_EXT`] in the output path.
const DARK_EXT: &str = ".dark.png";

/// Derive the output path for an icon.
///
/// Every `.png` in the path string becomes `.dark.png`, so
/// `ui/save_icon.png` maps to `ui/save_icon.dark.png`. The replacement is
/// purely textual; a `.png` elsewhere in the path is rewritten too.
pub fn dark_path(path: &Path) -> Result<PathBuf> {
    let text = path.to_str().ok_or_else(|| DarkError::Save {
        path: path.to_path_buf(),
        message: "path is not valid UTF-8".to_string(),
    })?;

    Ok(PathBuf::from(text.replace(SOURCE_EXT, DARK_EXT)))
}

/// Paint every non-transparent pixel with the RGB of `colour`.
///
/// Pixel alpha is kept; the alpha of `colour` is ignored. Fully
/// transparent pixels are left untouched.
pub fn recolor_pixels(img: &mut RgbaImage, colour: Colour) {
    for pixel in img.pixels_mut() {
        if pixel[3] > 0 {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }
}

/// Write a dark variant of the icon at `path`.
///
/// The decoder is chosen from the file contents, not the extension.
/// Sources without an alpha channel are treated as fully opaque.
/// Returns the path of the written file.
pub fn recolor_icon(path: &Path, colour: Colour) -> Result<PathBuf> {
    let mut img = load(path)?.to_rgba8();

    recolor_pixels(&mut img, colour);

    let output = dark_path(path)?;
    img.save_with_format(&output, ImageFormat::Png)
        .map_err(|e| DarkError::Save {
            path: output.clone(),
            message: e.to_string(),
        })?;

    Ok(output)
}

fn load(path: &Path) -> Result<image::DynamicImage> {
    let load_error = |message: String| DarkError::Load {
        path: path.to_path_buf(),
        message,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| load_error(e.to_string()))?
        .decode()
        .map_err(|e| load_error(e.to_string()))
}
