//! Tile loading, opaque pasting and atomic JPEG export

use crate::io::error::{ComposeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, imageops};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decode a tile image from disk
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_tile(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| ComposeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a tile's `(width, height)` without decoding its pixels
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is unreadable
pub fn tile_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| ComposeError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite the canvas region starting at `(x, y)` with `tile`
///
/// The tile is flattened to RGB first, so any alpha channel is discarded rather
/// than blended. Pixels falling outside the canvas are clipped.
pub fn paste_opaque(canvas: &mut RgbImage, tile: &DynamicImage, x: i64, y: i64) {
    let rgb = tile.to_rgb8();
    imageops::replace(canvas, &rgb, x, y);
}

/// Encode `canvas` as JPEG and move it into place at `output_path`
///
/// The image is written to a temporary file next to the destination and renamed
/// once fully flushed, so a failure never leaves a truncated file behind. The
/// composite gets the same permissions a plain file create would give it.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The temporary file cannot be created or flushed
/// - Encoding fails
/// - The temporary file cannot be renamed onto `output_path`
pub fn save_jpeg(canvas: &RgbImage, output_path: &Path, quality: u8) -> Result<()> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| ComposeError::FileSystem {
        path: parent.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    // Temp files default to 0600; request the usual 0666 so the umask applies
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut staging = builder
        .tempfile_in(parent)
        .map_err(|e| ComposeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create temporary file",
            source: e,
        })?;

    {
        let mut writer = BufWriter::new(&mut staging);
        JpegEncoder::new_with_quality(&mut writer, quality)
            .encode_image(canvas)
            .map_err(|e| ComposeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        writer.flush().map_err(|e| ComposeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "flush",
            source: e,
        })?;
    }

    staging
        .persist(output_path)
        .map_err(|e| ComposeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e.error,
        })?;

    Ok(())
}
