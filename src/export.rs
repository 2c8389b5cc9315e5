use std::path::Path;

use eframe::egui::ColorImage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("captured frame has unexpected size {width}x{height}")]
    BadFrame { width: usize, height: usize },

    #[error("writing {}", .path.display())]
    Encode {
        path: std::path::PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Write a captured frame as PNG.
pub fn save_png(frame: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let [width, height] = frame.size;
    let bytes: Vec<u8> = frame.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, bytes)
        .ok_or(ExportError::BadFrame { width, height })?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved {width}x{height} figure to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_with_frame_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let rgba: Vec<u8> = [255, 0, 0, 255].repeat(3 * 2);
        let frame = ColorImage::from_rgba_unmultiplied([3, 2], &rgba);

        save_png(&frame, &path).unwrap();

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(written.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }
}
