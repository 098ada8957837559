use std::fs;
use std::path::Path;

use crate::error::CanvasResult;

/// Moves image bytes between the canvas and the file system: exported PNGs
/// are written out, PNGs dropped onto the window are read in.
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// Writes exported bytes to `path`
    pub fn save(&self, path: impl AsRef<Path>, bytes: &[u8]) -> CanvasResult<()> {
        let path = path.as_ref();
        fs::write(path, bytes)?;
        log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Collects PNG files dropped onto the window this frame as
    /// `(name, bytes)` pairs. Files that cannot be read are logged and skipped.
    pub fn take_dropped_images(&self, ctx: &egui::Context) -> Vec<(String, Vec<u8>)> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let mut images = Vec::new();

        for file in dropped {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !Self::is_png(&file_name, &file.mime) {
                log::warn!("Dropped file is not a PNG: {}", file_name);
                continue;
            }

            let bytes = if let Some(bytes) = &file.bytes {
                Some(bytes.to_vec())
            } else if let Some(path) = &file.path {
                fs::read(path)
                    .inspect_err(|err| log::error!("Failed to read {}: {}", path.display(), err))
                    .ok()
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                None
            };

            if let Some(bytes) = bytes {
                log::info!("Importing dropped image {} ({} bytes)", file_name, bytes.len());
                images.push((file_name, bytes));
            }
        }

        images
    }

    fn is_png(name: &str, mime: &str) -> bool {
        if !mime.is_empty() {
            return mime == "image/png";
        }
        Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_detection() {
        assert!(FileHandler::is_png("drawing.PNG", ""));
        assert!(FileHandler::is_png("whatever", "image/png"));
        assert!(!FileHandler::is_png("photo.jpg", ""));
        assert!(!FileHandler::is_png("drawing.png", "image/jpeg"));
    }

    #[test]
    fn test_save_writes_bytes() {
        let name = format!("raster_paint_save_{}.png", std::process::id());
        let path = std::env::temp_dir().join(name);
        FileHandler::new().save(&path, b"png bytes").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"png bytes");
        fs::remove_file(&path).unwrap();
    }
}
