//! Offscreen PNG export of the sketch display list.
//!
//! The display list is rendered at a uniform scale factor (4x by default)
//! onto an offscreen Cairo image surface over a solid background, then
//! encoded as PNG and handed to the file-saving pipeline.

pub mod file;
pub mod types;

pub use file::FileSaveConfig;
pub use types::ExportError;

use crate::config::Config;
use crate::draw::{render_frame, CairoSurface, Color, Frame, Surface};
use std::path::PathBuf;

/// Options controlling offscreen export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Logical canvas width in pixels (pre-scale)
    pub width: u32,
    /// Logical canvas height in pixels (pre-scale)
    pub height: u32,
    /// Uniform scale factor applied to the whole display list
    pub scale: f64,
    /// Background fill behind the marks
    pub background: Color,
    /// Where and how to save the image
    pub save: FileSaveConfig,
}

impl ExportOptions {
    /// Builds export options from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut save = FileSaveConfig {
            filename_template: config.export.filename_template.clone(),
            ..FileSaveConfig::default()
        };
        if let Some(directory) = &config.export.directory {
            save.save_directory = file::expand_tilde(directory);
        }

        Self {
            width: config.canvas.width,
            height: config.canvas.height,
            scale: config.export.scale,
            background: config.export.background.to_color(),
            save,
        }
    }
}

/// Renders the display list to PNG bytes at the configured scale.
///
/// The offscreen surface is `width x scale` by `height x scale` pixels,
/// filled with the background color before the marks are drawn oldest-first.
pub fn render_to_png(frame: &Frame, options: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let pixel_width = (options.width as f64 * options.scale).ceil() as i32;
    let pixel_height = (options.height as f64 * options.scale).ceil() as i32;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, pixel_width, pixel_height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        let mut target = CairoSurface::new(&ctx);
        target.clear(options.background);
        render_frame(&mut target, frame, options.scale);
    }

    let mut bytes = Vec::new();
    surface.write_to_png(&mut bytes)?;

    log::debug!(
        "Rendered {} mark(s) at {}x into {}x{} PNG ({} bytes)",
        frame.len(),
        options.scale,
        pixel_width,
        pixel_height,
        bytes.len()
    );

    Ok(bytes)
}

/// Renders the display list and saves it under the configured directory.
///
/// Returns the path of the written file.
pub fn export_frame(frame: &Frame, options: &ExportOptions) -> Result<PathBuf, ExportError> {
    let bytes = render_to_png(frame, options)?;
    let path = file::save_image(&bytes, &options.save)?;

    log::info!("Sketch exported to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::draw::color::{BLACK, WHITE};

    fn small_options() -> ExportOptions {
        ExportOptions {
            width: 32,
            height: 32,
            scale: 4.0,
            background: WHITE,
            save: FileSaveConfig::default(),
        }
    }

    #[test]
    fn render_to_png_emits_png_bytes() {
        let mut frame = Frame::new();
        let handle = frame.begin_stroke(2, 2, 2.0, BLACK);
        frame.extend_stroke(handle, 20, 20);
        frame.end_stroke(handle);

        let bytes = render_to_png(&frame, &small_options()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn empty_frame_still_exports_the_background() {
        let bytes = render_to_png(&Frame::new(), &small_options()).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn export_frame_writes_to_the_configured_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut options = small_options();
        options.save.save_directory = temp.path().join("exports");

        let mut frame = Frame::new();
        frame.place_sticker("★", 16, 16, 0.0);

        let path = export_frame(&frame, &options).unwrap();
        assert!(path.exists());
        assert!(path.extension().is_some_and(|ext| ext == "png"));
    }

    #[test]
    fn options_from_config_pick_up_canvas_and_scale() {
        let config = Config::default();
        let options = ExportOptions::from_config(&config);
        assert_eq!(options.width, 256);
        assert_eq!(options.height, 256);
        assert_eq!(options.scale, 4.0);
        assert_eq!(options.background, WHITE);
    }
}
