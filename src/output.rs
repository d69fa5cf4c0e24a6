//! Frame export.
//!
//! Converts the engine's RGBA framebuffer into a PNG on disk. Export
//! problems are logged rather than panicking so a failed save never takes
//! down an interactive session.

use image::RgbaImage;
use log::{info, warn};

use spherecast::framebuffer::Framebuffer;

/// Save the framebuffer as an opaque RGBA PNG.
///
/// The framebuffer bytes are already 8-bit sRGB; no tone mapping is applied.
pub fn save_frame_as_png(frame: &Framebuffer, output_path: &str) {
    let image = RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec());
    match image {
        Some(image) => match image.save(output_path) {
            Ok(_) => info!("Image saved as {}", output_path),
            Err(e) => warn!("Failed to save image: {}", e),
        },
        None => warn!(
            "Framebuffer bytes do not match {}x{}",
            frame.width(),
            frame.height()
        ),
    }
}
