use std::error::Error;
use std::path::Path;

use image::{GrayImage, Luma, RgbaImage};

use crate::source::{HeightMap, HeightSource};

/// Loads a height texture; any color format is converted to RGBA and read by its red channel.
pub fn load_height_texture(path: impl AsRef<Path>) -> Result<RgbaImage, Box<dyn Error>> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgba8();
    log::info!(
        "loaded height texture {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Encodes a height map as an 8-bit grayscale image, bottom row first.
pub fn height_map_to_image(map: &HeightMap) -> GrayImage {
    let h = map.height() as u32;
    GrayImage::from_fn(map.width() as u32, h, |px, py| {
        let v = map.channel_value(px as usize, (h - 1 - py) as usize);
        Luma([(v.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}

/// Writes a height map as a grayscale PNG.
pub fn save_height_texture(map: &HeightMap, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    height_map_to_image(map).save(path)?;
    log::info!("saved height texture {}", path.display());
    Ok(())
}
