//! Floor texture loading
//!
//! Decodes the image file with the `image` crate (macroquad's own loader
//! has no JPEG support) and uploads it as an RGBA texture. A missing or
//! undecodable file falls back to a generated checkerboard.

use macroquad::texture::Texture2D;

const CHECKER_SIZE: u16 = 64;
const CHECKER_CELL: u16 = 8;

/// Load the floor texture, falling back to a checkerboard on any failure.
/// Failures are reported to stderr, never surfaced.
pub fn load_floor_texture(path: &str) -> Texture2D {
    match std::fs::read(path) {
        Ok(bytes) => match image::load_from_memory(&bytes) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (w, h) = (rgba.width() as u16, rgba.height() as u16);
                Texture2D::from_rgba8(w, h, &rgba.into_raw())
            }
            Err(e) => {
                eprintln!("failed to decode texture {}: {}", path, e);
                checkerboard()
            }
        },
        Err(e) => {
            eprintln!("failed to read texture {}: {}", path, e);
            checkerboard()
        }
    }
}

fn checkerboard() -> Texture2D {
    Texture2D::from_rgba8(
        CHECKER_SIZE,
        CHECKER_SIZE,
        &checkerboard_pixels(CHECKER_SIZE, CHECKER_CELL),
    )
}

/// Two-tone checkerboard RGBA pixels, `size` x `size` with `cell`-pixel
/// squares
pub fn checkerboard_pixels(size: u16, cell: u16) -> Vec<u8> {
    let size = size as usize;
    let cell = (cell as usize).max(1);
    let mut pixels = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dark = ((x / cell) + (y / cell)) % 2 == 0;
            let v = if dark { 0x60 } else { 0xb0 };
            pixels.extend_from_slice(&[v, v, v, 0xff]);
        }
    }
    pixels
}
