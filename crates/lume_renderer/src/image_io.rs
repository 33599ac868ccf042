//! Plain-text PPM output.
//!
//! Layout: a `P3` magic line, `<width> <height>`, the maximum channel
//! value, then one `r g b` line per pixel in row-major order.

use crate::{Color, ImageBuffer, RenderError, RenderResult};
use lume_math::Interval;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Magic token on the first line of the file.
pub const PPM_MAGIC: &str = "P3";

/// Largest channel value written to the file.
pub const MAX_CHANNEL_VALUE: u8 = 255;

const CHANNEL_RANGE: Interval = Interval {
    min: 0.0,
    max: MAX_CHANNEL_VALUE as f32,
};

/// Clamp a channel to `[0, 255]` and truncate it to an integer.
///
/// NaN maps to 0.
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    // Float-to-int `as` truncates toward zero and sends NaN to 0
    CHANNEL_RANGE.clamp(value) as u8
}

/// Serialize an image to the text format, without touching the disk.
///
/// Fails with [`RenderError::InvalidImage`] when the pixel count does not
/// match the dimensions.
pub fn encode_image(image: &ImageBuffer) -> RenderResult<String> {
    image.check_size()?;

    let mut out = String::with_capacity(16 + image.pixels.len() * 12);
    out.push_str(&format!(
        "{}\n{} {}\n{}\n",
        PPM_MAGIC, image.width, image.height, MAX_CHANNEL_VALUE
    ));

    // Row-major, so the flat buffer is already in file order
    for color in &image.pixels {
        out.push_str(&format!(
            "{} {} {}\n",
            clamp_channel(color.x),
            clamp_channel(color.y),
            clamp_channel(color.z)
        ));
    }

    Ok(out)
}

/// Write `image` to `path`.
///
/// The caller's buffer is only read. If the buffer is malformed or the file
/// cannot be created nothing is written; if writing fails midway the partial file is removed.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let contents = encode_image(image)?;

    let mut file = File::create(path)?;
    if let Err(err) = file.write_all(contents.as_bytes()).and_then(|_| file.flush()) {
        drop(file);
        log::warn!("Removing partially written image {}", path.display());
        let _ = fs::remove_file(path);
        return Err(err.into());
    }

    log::info!(
        "Saved {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(())
}

/// Read an image written by [`save_image`], checking its dimensions.
pub fn load_image<P: AsRef<Path>>(path: P, width: u32, height: u32) -> RenderResult<ImageBuffer> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    match lines.next() {
        Some(magic) if magic.trim() == PPM_MAGIC => {}
        other => {
            return Err(RenderError::InvalidImage(format!(
                "expected magic {:?}, found {:?}",
                PPM_MAGIC, other
            )))
        }
    }

    let dims = lines
        .next()
        .ok_or_else(|| RenderError::InvalidImage("missing dimensions".into()))?;
    let dims = parse_numbers::<u32>(dims)?;
    if dims != [width, height] {
        return Err(RenderError::InvalidImage(format!(
            "expected {}x{}, found {:?}",
            width, height, dims
        )));
    }

    // Maximum channel value, not needed for reading
    lines
        .next()
        .ok_or_else(|| RenderError::InvalidImage("missing maximum channel value".into()))?;

    let mut image = ImageBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let line = lines
                .next()
                .ok_or_else(|| RenderError::InvalidImage("ran out of pixel data".into()))?;
            let channels = parse_numbers::<f32>(line)?;
            match channels[..] {
                [r, g, b] => image.set(x, y, Color::new(r, g, b)),
                _ => {
                    return Err(RenderError::InvalidImage(format!(
                        "pixel ({}, {}) needs 3 channels: {:?}",
                        x, y, line
                    )))
                }
            }
        }
    }

    Ok(image)
}

fn parse_numbers<T: std::str::FromStr>(line: &str) -> RenderResult<Vec<T>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| RenderError::InvalidImage(format!("invalid number {:?}", token)))
        })
        .collect()
}
