use crate::error::Result;
use crate::mapper::LumaMapper;
use crate::sample::PixelSample;
use image::RgbaImage;
use log::trace;
use std::io::Write;

/// Render an image into a text sink, one character per pixel.
///
/// Rows are scanned outer and columns inner, so the document reads in the
/// same orientation as the image: the output has exactly `height` lines of
/// exactly `width` characters, each line newline-terminated. The sink is
/// flushed once the last row is written.
///
/// # Arguments
/// * `image` - Decoded RGBA image to scan
/// * `mapper` - Luminance mapper selecting one glyph per sample
/// * `sink` - Writable text destination, exclusively owned for this call
///
/// # Errors
/// Returns `Error::Write` if the sink rejects a write or the final flush.
pub fn render<W: Write>(image: &RgbaImage, mapper: &LumaMapper, sink: &mut W) -> Result<()> {
    let (width, height) = image.dimensions();

    for y in 0..height {
        for x in 0..width {
            let sample = PixelSample::from(*image.get_pixel(x, y));
            trace!(
                "point({}, {}): (a,r,g,b): {}, {}, {}, {}",
                x, y, sample.alpha, sample.red, sample.green, sample.blue
            );
            write!(sink, "{}", mapper.char_for(sample))?;
        }
        writeln!(sink)?;
    }

    sink.flush()?;
    Ok(())
}
