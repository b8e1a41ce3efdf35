use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::raster::RasterBuffer;

/// Convert any decoded image to an RGBA raster.
pub fn buffer_from_image(img: &DynamicImage) -> Result<RasterBuffer> {
    buffer_from_rgba(&img.to_rgba8())
}

pub fn buffer_from_rgba(img: &RgbaImage) -> Result<RasterBuffer> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::Decode(format!("image has no pixels ({w}x{h})")));
    }
    RasterBuffer::from_rgba_bytes(w as usize, h as usize, img.as_raw())
}

/// Decode an in-memory encoded image (PNG, JPEG, ...).
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterBuffer> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    buffer_from_image(&img)
}

pub fn buffer_to_image(buffer: &RasterBuffer) -> Result<RgbaImage> {
    let w = u32::try_from(buffer.width())
        .map_err(|_| Error::Encode(format!("width {} too large", buffer.width())))?;
    let h = u32::try_from(buffer.height())
        .map_err(|_| Error::Encode(format!("height {} too large", buffer.height())))?;
    RgbaImage::from_raw(w, h, buffer.to_rgba_bytes())
        .ok_or_else(|| Error::Encode(format!("pixel data does not fit {w}x{h}")))
}

/// Encode the buffer as PNG bytes in memory.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>> {
    let img = buffer_to_image(buffer)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;
    use image::Rgba;

    #[test]
    fn image_round_trip_keeps_pixels() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 7, 128]));
        let buf = buffer_from_rgba(&img).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.get(2, 1), Pixel::new(20, 20, 7, 128));
        assert_eq!(buffer_to_image(&buf).unwrap(), img);
    }

    #[test]
    fn rgb_images_become_opaque() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3])));
        let buf = buffer_from_image(&img).unwrap();
        assert!(buf.pixels().iter().all(|p| *p == Pixel::new(1, 2, 3, 255)));
    }

    #[test]
    fn empty_image_is_a_decode_error() {
        let img = RgbaImage::new(0, 5);
        assert!(matches!(buffer_from_rgba(&img), Err(Error::Decode(_))));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        assert!(matches!(
            decode_bytes(b"definitely not an image"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn png_encode_decode() {
        let buf = RasterBuffer::new(4, 3, Pixel::new(9, 8, 7, 6)).unwrap();
        let png = encode_png(&buf).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(decode_bytes(&png).unwrap(), buf);
    }
}
