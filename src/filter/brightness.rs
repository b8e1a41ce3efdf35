use crate::raster::RasterBuffer;

/// Scale red, green and blue by `percentage / 100`.
/// 50 halves every channel, 150 brightens by half. Alpha is untouched.
/// Results are rounded half away from zero, then clamped to 0..=255.
pub fn apply_brightness(buffer: &mut RasterBuffer, percentage: i32) {
    let scale = percentage as f64 / 100.0;
    for pixel in buffer.pixels_mut().iter_mut() {
        pixel.red = scale_channel(pixel.red, scale);
        pixel.green = scale_channel(pixel.green, scale);
        pixel.blue = scale_channel(pixel.blue, scale);
    }
}

fn scale_channel(value: u8, scale: f64) -> u8 {
    (value as f64 * scale).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    #[test]
    fn half_brightness_rounds_half_away_from_zero() {
        let mut buf = RasterBuffer::from_pixels(
            2,
            1,
            vec![Pixel::new(101, 3, 255, 77), Pixel::new(1, 0, 10, 0)],
        )
        .unwrap();
        apply_brightness(&mut buf, 50);
        assert_eq!(buf.get(0, 0), Pixel::new(51, 2, 128, 77));
        assert_eq!(buf.get(1, 0), Pixel::new(1, 0, 5, 0));
    }

    #[test]
    fn boost_clamps_at_255() {
        let mut buf = RasterBuffer::new(1, 1, Pixel::new(200, 100, 171, 9)).unwrap();
        apply_brightness(&mut buf, 150);
        // 171 * 1.5 = 256.5
        assert_eq!(buf.get(0, 0), Pixel::new(255, 150, 255, 9));
    }

    #[test]
    fn negative_percentage_clamps_at_zero() {
        let mut buf = RasterBuffer::new(1, 1, Pixel::new(200, 100, 1, 9)).unwrap();
        apply_brightness(&mut buf, -20);
        assert_eq!(buf.get(0, 0), Pixel::new(0, 0, 0, 9));
    }

    #[test]
    fn hundred_percent_is_identity() {
        let pixels = (0..=255u8).map(|v| Pixel::new(v, 255 - v, v / 2, v)).collect();
        let mut buf = RasterBuffer::from_pixels(16, 16, pixels).unwrap();
        let before = buf.clone();
        apply_brightness(&mut buf, 100);
        assert_eq!(buf, before);
    }
}
