use crate::raster::{Channel, RasterBuffer};
use crate::stats;

/// Which pixel value the above-average deviation is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffSource {
    /// Measure every target from the pixel's blue value. This is the
    /// established behavior of the red, green and blue filters.
    #[default]
    Blue,
    /// Measure each target from the pixel's own value in that channel.
    Target,
}

impl DiffSource {
    pub fn name(self) -> &'static str {
        match self {
            DiffSource::Blue => "Blue",
            DiffSource::Target => "Target",
        }
    }
}

/// Push above-average pixels further from the channel average.
///
/// The average of `target` is taken over the buffer's current state. Pixels
/// whose deviation is positive get `avg + diff * intensity` written to the
/// target channel, clamped to 0..=255; every other pixel is left untouched.
/// Intensity is unbounded; negative values pull the channel down instead.
pub fn apply_channel_emphasis(
    buffer: &mut RasterBuffer,
    target: Channel,
    intensity: i32,
    diff_source: DiffSource,
) {
    let avg = stats::average_channels(buffer).get(target) as i64;
    let intensity = intensity as i64;

    for pixel in buffer.pixels_mut().iter_mut() {
        let source = match diff_source {
            DiffSource::Blue => pixel.blue,
            DiffSource::Target => pixel.channel(target),
        };
        let diff = source as i64 - avg;
        if diff > 0 {
            let value = (avg + diff * intensity).clamp(0, 255);
            pixel.set_channel(target, value as u8);
        }
    }
}

pub fn apply_red_filter(buffer: &mut RasterBuffer, intensity: i32) {
    apply_channel_emphasis(buffer, Channel::Red, intensity, DiffSource::Blue);
}

pub fn apply_green_filter(buffer: &mut RasterBuffer, intensity: i32) {
    apply_channel_emphasis(buffer, Channel::Green, intensity, DiffSource::Blue);
}

pub fn apply_blue_filter(buffer: &mut RasterBuffer, intensity: i32) {
    apply_channel_emphasis(buffer, Channel::Blue, intensity, DiffSource::Blue);
}
