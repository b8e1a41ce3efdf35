use crate::error::{Error, Result};
use crate::raster::{Channel, Pixel, RasterBuffer};

/// Truncating integer mean of each color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelAverages {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ChannelAverages {
    pub fn get(self, channel: Channel) -> i32 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// Average each channel over the buffer's current pixels.
pub fn average_channels(buffer: &RasterBuffer) -> ChannelAverages {
    // Construction guarantees at least one pixel.
    divide_sums(sum_channels(buffer.pixels()), buffer.len() as u64)
}

/// Average each channel over a raw pixel slice.
pub fn average_pixels(pixels: &[Pixel]) -> Result<ChannelAverages> {
    if pixels.is_empty() {
        return Err(Error::InvalidBuffer {
            width: 0,
            height: 0,
            len: 0,
        });
    }
    Ok(divide_sums(sum_channels(pixels), pixels.len() as u64))
}

fn sum_channels(pixels: &[Pixel]) -> [u64; 3] {
    let mut totals = [0u64; 3];
    for px in pixels {
        totals[0] += px.red as u64;
        totals[1] += px.green as u64;
        totals[2] += px.blue as u64;
    }
    totals
}

fn divide_sums(totals: [u64; 3], count: u64) -> ChannelAverages {
    ChannelAverages {
        red: (totals[0] / count) as i32,
        green: (totals[1] / count) as i32,
        blue: (totals[2] / count) as i32,
    }
}
