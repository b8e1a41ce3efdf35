pub mod brightness;
pub mod channel;
pub mod dots;

use crate::raster::{Channel, RasterBuffer};
use channel::DiffSource;
use dots::DotMode;

/// A fully parameterized filter invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    ChannelEmphasis { channel: Channel, intensity: i32 },
    Brightness { percentage: i32 },
    Dots { mode: DotMode },
}

impl Filter {
    pub fn name(self) -> String {
        match self {
            Filter::ChannelEmphasis { channel, intensity } => {
                format!("{} emphasis x{intensity}", channel.name())
            }
            Filter::Brightness { percentage } => format!("brightness {percentage}%"),
            Filter::Dots { mode } => format!("{} dots", mode.name()),
        }
    }
}

/// Apply one filter to the buffer in place.
pub fn apply_filter(buffer: &mut RasterBuffer, filter: Filter, diff_source: DiffSource) {
    match filter {
        Filter::ChannelEmphasis {
            channel: target,
            intensity,
        } => channel::apply_channel_emphasis(buffer, target, intensity, diff_source),
        Filter::Brightness { percentage } => brightness::apply_brightness(buffer, percentage),
        Filter::Dots { mode } => dots::apply_dots(buffer, mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    #[test]
    fn names_are_readable() {
        let filter = Filter::ChannelEmphasis {
            channel: Channel::Green,
            intensity: 2,
        };
        assert_eq!(filter.name(), "green emphasis x2");
        assert_eq!(Filter::Brightness { percentage: 150 }.name(), "brightness 150%");
        assert_eq!(Filter::Dots { mode: DotMode::Dark }.name(), "dark dots");
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let base = RasterBuffer::from_pixels(
            2,
            2,
            vec![
                Pixel::new(100, 50, 200, 255),
                Pixel::new(10, 10, 10, 255),
                Pixel::new(250, 250, 250, 0),
                Pixel::new(0, 0, 0, 255),
            ],
        )
        .unwrap();

        let mut via_enum = base.clone();
        let mut direct = base.clone();
        apply_filter(
            &mut via_enum,
            Filter::ChannelEmphasis {
                channel: Channel::Red,
                intensity: 2,
            },
            DiffSource::Blue,
        );
        channel::apply_red_filter(&mut direct, 2);
        assert_eq!(via_enum, direct);

        let mut via_enum = base.clone();
        let mut direct = base;
        apply_filter(&mut via_enum, Filter::Brightness { percentage: 50 }, DiffSource::Blue);
        brightness::apply_brightness(&mut direct, 50);
        assert_eq!(via_enum, direct);
    }
}
