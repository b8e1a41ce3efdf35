use std::collections::HashMap;
use std::sync::LazyLock;

use crate::filter::Filter;
use crate::filter::dots::DotMode;
use crate::raster::Channel;

/// Named filter presets selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPreset {
    DarkDots,
    LightDots,
    Blue50,
    Blue100,
    Green50,
    Green100,
    Red50,
    Red100,
    Brightness50,
    Brightness150,
}

static BY_NAME: LazyLock<HashMap<&'static str, FilterPreset>> = LazyLock::new(|| {
    FilterPreset::ALL
        .iter()
        .map(|&preset| (preset.name(), preset))
        .collect()
});

impl FilterPreset {
    pub const ALL: &[FilterPreset] = &[
        FilterPreset::DarkDots,
        FilterPreset::LightDots,
        FilterPreset::Blue50,
        FilterPreset::Blue100,
        FilterPreset::Green50,
        FilterPreset::Green100,
        FilterPreset::Red50,
        FilterPreset::Red100,
        FilterPreset::Brightness50,
        FilterPreset::Brightness150,
    ];

    /// Canonical lowercase label.
    pub fn name(self) -> &'static str {
        match self {
            FilterPreset::DarkDots => "dark dots",
            FilterPreset::LightDots => "light dots",
            FilterPreset::Blue50 => "blue 50%",
            FilterPreset::Blue100 => "blue 100%",
            FilterPreset::Green50 => "green 50%",
            FilterPreset::Green100 => "green 100%",
            FilterPreset::Red50 => "red 50%",
            FilterPreset::Red100 => "red 100%",
            FilterPreset::Brightness50 => "brightness 50%",
            FilterPreset::Brightness150 => "brightness 150%",
        }
    }

    pub fn filter(self) -> Filter {
        match self {
            FilterPreset::DarkDots => Filter::Dots {
                mode: DotMode::Dark,
            },
            FilterPreset::LightDots => Filter::Dots {
                mode: DotMode::Light,
            },
            FilterPreset::Blue50 => emphasis(Channel::Blue, 2),
            FilterPreset::Blue100 => emphasis(Channel::Blue, 5),
            FilterPreset::Green50 => emphasis(Channel::Green, 2),
            FilterPreset::Green100 => emphasis(Channel::Green, 5),
            FilterPreset::Red50 => emphasis(Channel::Red, 2),
            FilterPreset::Red100 => emphasis(Channel::Red, 5),
            FilterPreset::Brightness50 => Filter::Brightness { percentage: 50 },
            FilterPreset::Brightness150 => Filter::Brightness { percentage: 150 },
        }
    }

    /// Case-insensitive lookup. Surrounding whitespace is significant.
    pub fn lookup(name: &str) -> Option<FilterPreset> {
        BY_NAME.get(name.to_lowercase().as_str()).copied()
    }
}

fn emphasis(channel: Channel, intensity: i32) -> Filter {
    Filter::ChannelEmphasis { channel, intensity }
}
