use std::fmt;

use image::{DynamicImage, RgbaImage};

use crate::catalog::FilterPreset;
use crate::error::Result;
use crate::filter::channel::DiffSource;
use crate::filter::{self, Filter};
use crate::image_io;
use crate::raster::RasterBuffer;

/// Settings shared by every filter in a run.
#[derive(Debug, Clone, Default)]
pub struct FilterSettings {
    /// Pixel value the channel-emphasis filters measure deviation from.
    pub diff_source: DiffSource,
}

/// A recoverable problem met while running a named filter chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterWarning {
    /// `name` at `position` in the request did not match any preset.
    UnrecognizedFilter { position: usize, name: String },
}

impl fmt::Display for FilterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterWarning::UnrecognizedFilter { position, name } => {
                write!(f, "unrecognized filter {name:?} at position {position}")
            }
        }
    }
}

/// Apply already-resolved filters in order.
pub fn apply_filters(buffer: &mut RasterBuffer, filters: &[Filter], settings: &FilterSettings) {
    for &f in filters {
        log::debug!("applying {}", f.name());
        filter::apply_filter(buffer, f, settings.diff_source);
    }
}

/// Resolve and apply named presets in order with default settings.
/// Unknown names are skipped and returned as warnings.
pub fn run_filters<S: AsRef<str>>(buffer: &mut RasterBuffer, names: &[S]) -> Vec<FilterWarning> {
    run_filters_with(buffer, names, &FilterSettings::default())
}

pub fn run_filters_with<S: AsRef<str>>(
    buffer: &mut RasterBuffer,
    names: &[S],
    settings: &FilterSettings,
) -> Vec<FilterWarning> {
    let mut warnings = Vec::new();

    for (position, name) in names.iter().enumerate() {
        let name = name.as_ref();
        match FilterPreset::lookup(name) {
            Some(preset) => {
                log::debug!(
                    "filter {position}: {} (diff source {})",
                    preset.name(),
                    settings.diff_source.name()
                );
                filter::apply_filter(buffer, preset.filter(), settings.diff_source);
            }
            None => {
                let warning = FilterWarning::UnrecognizedFilter {
                    position,
                    name: name.to_lowercase(),
                };
                log::warn!("skipping {warning}");
                warnings.push(warning);
            }
        }
    }

    warnings
}

/// Owns one image's pixels for the length of a filtering session.
#[derive(Debug, Clone)]
pub struct FilterProcessor {
    buffer: RasterBuffer,
    settings: FilterSettings,
}

impl FilterProcessor {
    pub fn new(buffer: RasterBuffer) -> Self {
        Self {
            buffer,
            settings: FilterSettings::default(),
        }
    }

    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        Ok(Self::new(image_io::buffer_from_image(image)?))
    }

    pub fn with_settings(mut self, settings: FilterSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    pub fn run_filters<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<FilterWarning> {
        run_filters_with(&mut self.buffer, names, &self.settings)
    }

    pub fn buffer(&self) -> &RasterBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> RasterBuffer {
        self.buffer
    }

    /// Current pixels as an `image` buffer.
    pub fn display_image(&self) -> Result<RgbaImage> {
        image_io::buffer_to_image(&self.buffer)
    }
}
