//! Instafilter - named pixel filters for in-memory RGBA images.
//!
//! Provides the raster buffer, channel statistics, the filter families
//! and the pipeline that applies presets by name.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod image_io;
pub mod pipeline;
pub mod raster;
pub mod stats;

pub use catalog::FilterPreset;
pub use error::{Error, Result};
pub use filter::Filter;
pub use filter::channel::DiffSource;
pub use filter::dots::DotMode;
pub use pipeline::{FilterProcessor, FilterSettings, FilterWarning, run_filters, run_filters_with};
pub use raster::{Channel, Pixel, RasterBuffer};
pub use stats::ChannelAverages;
