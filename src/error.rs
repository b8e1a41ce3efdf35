//! Error types for instafilter.
//!
//! Only buffer construction and the image conversion boundary can fail.
//! Unrecognized filter names are reported as warnings by the pipeline,
//! not as errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Zero-sized or length-mismatched pixel storage.
    #[error("invalid buffer: {width}x{height} with {len} pixels")]
    InvalidBuffer {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
