//! Multi-symbol decoding boundary.
//!
//! This crate only renders symbols; reading them back out of an image is the
//! job of other components in the pipeline. The trait and data types here
//! pin down the contract those components must satisfy, so nothing in this
//! module carries an implementation.

use crate::error::Result;
use crate::raster::Bitmap;
use crate::writer::BarcodeFormat;

/// A single symbol decoded out of a larger image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// The symbology the symbol was decoded as.
    pub format: BarcodeFormat,
    /// The decoded content bytes.
    pub contents: Vec<u8>,
}

/// Decoding configuration with explicitly enumerated slots.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Spend more time searching at the cost of speed.
    pub try_harder: bool,
}

/// Capability interface for readers that locate every symbol in an image.
///
/// Implementations scan the greyscale raster and return one entry per symbol
/// found. When no symbol is located they fail with
/// [`Error::NotFound`](crate::error::Error::NotFound); an empty success
/// result is never returned.
pub trait MultiSymbolReader {
    /// Decodes every symbol present in `image`.
    fn decode_multiple(
        &self,
        image: &Bitmap,
        options: &DecodeOptions,
    ) -> Result<Vec<DecodedSymbol>>;
}
