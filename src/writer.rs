//! QR code encode entry point.
//!
//! The writer validates caller arguments, asks an external [`SymbolProvider`]
//! for a module matrix, and hands the matrix to the renderer. It performs no
//! symbol construction itself; data encoding, codeword generation, module
//! placement and masking all live behind the provider boundary.

use log::debug;

use crate::error::{Error, Result, SymbolError};
use crate::raster::{render, Bitmap, ModuleMatrix};

/// Barcode symbologies known to the surrounding system.
///
/// Only [`BarcodeFormat::QrCode`] is accepted by [`QrWriter`]; the other
/// variants exist so callers and decode-side components can name them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BarcodeFormat {
    QrCode,
    Ean13,
    Code128,
    DataMatrix,
    Pdf417,
    Aztec,
}

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum EcLevel {
    /// Tolerates ~7% erroneous codewords.
    #[default]
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

/// Encoding configuration with explicitly enumerated slots.
///
/// Every slot defaults deterministically when absent, so
/// `EncodeOptions::default()` is always a valid configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeOptions {
    /// Error correction level override. `None` selects the lowest level.
    pub error_correction: Option<EcLevel>,
}

/// Capability interface for the external symbol-construction engine.
///
/// One operation: content bytes plus an error correction level produce a
/// module matrix or a failure. Implementations must never return a matrix
/// with zero width or height (the renderer fails fast if they do) and must
/// be reentrant, since concurrent `encode` calls share the provider.
pub trait SymbolProvider {
    /// Builds the module matrix for `contents` at the given error
    /// correction level.
    fn build_symbol(
        &self,
        contents: &[u8],
        ecl: EcLevel,
    ) -> std::result::Result<ModuleMatrix, SymbolError>;
}

/// Renders QR codes as greyscale bitmaps through a symbol provider.
///
/// The writer is stateless apart from the provider it wraps: identical
/// inputs produce identical bitmaps, and concurrent calls are safe as long
/// as the provider is reentrant.
///
/// # Example
///
/// ```rust
/// use qraster::error::SymbolError;
/// use qraster::raster::ModuleMatrix;
/// use qraster::writer::{BarcodeFormat, EcLevel, QrWriter, SymbolProvider};
///
/// struct FixedProvider;
///
/// impl SymbolProvider for FixedProvider {
///     fn build_symbol(
///         &self,
///         _contents: &[u8],
///         _ecl: EcLevel,
///     ) -> Result<ModuleMatrix, SymbolError> {
///         Ok(ModuleMatrix::from_rows(&[vec![true]]))
///     }
/// }
///
/// let writer = QrWriter::new(FixedProvider);
/// let bitmap = writer.encode(b"HELLO", BarcodeFormat::QrCode, 4, 4).unwrap();
/// assert_eq!((bitmap.width(), bitmap.height()), (4, 4));
/// ```
pub struct QrWriter<P> {
    provider: P,
}

impl<P: SymbolProvider> QrWriter<P> {
    /// Creates a writer backed by the given symbol provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Encodes `contents` and renders the symbol at the requested size,
    /// using default options (lowest error correction level).
    ///
    /// See [`encode_with_options`](Self::encode_with_options).
    pub fn encode(
        &self,
        contents: &[u8],
        format: BarcodeFormat,
        width: i32,
        height: i32,
    ) -> Result<Bitmap> {
        self.encode_with_options(contents, format, width, height, &EncodeOptions::default())
    }

    /// Encodes `contents` and renders the symbol at the requested size.
    ///
    /// Arguments are validated before the provider is invoked: contents must
    /// be non-empty, the format must be [`BarcodeFormat::QrCode`], and both
    /// requested dimensions must be non-negative. The rendered bitmap is
    /// never smaller than the module matrix, so a request of `0x0` yields
    /// the symbol at one pixel per module.
    ///
    /// # Arguments
    ///
    /// * `contents` - The bytes to encode.
    /// * `format` - The barcode symbology; only QR is supported.
    /// * `width` - Requested output width in pixels.
    /// * `height` - Requested output height in pixels.
    /// * `options` - Typed encoding configuration.
    ///
    /// # Returns
    ///
    /// A `Result` containing the bitmap, or [`Error::InvalidArgument`] for
    /// malformed input and [`Error::EncodingFailure`] when the provider
    /// cannot produce a symbol.
    pub fn encode_with_options(
        &self,
        contents: &[u8],
        format: BarcodeFormat,
        width: i32,
        height: i32,
        options: &EncodeOptions,
    ) -> Result<Bitmap> {
        if contents.is_empty() {
            return Err(Error::InvalidArgument("empty contents"));
        }
        if format != BarcodeFormat::QrCode {
            return Err(Error::InvalidArgument("unsupported format"));
        }
        if width < 0 || height < 0 {
            return Err(Error::InvalidArgument("dimensions too small"));
        }

        let ecl = options.error_correction.unwrap_or_default();
        let matrix = self.provider.build_symbol(contents, ecl)?;
        debug!(
            "built {}x{} symbol at {:?} error correction",
            matrix.width(),
            matrix.height(),
            ecl
        );
        render(&matrix, width as usize, height as usize)
    }
}
