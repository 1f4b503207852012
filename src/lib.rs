#![forbid(unsafe_code)]
//! # qraster
//!
//! A Rust library for rendering QR code module matrices as greyscale bitmaps.
//!
//! `qraster` is the final stage of a barcode encoding pipeline: it takes the
//! grid of dark and light modules produced by a symbol-construction engine and
//! turns it into a pixel raster of a requested size, applying integer upscaling
//! and centered white padding. Symbol construction itself (data encoding,
//! codeword generation, masking, version selection) stays behind the
//! [`SymbolProvider`](writer::SymbolProvider) boundary, so the renderer can be
//! driven by any engine or by deterministic fixtures in tests.
//!
//! ## Features
//!
//! - Validate encode arguments and drive an external symbol provider through
//!   a typed capability trait.
//! - Render module matrices with clamped output dimensions, a single isotropic
//!   integer scale factor, and centered padding.
//! - Strongly-typed encode and decode options with deterministic defaults.
//! - Render helpers: console output, SVG strings, in-memory image buffers,
//!   and PNG files.
//! - Declared multi-symbol decode contract for the surrounding system.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qraster = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Render a matrix directly:
//!
//! ```rust
//! use qraster::raster::{render, ModuleMatrix};
//!
//! let matrix = ModuleMatrix::from_rows(&[
//!     vec![true, false],
//!     vec![false, true],
//! ]);
//! let bitmap = render(&matrix, 5, 5).unwrap();
//! assert_eq!((bitmap.width(), bitmap.height()), (5, 5));
//! ```
//!
//! Drive a symbol provider end to end:
//!
//! ```rust
//! use qraster::error::SymbolError;
//! use qraster::raster::ModuleMatrix;
//! use qraster::writer::{BarcodeFormat, EcLevel, QrWriter, SymbolProvider};
//!
//! struct FixedProvider;
//!
//! impl SymbolProvider for FixedProvider {
//!     fn build_symbol(
//!         &self,
//!         _contents: &[u8],
//!         _ecl: EcLevel,
//!     ) -> Result<ModuleMatrix, SymbolError> {
//!         Ok(ModuleMatrix::from_rows(&[vec![true]]))
//!     }
//! }
//!
//! let writer = QrWriter::new(FixedProvider);
//! let bitmap = writer.encode(b"HELLO", BarcodeFormat::QrCode, 4, 4).unwrap();
//! assert_eq!((bitmap.width(), bitmap.height()), (4, 4));
//! ```
//!
//! ## Modules
//!
//! - [`raster`]: Core module matrix and bitmap types plus the renderer.
//! - [`writer`]: The encode entry point and the symbol provider boundary.
//! - [`decode`]: The multi-symbol decode contract (declaration only).
//! - [`helper`]: Utilities for rendering matrices and bitmaps in various formats.
//! - [`error`]: Error types shared across the pipeline.

pub mod decode;
pub mod error;
pub mod helper;
pub mod raster;
pub mod writer;
