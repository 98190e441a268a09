//! # qrgrid
//!
//! A Rust library for laying out the structural patterns of QR code symbols and rendering them.
//!
//! `qrgrid` sizes a QR Code Model 2 module grid from a version number (1 to 40), stamps the three
//! finder patterns, a single alignment pattern, the timing patterns and the always-dark module,
//! and writes a one-hot mode indicator into four reserved cells. Modules that data placement
//! would normally fill are left unset, and every renderer keeps them visibly distinct.
//!
//! ## Features
//!
//! - Validated versions and mode indicators, reported through [`QrError`].
//! - Tri-state modules: dark, light and unset.
//! - Render symbols as text lines (with or without a decorative border), PNG images, SVGs or
//!   in-memory image buffers.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Installation
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! qrgrid = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Build a version 1 symbol and print it:
//!
//! ```rust
//! use qrgrid::helper::{to_lines, RenderOptions};
//! use qrgrid::qrcode::{Mode, Symbol};
//!
//! fn main() -> Result<(), qrgrid::QrError> {
//!     let symbol = Symbol::build(1, "HELLO", Some(Mode::Alphanumeric.mode_bits()))?;
//!     for line in to_lines(&symbol, &RenderOptions::default()) {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`qrcode`]: Version math, the module grid, pattern stamping and the symbol builder.
//! - [`helper`]: Utilities for rendering symbols in various formats.
//! - [`error`]: The crate's error type.

pub mod error;
pub mod helper;
pub mod qrcode;

pub use error::{QrError, Result};
