#![forbid(unsafe_code)]
//! QR symbol layout.
//!
//! This module builds the structural skeleton of a QR Code Model 2 symbol: it sizes a module grid
//! from the version number (1–40), stamps the three finder patterns, a single alignment pattern and
//! the two timing patterns, and records a one-hot mode indicator in four cells next to the
//! bottom-right corner. Data codewords, error correction and masking are not placed; every module
//! those stages would own stays [`Cell::Unset`].

use crate::error::{QrError, Result};

/// A QR symbol skeleton, representing a square grid of dark, light and unset modules.
///
/// Instances are immutable after creation. The payload is kept alongside the grid but is never
/// written into it.
///
/// # Creation
///
/// - With a mode indicator: [`Symbol::build`].
/// - Structure only: [`Symbol::build_structure`].
///
/// # Example
///
/// ```rust
/// use qrgrid::qrcode::{Cell, Mode, Symbol};
///
/// let symbol = Symbol::build(1, "HELLO", Some(Mode::Alphanumeric.mode_bits())).unwrap();
///
/// assert_eq!(symbol.size(), 21);
/// assert_eq!(symbol.get_module(0, 0), Cell::Dark);
/// assert_eq!(symbol.payload(), b"HELLO");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    version: Version,
    grid: Grid,
    payload: Vec<u8>,
    mode: Option<Mode>,
}

impl Symbol {
    /// Builds a symbol with its function patterns and mode indicator.
    ///
    /// # Arguments
    ///
    /// * `version` - QR code version, between 1 and 40.
    /// * `payload` - The data to carry. Stored on the symbol only.
    /// * `mode` - Raw one-hot mode indicator (`0b0001`, `0b0010`, `0b0100` or `0b1000`).
    ///   `None` selects [`Mode::Alphanumeric`].
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidVersion`] if `version` is out of range and
    /// [`QrError::InvalidMode`] if `mode` is not one of the four one-hot values. No symbol is
    /// produced in either case.
    pub fn build(version: i32, payload: impl Into<Vec<u8>>, mode: Option<u8>) -> Result<Self> {
        let mut symbol = Self::build_structure(version, payload)?;
        let raw = mode.unwrap_or_else(|| Mode::default().mode_bits());
        symbol.mode = Some(symbol.grid.set_mode(raw)?);
        Ok(symbol)
    }

    /// Builds a symbol with only the finder, alignment and timing patterns in place.
    ///
    /// The four mode cells keep whatever the pattern stamping left there and [`Symbol::mode`]
    /// returns `None`.
    pub fn build_structure(version: i32, payload: impl Into<Vec<u8>>) -> Result<Self> {
        let version = Version::new(version)?;
        let mut grid = Grid::new(version.dimension());
        grid.draw_function_patterns();
        Ok(Self {
            version,
            grid,
            payload: payload.into(),
            mode: None,
        })
    }

    /// Returns this symbol's version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns this symbol's size, in the range [21, 177].
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the mode written into the mode cells, if any.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the module at the given coordinates.
    ///
    /// Coordinates outside the symbol's bounds return [`Cell::Light`], which is what a quiet zone
    /// around the symbol looks like.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index (0 is top).
    /// * `col` - Column index (0 is left).
    pub fn get_module(&self, row: i32, col: i32) -> Cell {
        let range = 0..self.size() as i32;
        if range.contains(&row) && range.contains(&col) {
            self.grid.get(row as usize, col as usize)
        } else {
            Cell::Light
        }
    }
}

/// The state of a single module.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    Dark,
    Light,
    /// Not assigned by any function pattern yet.
    #[default]
    Unset,
}

impl Cell {
    pub fn is_dark(self) -> bool {
        self == Cell::Dark
    }

    pub fn is_unset(self) -> bool {
        self == Cell::Unset
    }

    fn from_bit(bit: u8) -> Self {
        Cell::from(bit != 0)
    }
}

impl From<bool> for Cell {
    fn from(isdark: bool) -> Self {
        if isdark {
            Cell::Dark
        } else {
            Cell::Light
        }
    }
}

/// A square grid of modules, stored row-major.
///
/// Indexing outside `[0, size)` in either direction is a bug in the caller and panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    modules: Vec<Cell>,
}

impl Grid {
    /// Creates a `size` × `size` grid with every module [`Cell::Unset`].
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Cell::Unset; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.modules[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.modules[index] = cell;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.modules.chunks(self.size.max(1))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        let range = 0..self.size;
        assert!(
            range.contains(&row) && range.contains(&col),
            "Module ({}, {}) outside {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    /// Stamps every function pattern in reference order: finders, alignment, the always-dark
    /// module, then timing.
    ///
    /// Every stamp overwrites, so drawing twice leaves the grid as drawing once.
    pub fn draw_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_pattern();
        self.draw_dark_module();
        self.draw_timing_patterns();
    }

    /// Stamps the three finder patterns with their separators.
    ///
    /// The top-left corner takes [`FINDER_PATTERN`] as is. The top-right corner takes it
    /// transposed and column-reversed, the bottom-left corner transposed and row-reversed, so the
    /// light separator always faces the interior.
    pub fn draw_finder_patterns(&mut self) {
        let len = FINDER_PATTERN.len();
        let offset = self.size - len;
        for row in 0..len {
            for col in 0..len {
                self.set(row, col, Cell::from_bit(FINDER_PATTERN[row][col]));
                self.set(row, offset + col, Cell::from_bit(FINDER_PATTERN[len - 1 - col][row]));
                self.set(offset + row, col, Cell::from_bit(FINDER_PATTERN[col][len - 1 - row]));
            }
        }
    }

    /// Stamps one alignment pattern whose last row and column sit 4 modules inboard of the
    /// bottom-right corner.
    pub fn draw_alignment_pattern(&mut self) {
        let len = ALIGNMENT_PATTERN.len();
        let offset = self.size - len - 4;
        for row in 0..len {
            for col in 0..len {
                self.set(offset + row, offset + col, Cell::from_bit(ALIGNMENT_PATTERN[row][col]));
            }
        }
    }

    /// Forces the module above the bottom-left finder's separator corner dark.
    pub fn draw_dark_module(&mut self) {
        self.set(self.size - 8, 8, Cell::Dark);
    }

    /// Draws row 6 and column 6 between the finder separators, dark on even offsets from 8.
    pub fn draw_timing_patterns(&mut self) {
        for i in 8..self.size - 8 {
            let cell = Cell::from((i - 8) % 2 == 0);
            self.set(TIMING_INDEX, i, cell);
            self.set(i, TIMING_INDEX, cell);
        }
    }

    /// Writes a raw one-hot mode indicator into the four mode cells.
    ///
    /// With `d = size - 1`, `(d, d)` holds the Kanji bit, `(d, d-1)` the Binary bit, `(d-1, d)`
    /// the Alphanumeric bit and `(d-1, d-1)` the Numeric bit. Each cell ends up dark or light,
    /// whatever was stamped there before.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidMode`] if `raw` is not exactly one of the four mode values. The
    /// grid is not touched in that case.
    pub fn set_mode(&mut self, raw: u8) -> Result<Mode> {
        let mode = Mode::try_from(raw)?;
        self.draw_mode(mode);
        Ok(mode)
    }

    fn draw_mode(&mut self, mode: Mode) {
        let d = self.size - 1;
        let cells = [
            (d, d, Mode::Kanji),
            (d, d - 1, Mode::Binary),
            (d - 1, d, Mode::Alphanumeric),
            (d - 1, d - 1, Mode::Numeric),
        ];
        for (row, col, bit) in cells {
            self.set(row, col, Cell::from(mode == bit));
        }
    }
}

const TIMING_INDEX: usize = 6;

/// The 7×7 finder target plus its light separator row and column.
pub static FINDER_PATTERN: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 0],
    [1, 0, 0, 0, 0, 0, 1, 0],
    [1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 0, 0, 0, 0, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub static ALIGNMENT_PATTERN: [[u8; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 1, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1],
];

/// The character encoding capability announced by a symbol's mode indicator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Mode {
    Numeric,
    #[default]
    Alphanumeric,
    Binary,
    Kanji,
}

impl Mode {
    /// Returns the 4-bit one-hot wire value of this mode.
    pub const fn mode_bits(self) -> u8 {
        use Mode::*;
        match self {
            Numeric => 0b0001,
            Alphanumeric => 0b0010,
            Binary => 0b0100,
            Kanji => 0b1000,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = QrError;

    fn try_from(raw: u8) -> Result<Self> {
        use Mode::*;
        match raw {
            0b0001 => Ok(Numeric),
            0b0010 => Ok(Alphanumeric),
            0b0100 => Ok(Binary),
            0b1000 => Ok(Kanji),
            _ => Err(QrError::InvalidMode(raw)),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.mode_bits()
    }
}

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::InvalidVersion`] if the number is outside the range [1, 40]. Out of range
    /// values are rejected, never clamped.
    pub fn new(ver: i32) -> Result<Self> {
        u8::try_from(ver)
            .ok()
            .filter(|v| (Self::MIN.0..=Self::MAX.0).contains(v))
            .map(Self)
            .ok_or(QrError::InvalidVersion(ver))
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length in modules: 21 for version 1, growing by 4 per version.
    pub const fn dimension(self) -> usize {
        21 + (self.0 as usize - 1) * 4
    }
}

impl TryFrom<i32> for Version {
    type Error = QrError;

    fn try_from(ver: i32) -> Result<Self> {
        Version::new(ver)
    }
}

/// Returns the side length of a symbol of the given version.
///
/// # Errors
///
/// Returns [`QrError::InvalidVersion`] if `version` is outside the range [1, 40].
pub fn dimension(version: i32) -> Result<usize> {
    Ok(Version::new(version)?.dimension())
}
