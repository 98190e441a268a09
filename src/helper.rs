use crate::error::Result;
use crate::qrcode::{Cell, Symbol};

use image::{ImageBuffer, Luma};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Light modules between the symbol and the frame of a bordered text rendering.
pub const QUIET_ZONE: usize = 2;

/// Glyphs and layout for [`to_lines`].
///
/// The three cell glyphs must stay distinct so unset modules remain visible as unfinished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub dark: char,
    pub light: char,
    pub unset: char,
    /// Glyph of the outermost ring when `border` is on.
    pub frame: char,
    /// Wraps the symbol in a quiet zone of [`QUIET_ZONE`] light modules and a one-module frame.
    pub border: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: '█',
            light: ' ',
            unset: '·',
            frame: '█',
            border: true,
        }
    }
}

impl RenderOptions {
    /// Default glyphs without the border.
    pub fn plain() -> Self {
        Self {
            border: false,
            ..Self::default()
        }
    }

    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Dark => self.dark,
            Cell::Light => self.light,
            Cell::Unset => self.unset,
        }
    }
}

/*---- Text ----*/

/// Renders the symbol as one line of text per module row.
///
/// Without a border the result has exactly `size` lines of `size` glyphs. With a border, each side
/// grows by [`QUIET_ZONE`] light glyphs plus one frame glyph.
///
/// # Example
///
/// ```rust
/// use qrgrid::helper::{to_lines, RenderOptions};
/// use qrgrid::qrcode::Symbol;
///
/// let symbol = Symbol::build(1, "HELLO", None).unwrap();
/// let lines = to_lines(&symbol, &RenderOptions::plain());
/// assert_eq!(lines.len(), 21);
/// assert!(lines[0].starts_with("███████ "));
/// ```
pub fn to_lines(symbol: &Symbol, options: &RenderOptions) -> Vec<String> {
    let rows = symbol
        .grid()
        .rows()
        .map(|row| row.iter().map(|&cell| options.glyph(cell)).collect::<String>());
    if !options.border {
        return rows.collect();
    }

    let width = symbol.size() + 2 * (QUIET_ZONE + 1);
    let frame = options.frame.to_string().repeat(width);
    let quiet = format!("{0}{1}{0}", options.frame, options.light.to_string().repeat(width - 2));
    let margin = options.light.to_string().repeat(QUIET_ZONE);

    let mut lines = Vec::with_capacity(width);
    lines.push(frame.clone());
    lines.extend(std::iter::repeat(quiet.clone()).take(QUIET_ZONE));
    lines.extend(rows.map(|row| format!("{0}{1}{2}{1}{0}", options.frame, margin, row)));
    lines.extend(std::iter::repeat(quiet).take(QUIET_ZONE));
    lines.push(frame);
    lines
}

/// Writes the rendered lines to `out`, one per line.
pub fn write_symbol<W: Write>(
    out: &mut W,
    symbol: &Symbol,
    options: &RenderOptions,
) -> io::Result<()> {
    for line in to_lines(symbol, options) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/*---- Raster ----*/

const DARK_PIXEL: Luma<u8> = Luma([0u8]);
const LIGHT_PIXEL: Luma<u8> = Luma([255u8]);
const UNSET_PIXEL: Luma<u8> = Luma([128u8]);

/// Renders the symbol as a greyscale image with one pixel per module.
///
/// Dark modules are black, light modules and the `border` white, unset modules mid-grey.
///
/// # Example
///
/// ```
/// use qrgrid::helper::to_image_buffer;
/// use qrgrid::qrcode::Symbol;
///
/// let symbol = Symbol::build(1, "HELLO", None).unwrap();
/// let img = to_image_buffer(&symbol, 4);
/// assert_eq!(img.dimensions(), (29, 29));
/// ```
pub fn to_image_buffer(symbol: &Symbol, border: u32) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let size = symbol.size() as u32 + 2 * border;
    let mut img = ImageBuffer::new(size, size);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = y as i32 - border as i32;
        let col = x as i32 - border as i32;
        *pixel = match symbol.get_module(row, col) {
            Cell::Dark => DARK_PIXEL,
            Cell::Light => LIGHT_PIXEL,
            Cell::Unset => UNSET_PIXEL,
        };
    }

    img
}

/// Renders the symbol with a 4 module border and saves it as a PNG file.
///
/// # Arguments
///
/// * `symbol` - The symbol to save.
/// * `directory` - Optional. The directory the image is saved in, created if missing. Defaults
///   to "generated".
/// * `filename` - Optional. The file name, with or without the `.png` extension. Any other
///   extension is kept and `.png` appended. Defaults to a timestamp when missing or empty.
///
/// # Errors
///
/// Returns [`QrError::Io`](crate::error::QrError::Io) if the directory cannot be created and
/// [`QrError::Image`](crate::error::QrError::Image) if the image cannot be written.
///
/// # Returns
///
/// The path of the written file.
pub fn save_image(
    symbol: &Symbol,
    directory: Option<&Path>,
    filename: Option<&str>,
) -> Result<PathBuf> {
    let directory = directory.unwrap_or_else(|| Path::new("generated"));
    let stem = match filename.map(|name| name.strip_suffix(".png").unwrap_or(name)) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            let since_the_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            format!("qr_{}", since_the_epoch.as_millis())
        }
    };
    let file_path = directory.join(format!("{}.png", stem));

    if !directory.exists() {
        fs::create_dir_all(directory)?;
    }

    to_image_buffer(symbol, 4).save(&file_path)?;
    debug!("wrote version {} symbol to {}", symbol.version().value(), file_path.display());
    Ok(file_path)
}

/*---- Vector ----*/

// Returns a string of SVG code for an image depicting
// the given symbol, with the given number of border modules.
// Unset modules are drawn grey. The string always uses Unix newlines (\n).
pub fn to_svg_string(symbol: &Symbol, border: u32) -> String {
    let size = symbol.size();
    let dimension = size + 2 * border as usize;
    let path = |wanted: Cell| {
        let mut d = String::new();
        for (y, row) in symbol.grid().rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == wanted {
                    if !d.is_empty() {
                        d += " ";
                    }
                    d += &format!("M{},{}h1v1h-1z", x + border as usize, y + border as usize);
                }
            }
        }
        d
    };

    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += &format!("\t<path d=\"{}\" fill=\"#000000\"/>\n", path(Cell::Dark));
    let unset = path(Cell::Unset);
    if !unset.is_empty() {
        result += &format!("\t<path d=\"{}\" fill=\"#808080\"/>\n", unset);
    }
    result += "</svg>\n";
    result
}
