use qrgrid::helper::{to_lines, RenderOptions};
use qrgrid::qrcode::{Cell, Mode, Symbol, FINDER_PATTERN};
use qrgrid::QrError;

const DARK: char = '#';
const LIGHT: char = '.';
const UNSET: char = '?';

fn options() -> RenderOptions {
    RenderOptions {
        dark: DARK,
        light: LIGHT,
        unset: UNSET,
        frame: '+',
        border: false,
    }
}

/// Whether a version 1 module is owned by a function pattern or the mode indicator.
fn is_function_module(row: usize, col: usize) -> bool {
    let finder = (row < 8 && col < 8) || (row < 8 && col >= 13) || (row >= 13 && col < 8);
    let alignment = (12..17).contains(&row) && (12..17).contains(&col);
    let timing = (row == 6 || col == 6) && (8..13).contains(&row.max(col));
    let dark_module = row == 13 && col == 8;
    let mode = row >= 19 && col >= 19;
    finder || alignment || timing || dark_module || mode
}

#[test]
fn hello_version_1_alphanumeric() {
    let symbol = Symbol::build(1, "HELLO", Some(Mode::Alphanumeric.mode_bits())).unwrap();
    assert_eq!(symbol.version().value(), 1);
    assert_eq!(symbol.mode(), Some(Mode::Alphanumeric));

    let lines = to_lines(&symbol, &options());
    let glyphs: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
    assert_eq!(glyphs.len(), 21);
    assert!(glyphs.iter().all(|row| row.len() == 21));

    for row in 0..8 {
        for col in 0..8 {
            let expected = if FINDER_PATTERN[row][col] == 1 { DARK } else { LIGHT };
            assert_eq!(glyphs[row][col], expected, "finder module ({}, {})", row, col);
        }
    }

    // 0b0010: only the Alphanumeric cell, second to last row, last column, is dark.
    assert_eq!(&glyphs[19][19..], &[LIGHT, DARK]);
    assert_eq!(&glyphs[20][19..], &[LIGHT, LIGHT]);

    for (row, line) in glyphs.iter().enumerate() {
        for (col, &glyph) in line.iter().enumerate() {
            if is_function_module(row, col) {
                assert_ne!(glyph, UNSET, "function module ({}, {}) left unset", row, col);
            } else {
                assert_eq!(glyph, UNSET, "module ({}, {}) should be unset", row, col);
            }
        }
    }
}

#[test]
fn failed_builds_produce_no_symbol() {
    assert!(matches!(Symbol::build(0, "HELLO", None), Err(QrError::InvalidVersion(0))));
    assert!(matches!(Symbol::build(41, "HELLO", None), Err(QrError::InvalidVersion(41))));
    assert!(matches!(Symbol::build(1, "HELLO", Some(0)), Err(QrError::InvalidMode(0))));
    assert!(matches!(Symbol::build(1, "HELLO", Some(6)), Err(QrError::InvalidMode(6))));
}

#[test]
fn every_mode_sets_exactly_one_corner_cell() {
    for ver in [1, 10, 40] {
        for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Binary, Mode::Kanji] {
            let symbol = Symbol::build(ver, "", Some(mode.mode_bits())).unwrap();
            let d = symbol.size() - 1;
            let dark = [(d, d), (d, d - 1), (d - 1, d), (d - 1, d - 1)]
                .iter()
                .filter(|&&(row, col)| symbol.grid().get(row, col) == Cell::Dark)
                .count();
            assert_eq!(dark, 1);
        }
    }
}
