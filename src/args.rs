//! Command-line arguments for the `qrgrid` binary.

use clap::Parser;
use std::path::PathBuf;

/// Lays out a QR code symbol skeleton and prints it to the terminal.
#[derive(Debug, Parser)]
#[command(name = "qrgrid")]
#[command(version, about)]
pub struct Args {
    /// Data to be encoded
    #[arg(long)]
    pub data: String,

    /// QR code version, 1 to 40
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub code_version: i32,

    /// QR code mode: Numeric(1), Alphanumeric(2), Binary(4), Kanji(8)
    #[arg(long, default_value_t = 2)]
    pub mode: u8,

    /// Print the symbol without the decorative border
    #[arg(long)]
    pub no_border: bool,

    /// Also save the symbol as a PNG image in this directory
    #[arg(long, value_name = "DIR")]
    pub png: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["qrgrid", "--data", "HELLO"]).unwrap();
        assert_eq!(args.data, "HELLO");
        assert_eq!(args.code_version, 1);
        assert_eq!(args.mode, 2);
        assert!(!args.no_border);
        assert!(args.png.is_none());
    }

    #[test]
    fn test_data_is_required() {
        assert!(Args::try_parse_from(["qrgrid"]).is_err());
    }

    #[test]
    fn test_out_of_range_values_reach_the_builder() {
        let args = Args::try_parse_from([
            "qrgrid",
            "--data",
            "x",
            "--code-version",
            "-1",
            "--mode",
            "3",
            "--no-border",
            "--png",
            "out",
        ])
        .unwrap();
        assert_eq!(args.code_version, -1);
        assert_eq!(args.mode, 3);
        assert!(args.no_border);
        assert_eq!(args.png, Some(PathBuf::from("out")));
    }
}
