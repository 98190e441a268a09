mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::{debug, error, info};
use qrgrid::helper::{save_image, write_symbol, RenderOptions};
use qrgrid::qrcode::Symbol;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Builds the symbol and writes it to `out`. Nothing is written unless the build succeeds.
fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let symbol = Symbol::build(args.code_version, args.data.as_bytes(), Some(args.mode))
        .with_context(|| {
            format!(
                "failed to build symbol (version {}, mode {})",
                args.code_version, args.mode
            )
        })?;
    debug!(
        "built {}x{} symbol, mode {:?}, {} payload bytes",
        symbol.size(),
        symbol.size(),
        symbol.mode(),
        symbol.payload().len()
    );

    let options = RenderOptions {
        border: !args.no_border,
        ..RenderOptions::default()
    };
    write_symbol(out, &symbol, &options).context("failed to write symbol")?;

    if let Some(directory) = args.png.as_deref() {
        let path = save_image(&symbol, Some(directory), None).context("failed to save PNG")?;
        info!("saved {}", path.display());
    }
    Ok(())
}
