use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use crescent_cli::io;
use crescent_cli::io::cli::Cli;
use log::info;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = io::read_config(args.config_file.as_deref())?;
    info!("[MAIN] successfully parsed config: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let ext_library = io::read_library(&args.input_file)?;
    crescent_cli::run(ext_library, config, input_stem, &args.output_folder)?;

    Ok(())
}
