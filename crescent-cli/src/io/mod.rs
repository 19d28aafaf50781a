use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use pstk_crescent::io::ext_repr::ExtPstkLibrary;
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::CliConfig;

pub mod cli;
pub mod output;

pub fn read_library(path: &Path) -> Result<ExtPstkLibrary> {
    let file = File::open(path)
        .with_context(|| format!("could not open library file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse library file: {}", path.display()))
}

/// Reads the configuration, falling back to the defaults when there is none
pub fn read_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        None => {
            warn!("[MAIN] no config file provided, use --config-file to provide a custom config");
            Ok(CliConfig::default())
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: CliConfig =
                serde_json::from_reader(reader).context("incorrect config file format")?;
            config.crescent_config.validate()?;
            Ok(config)
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!("[IO] json written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //make sure the epoch is initialized before the first log line
    LazyLock::force(&EPOCH);
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
