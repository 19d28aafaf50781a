use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use log::info;
use pstk_crescent::io::ext_repr::ExtPstkLibrary;
use pstk_crescent::io::export::export_report;
use pstk_crescent::io::import::import_library;
use pstk_crescent::io::svg::pstk_to_svg;

use crate::config::CliConfig;
use crate::io::output::ReportOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Classifies every prototype of the library, then writes the report and one SVG per instance to `output_folder`
pub fn run(
    ext_library: ExtPstkLibrary,
    config: CliConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<ReportOutput> {
    let mut library = import_library(&ext_library)?;
    library.update_all()?;

    let report = export_report(&library);
    let n_crescents = report
        .iter()
        .filter(|r| r.flags.is_some_and(|f| f.crescent))
        .count();
    info!(
        "[MAIN] classified {} shapes of {} prototypes, {} with crescent",
        report.len(),
        library.protos.len(),
        n_crescents
    );

    let output = ReportOutput {
        library: ext_library,
        report,
        config,
    };
    io::write_json(
        &output,
        &output_folder.join(format!("report_{input_stem}.json")),
    )?;

    for (i, instance) in library.instances.iter().enumerate() {
        let proto = library.proto_of(instance)?;
        let svg = pstk_to_svg(
            proto,
            instance,
            &config.crescent_config,
            config.svg_draw_options,
        )?;
        let svg_path = output_folder.join(format!("{input_stem}_{i}_{}.svg", proto.name));
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(output)
}
