use pstk_crescent::io::svg::SvgDrawOptions;
use pstk_crescent::util::CrescentConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the command line front-end
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct CliConfig {
    /// Configuration of the crescent engine
    #[serde(default)]
    pub crescent_config: CrescentConfig,
    /// Options for drawing the SVG files
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
