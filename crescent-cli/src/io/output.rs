use pstk_crescent::io::ext_repr::{ExtPstkLibrary, ExtShapeReport};
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;

/// Everything written to the report file: the input, the classification of every shape and the configuration used
#[derive(Serialize, Deserialize, Clone)]
pub struct ReportOutput {
    pub library: ExtPstkLibrary,
    pub report: Vec<ExtShapeReport>,
    pub config: CliConfig,
}
