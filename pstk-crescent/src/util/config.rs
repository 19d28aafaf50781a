use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration of the crescent engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct CrescentConfig {
    /// Number of segments used to approximate a full circle when building placed outlines
    pub arc_segments: usize,
}

impl CrescentConfig {
    pub const MIN_ARC_SEGMENTS: usize = 3;

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.arc_segments >= Self::MIN_ARC_SEGMENTS,
            "arc_segments must be at least {}, got {}",
            Self::MIN_ARC_SEGMENTS,
            self.arc_segments
        );
        Ok(())
    }
}

impl Default for CrescentConfig {
    fn default() -> Self {
        Self { arc_segments: 32 }
    }
}
