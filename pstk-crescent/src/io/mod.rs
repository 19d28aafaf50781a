/// External (serializable) representations of pad-stack libraries and reports
pub mod ext_repr;

/// Conversion of external representations into the internal model
pub mod import;

/// Conversion of the internal model into external representations
pub mod export;

/// Drawing placed pad-stacks and their crescents as SVG
#[cfg(feature = "crescent-render")]
pub mod svg;
