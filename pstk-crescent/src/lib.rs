#![doc = document_features::document_features!()]
//! Pad-stack shape/hole relationship classifier and crescent clearance engine.
//!
//! Decides for every copper shape of a pad-stack prototype whether its hole fully drills it away,
//! sits inside it, crosses its outline or misses it, and renders the residual "crescent" copper on demand.

/// Classification of shape/hole pairs and rendering of crescents
pub mod crescent;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing pad-stack libraries and exporting classification reports
pub mod io;

/// Pad-stack prototypes, shapes and placed instances
pub mod pstk;

/// Helper functions which do not belong to any specific module
pub mod util;
