use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::crescent::relation::relate;
use crate::geometry::geo_enums::RelationState;
use crate::pstk::{PstkShape, ShapeKind};

/// Cached outcome of classifying a shape against the hole of its pad-stack
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassificationFlags {
    /// The shape keeps copper around the hole
    pub connected: bool,
    /// The hole crosses the outline of the shape, leaving a crescent
    pub crescent: bool,
    /// The hole removes the shape completely
    pub full_cover: bool,
}

impl ClassificationFlags {
    /// All flags cleared: nothing to connect to
    pub fn unconnected() -> Self {
        Self {
            connected: false,
            crescent: false,
            full_cover: false,
        }
    }
}

impl Default for ClassificationFlags {
    fn default() -> Self {
        Self {
            connected: true,
            crescent: false,
            full_cover: false,
        }
    }
}

impl From<RelationState> for ClassificationFlags {
    fn from(rel: RelationState) -> Self {
        let default = Self::default();
        match rel {
            RelationState::ShapeInHole => Self {
                full_cover: true,
                ..default
            },
            RelationState::HoleInShape => default,
            RelationState::Crossing => Self {
                crescent: true,
                ..default
            },
            RelationState::Disjoint => Self {
                connected: false,
                ..default
            },
        }
    }
}

/// Classifies a copper `shape` against `hole`.
/// Polygon contours are built (and cached) on demand.
///
/// A hole shadow as `hole` is legal and yields [`ClassificationFlags::unconnected`].
///
/// # Panics
/// When `shape` itself is a hole shadow.
pub fn classify(shape: &mut PstkShape, hole: &mut PstkShape) -> Result<ClassificationFlags> {
    if hole.kind() == ShapeKind::HoleShadow {
        return Ok(ClassificationFlags::unconnected());
    }
    assert!(
        shape.kind() != ShapeKind::HoleShadow,
        "a hole shadow can not be classified as a copper shape"
    );

    let shape_kind = shape.kind();
    let hole_kind = hole.kind();
    let rel = relate(&shape.materialize()?, &hole.materialize()?);
    let flags = ClassificationFlags::from(rel);
    debug!("[CL] {shape_kind:?} vs {hole_kind:?} hole: {rel:?} -> {flags:?}");

    Ok(flags)
}
