#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Possible relations between a copper shape and the hole cut through it.
/// The shape is `RelationState` to the hole.
pub enum RelationState {
    /// shape ⊆ hole: the copper is drilled away completely
    ShapeInHole,
    /// hole ⊆ shape: the ordinary annular ring
    HoleInShape,
    /// the outlines of shape and hole cross each other
    Crossing,
    /// shape ∩ hole = ∅
    Disjoint,
}

impl RelationState {
    /// The relation as seen from the other operand, used whenever shape and hole were swapped for a call.
    pub fn invert(self) -> Self {
        match self {
            RelationState::ShapeInHole => RelationState::HoleInShape,
            RelationState::HoleInShape => RelationState::ShapeInHole,
            RelationState::Crossing => RelationState::Crossing,
            RelationState::Disjoint => RelationState::Disjoint,
        }
    }
}

/// Where a point lies relative to a closed shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoPosition {
    Interior,
    /// On the outline
    Boundary,
    Exterior,
}

/// One of the two ends of a capsule's centerline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapEnd {
    /// The end at the first point of the centerline
    Start,
    /// The end at the second point of the centerline
    End,
}
