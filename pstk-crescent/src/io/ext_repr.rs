use serde::{Deserialize, Serialize};

use crate::crescent::ClassificationFlags;
use crate::geometry::DTransformation;
use crate::pstk::Coord;

/// External representation of a [`PstkShape`](crate::pstk::PstkShape)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Circle {
        x: Coord,
        y: Coord,
        dia: Coord,
    },
    /// Capsule between (x1, y1) and (x2, y2)
    Line {
        x1: Coord,
        y1: Coord,
        x2: Coord,
        y2: Coord,
        thickness: Coord,
        #[serde(default)]
        square: bool,
    },
    /// Single contour, in any orientation
    Polygon(Vec<(Coord, Coord)>),
    /// Stand-in for the hole, with an optional outline that is already placed
    HoleShadow(Option<Vec<(f64, f64)>>),
}

/// External representation of a [`PstkProto`](crate::pstk::PstkProto)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPstkProto {
    /// Unique name of the prototype
    pub name: String,
    /// Diameter of the round drill, 0 when there is none
    #[serde(default)]
    pub hdia: Coord,
    #[serde(default)]
    pub hplated: bool,
    /// Slot replacing the round drill
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub slot: Option<ExtShape>,
    pub shapes: Vec<ExtShape>,
}

/// External representation of a [`PstkInstance`](crate::pstk::PstkInstance)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPstkInstance {
    /// Name of the prototype being placed
    pub proto: String,
    pub placement: ExtPlacement,
}

/// Rotation (in degrees), then mirror about the x-axis, then translation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacement {
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub xmirror: bool,
    pub translation: (f64, f64),
}

impl From<DTransformation> for ExtPlacement {
    fn from(dt: DTransformation) -> Self {
        ExtPlacement {
            rotation: dt.rotation().to_degrees(),
            xmirror: dt.mirrored(),
            translation: dt.translation(),
        }
    }
}

/// A set of prototypes and their placed instances
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPstkLibrary {
    pub protos: Vec<ExtPstkProto>,
    #[serde(default)]
    pub instances: Vec<ExtPstkInstance>,
}

/// Classification of a single shape of a prototype
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtShapeReport {
    pub proto: String,
    /// Index of the shape within the prototype
    pub index: usize,
    pub shape: ExtShape,
    /// Absent when the classification was stale at export
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flags: Option<ClassificationFlags>,
}
