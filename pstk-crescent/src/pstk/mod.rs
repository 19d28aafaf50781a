mod instance;
mod library;
mod proto;
mod shape;

/// Conversion of shapes into placed outlines
pub mod placement;

#[doc(inline)]
pub use instance::PstkInstance;
#[doc(inline)]
pub use library::PstkLibrary;
#[doc(inline)]
pub use proto::{PstkProto, ShapeRecord};
#[doc(inline)]
pub use shape::{CircleShape, Coord, LineShape, PolyShape, PstkShape, ShapeKind};
