mod capsule;
mod circle;
mod edge;
mod point;
mod rect;
mod simple_polygon;

/// Convex quadrangle containment, used for the straight body of capsules
pub mod quadrangle;

#[doc(inline)]
pub use capsule::Capsule;
#[doc(inline)]
pub use capsule::CapsuleAxis;
#[doc(inline)]
pub use capsule::CapsuleCaps;
#[doc(inline)]
pub use capsule::CapArc;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use simple_polygon::SPolygon;
