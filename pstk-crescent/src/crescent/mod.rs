mod classify;
mod relation;

/// Polygon boolean based rendering of crescents
#[cfg(feature = "crescent-render")]
pub mod render;

#[doc(inline)]
pub use classify::ClassificationFlags;
#[doc(inline)]
pub use classify::classify;
#[doc(inline)]
pub use relation::Geometry;
#[doc(inline)]
pub use relation::{
    capsule_capsule, capsule_polygon, circle_capsule, circle_circle, circle_polygon,
    polygon_polygon, relate,
};
