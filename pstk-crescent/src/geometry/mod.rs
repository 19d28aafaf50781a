mod d_transformation;

/// Set of enums representing various geometric properties
pub mod geo_enums;

/// Set of traits representing various geometric properties & operations
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;

#[doc(inline)]
pub use transformation::Transformation;
