use crate::geometry::DTransformation;

/// A placed pad-stack: reference to a prototype of the library plus its placement
#[derive(Clone, Debug, PartialEq)]
pub struct PstkInstance {
    /// Index of the prototype in the library
    pub proto: usize,
    pub placement: DTransformation,
}

impl PstkInstance {
    pub fn new(proto: usize, placement: DTransformation) -> Self {
        Self { proto, placement }
    }
}
