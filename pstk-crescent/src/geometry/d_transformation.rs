use std::fmt::Display;

use ordered_float::NotNan;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Copy)]
/// Placement of a pad-stack instance, decomposed into a rotation,
/// an optional mirror about the x-axis and a translation (applied in that order).
pub struct DTransformation {
    /// The rotation in radians
    pub rotation: NotNan<f64>,
    /// Whether the rotated shapes are mirrored about the x-axis
    pub xmirror: bool,
    /// The translation in the x and y-axis
    pub translation: (NotNan<f64>, NotNan<f64>),
}

impl DTransformation {
    pub fn new(rotation: f64, xmirror: bool, translation: (f64, f64)) -> Self {
        Self {
            rotation: NotNan::new(rotation).expect("rotation is NaN"),
            xmirror,
            translation: (
                NotNan::new(translation.0).expect("translation.0 is NaN"),
                NotNan::new(translation.1).expect("translation.1 is NaN"),
            ),
        }
    }

    pub const fn empty() -> Self {
        const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
        Self {
            rotation: _0,
            xmirror: false,
            translation: (_0, _0),
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation.into()
    }

    pub fn mirrored(&self) -> bool {
        self.xmirror
    }

    pub fn translation(&self) -> (f64, f64) {
        (self.translation.0.into(), self.translation.1.into())
    }
}

impl Display for DTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {:.3}°, m: {}, t: ({:.3}, {:.3})",
            self.rotation.to_degrees(),
            self.xmirror,
            self.translation.0.into_inner(),
            self.translation.1.into_inner()
        )
    }
}
