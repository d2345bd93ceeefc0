use std::fmt;

use bitflags::bitflags;

/// A visual property a transition can animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    Alpha,
    X,
    Y,
    Width,
    Height,
    Scale,
    Rotation,
}

impl AnimatedProperty {
    pub const ALL: [AnimatedProperty; 7] = [
        AnimatedProperty::Alpha,
        AnimatedProperty::X,
        AnimatedProperty::Y,
        AnimatedProperty::Width,
        AnimatedProperty::Height,
        AnimatedProperty::Scale,
        AnimatedProperty::Rotation,
    ];

    /// The single-bit set containing this property.
    pub fn flag(self) -> AnimatedProperties {
        match self {
            AnimatedProperty::Alpha => AnimatedProperties::ALPHA,
            AnimatedProperty::X => AnimatedProperties::X,
            AnimatedProperty::Y => AnimatedProperties::Y,
            AnimatedProperty::Width => AnimatedProperties::WIDTH,
            AnimatedProperty::Height => AnimatedProperties::HEIGHT,
            AnimatedProperty::Scale => AnimatedProperties::SCALE,
            AnimatedProperty::Rotation => AnimatedProperties::ROTATION,
        }
    }

    /// Lowercase name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            AnimatedProperty::Alpha => "alpha",
            AnimatedProperty::X => "x",
            AnimatedProperty::Y => "y",
            AnimatedProperty::Width => "width",
            AnimatedProperty::Height => "height",
            AnimatedProperty::Scale => "scale",
            AnimatedProperty::Rotation => "rotation",
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of properties touched by a transition
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct AnimatedProperties: u8 {
        const ALPHA    = 1 << 0;
        const X        = 1 << 1;
        const Y        = 1 << 2;
        const WIDTH    = 1 << 3;
        const HEIGHT   = 1 << 4;
        const SCALE    = 1 << 5;
        const ROTATION = 1 << 6;

        /// Properties that change a node's bounds
        const BOUNDS = Self::X.bits() | Self::Y.bits() | Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}
