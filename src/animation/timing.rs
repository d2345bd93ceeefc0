//! Timing curves carried by transition descriptors.
//!
//! The curve is only described here; sampling it over time is the job of
//! whatever engine runs the transition.

/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    /// Default spring with pleasant overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };
}

/// Timing function that controls the animation curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingFunction {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Spring physics; the transition's duration is an upper bound
    Spring(SpringConfig),
}

impl TimingFunction {
    /// Whether the curve is physics-driven rather than time-driven.
    pub fn is_spring(&self) -> bool {
        matches!(self, TimingFunction::Spring(_))
    }
}
