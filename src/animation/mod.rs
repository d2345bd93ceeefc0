//! Transition descriptors.
//!
//! A [`Transition`] says *what* should animate for one node between two
//! commits: which property, from which value, to which value, and along
//! which curve. Running it is left to the mount layer.

mod property;
mod timing;

use std::time::Duration;

pub use property::{AnimatedProperties, AnimatedProperty};
pub use timing::{SpringConfig, TimingFunction};

/// Configuration for how a property should animate when it changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub timing: TimingFunction,
    pub delay: Duration,
}

impl TransitionSpec {
    /// Spec with the given duration and curve and no delay.
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self {
            duration,
            timing,
            delay: Duration::ZERO,
        }
    }

    /// Create a spring-based spec with the given configuration
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            // Spring duration is dynamic, this is max
            duration: Duration::from_millis(1000),
            timing: TimingFunction::Spring(config),
            delay: Duration::ZERO,
        }
    }

    /// Set the delay before the transition starts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing curve.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::spring(SpringConfig::DEFAULT)
    }
}

/// Animation of a single property between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTransition {
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
    pub spec: TransitionSpec,
}

/// Animation descriptor produced for one node in one commit.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Property(PropertyTransition),
    /// Children run together
    Parallel(Vec<Transition>),
    /// Children run one after another
    Sequence(Vec<Transition>),
}

impl Transition {
    /// Animate `property` from `from` to `to` with the default spec.
    pub fn property(property: AnimatedProperty, from: f32, to: f32) -> Self {
        Transition::Property(PropertyTransition {
            property,
            from,
            to,
            spec: TransitionSpec::default(),
        })
    }

    /// Animate alpha from `from` to `to`.
    pub fn fade(from: f32, to: f32) -> Self {
        Self::property(AnimatedProperty::Alpha, from, to)
    }

    /// Like [`Transition::property`], but `None` when the value did not change.
    pub fn changed(property: AnimatedProperty, from: f32, to: f32) -> Option<Self> {
        if from == to {
            None
        } else {
            Some(Self::property(property, from, to))
        }
    }

    /// Group transitions to run together. Returns `None` for an empty group
    /// and the transition itself for a group of one.
    pub fn parallel(transitions: impl IntoIterator<Item = Transition>) -> Option<Self> {
        Self::group(transitions, Transition::Parallel)
    }

    /// Group transitions to run one after another, collapsing like
    /// [`Transition::parallel`].
    pub fn sequence(transitions: impl IntoIterator<Item = Transition>) -> Option<Self> {
        Self::group(transitions, Transition::Sequence)
    }

    fn group(
        transitions: impl IntoIterator<Item = Transition>,
        make: fn(Vec<Transition>) -> Transition,
    ) -> Option<Self> {
        let mut transitions: Vec<Transition> = transitions.into_iter().collect();
        match transitions.len() {
            0 => None,
            1 => transitions.pop(),
            _ => Some(make(transitions)),
        }
    }

    /// Replace the spec of every property transition in this tree.
    pub fn with_spec(mut self, spec: TransitionSpec) -> Self {
        self.for_each_mut(&mut |p: &mut PropertyTransition| p.spec = spec);
        self
    }

    /// Set the duration of every property transition in this tree.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.for_each_mut(&mut |p: &mut PropertyTransition| p.spec.duration = duration);
        self
    }

    /// Set the timing curve of every property transition in this tree.
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.for_each_mut(&mut |p: &mut PropertyTransition| p.spec.timing = timing);
        self
    }

    /// Set the delay of every property transition in this tree.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.for_each_mut(&mut |p: &mut PropertyTransition| p.spec.delay = delay);
        self
    }

    /// The leaf transition, if this is a single-property transition.
    pub fn as_property(&self) -> Option<&PropertyTransition> {
        match self {
            Transition::Property(p) => Some(p),
            _ => None,
        }
    }

    /// All property transitions in depth-first order.
    pub fn property_transitions(&self) -> Vec<&PropertyTransition> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    /// Set of properties animated anywhere in this tree.
    pub fn properties(&self) -> AnimatedProperties {
        self.property_transitions()
            .iter()
            .fold(AnimatedProperties::empty(), |acc, p| acc | p.property.flag())
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a PropertyTransition>) {
        match self {
            Transition::Property(p) => out.push(p),
            Transition::Parallel(children) | Transition::Sequence(children) => {
                for child in children {
                    child.collect(out);
                }
            }
        }
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut PropertyTransition)) {
        match self {
            Transition::Property(p) => f(p),
            Transition::Parallel(children) | Transition::Sequence(children) => {
                for child in children {
                    child.for_each_mut(f);
                }
            }
        }
    }
}
