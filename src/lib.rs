//! Carry per-node render data across commits of a component tree and turn
//! the difference into transitions.
//!
//! Each commit builds a fresh tree. Nodes that want to animate get a
//! [`TransitionCreator`] keyed by a path-based [`IdentityKey`], and the
//! [`TransitionCoordinator`] matches those keys against the previous commit:
//! the outgoing creator records its [`RenderData`], the incoming one applies
//! it and computes a [`Transition`].
//!
//! ```ignore
//! let mut coordinator = TransitionCoordinator::new(TransitionsConfig::default());
//!
//! // First commit: nothing to animate from
//! coordinator.commit(RenderTree::new(view(1.0)).transition_creators())?;
//!
//! // Second commit: opacity went from 1.0 to 0.0
//! let result = coordinator.commit(RenderTree::new(view(0.0)).transition_creators())?;
//! ```

pub mod animation;
pub mod component;
pub mod config;
pub mod coordinator;
pub mod creator;
pub mod error;
pub mod identity;
pub mod render_data;
pub mod tree;

pub use animation::{
    AnimatedProperties, AnimatedProperty, PropertyTransition, Transition, TransitionSpec,
};
pub use component::{Component, ComponentContext, Render, ScopedComponentInfo, SpecComponent};
pub use config::{ErrorPolicy, TransitionsConfig, TransitionsConfigBuilder};
pub use coordinator::{CommitTransitions, TransitionCoordinator};
pub use creator::{OptimisticTransitionCreator, SpecTransitionCreator, TransitionCreator};
pub use error::{Operation, Result, TransitionError};
pub use identity::{GlobalKey, IdentityKey};
pub use render_data::RenderData;
pub use tree::{Node, RenderTree};

pub mod prelude {
    pub use crate::animation::{
        AnimatedProperties, AnimatedProperty, SpringConfig, TimingFunction, Transition,
        TransitionSpec,
    };
    pub use crate::component::{Component, ComponentContext, Render, SpecComponent};
    pub use crate::config::{ErrorPolicy, TransitionsConfig};
    pub use crate::coordinator::TransitionCoordinator;
    pub use crate::creator::TransitionCreator;
    pub use crate::error::TransitionError;
    pub use crate::identity::IdentityKey;
    pub use crate::render_data::RenderData;
    pub use crate::tree::{Node, RenderTree};
}
