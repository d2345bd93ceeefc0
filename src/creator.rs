//! Per-node bridges between the transition coordinator and components.

use crate::animation::Transition;
use crate::component::{ComponentContext, ScopedComponentInfo};
use crate::error::{Operation, Result, TransitionError};
use crate::identity::IdentityKey;
use crate::render_data::RenderData;

/// Slot used by the render-data creator of a node.
pub const RENDER_DATA_SLOT: u32 = 0;

/// One node's handle on the transition protocol for one commit.
pub trait TransitionCreator: Send {
    /// Key matching this creator to its counterpart in the previous commit.
    fn identity_key(&self) -> &IdentityKey;

    /// When true the coordinator calls [`TransitionCreator::create_transition`]
    /// directly with no previous data. When false it must first record the
    /// previous commit's render data and pass it in.
    fn supports_optimistic_transitions(&self) -> bool;

    fn create_transition(&mut self, previous: Option<RenderData>) -> Result<Option<Transition>>;

    /// Capture this node's render data for the next commit.
    fn record_render_data(&self) -> Result<RenderData>;
}

/// Creator for a component that carries render data across commits.
#[derive(Debug)]
pub struct SpecTransitionCreator {
    info: ScopedComponentInfo,
    identity_key: IdentityKey,
}

impl SpecTransitionCreator {
    /// Creator for the component in `info`, keyed at [`RENDER_DATA_SLOT`].
    pub fn new(info: ScopedComponentInfo) -> Self {
        let identity_key = IdentityKey::new(info.context.global_key().clone(), RENDER_DATA_SLOT);
        Self { info, identity_key }
    }

    fn unsupported(&self, operation: Operation) -> TransitionError {
        TransitionError::UnsupportedCapability {
            operation,
            component: self.info.component.name().to_string(),
            key: self.identity_key.clone(),
        }
    }
}

impl TransitionCreator for SpecTransitionCreator {
    fn identity_key(&self) -> &IdentityKey {
        &self.identity_key
    }

    fn supports_optimistic_transitions(&self) -> bool {
        false
    }

    fn create_transition(&mut self, previous: Option<RenderData>) -> Result<Option<Transition>> {
        // Checked again here: the recording side may have been a different
        // instance from another commit.
        let Some(component) = self.info.component.render_data_capable_mut() else {
            return Err(self.unsupported(Operation::Apply));
        };
        component.apply_previous_render_data(previous);
        Ok(component.create_transition(&self.info.context))
    }

    fn record_render_data(&self) -> Result<RenderData> {
        let component = self
            .info
            .component
            .render_data_capable()
            .ok_or_else(|| self.unsupported(Operation::Record))?;
        component
            .record_render_data(&self.info.context, None)
            .ok_or_else(|| TransitionError::MissingRenderData {
                component: component.name().to_string(),
                key: self.identity_key.clone(),
            })
    }
}

type TransitionHook = Box<dyn FnMut(&ComponentContext) -> Option<Transition> + Send>;

/// Creator for a transition hook that knows its own previous state.
///
/// Hooks never take part in render-data carrying, so the coordinator asks
/// them for a transition in a single pass.
pub struct OptimisticTransitionCreator {
    context: ComponentContext,
    identity_key: IdentityKey,
    name: String,
    hook: TransitionHook,
}

impl OptimisticTransitionCreator {
    /// `index` is the hook's position on its node. The creator is keyed at
    /// `index + 1` so it never shares a key with the node's render-data
    /// creator.
    pub fn new<F>(context: ComponentContext, name: impl Into<String>, index: u32, hook: F) -> Self
    where
        F: FnMut(&ComponentContext) -> Option<Transition> + Send + 'static,
    {
        let slot = RENDER_DATA_SLOT + 1 + index;
        let identity_key = IdentityKey::new(context.global_key().clone(), slot);
        Self {
            context,
            identity_key,
            name: name.into(),
            hook: Box::new(hook),
        }
    }
}

impl std::fmt::Debug for OptimisticTransitionCreator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptimisticTransitionCreator")
            .field("identity_key", &self.identity_key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl TransitionCreator for OptimisticTransitionCreator {
    fn identity_key(&self) -> &IdentityKey {
        &self.identity_key
    }

    fn supports_optimistic_transitions(&self) -> bool {
        true
    }

    fn create_transition(&mut self, _previous: Option<RenderData>) -> Result<Option<Transition>> {
        Ok((self.hook)(&self.context))
    }

    fn record_render_data(&self) -> Result<RenderData> {
        Err(TransitionError::UnsupportedCapability {
            operation: Operation::Record,
            component: self.name.clone(),
            key: self.identity_key.clone(),
        })
    }
}
