//! Components as seen by the transition protocol.
//!
//! Only the [`Component::Spec`] variant can carry render data between
//! commits; the capability check is an exhaustive match over the variants.

use crate::animation::Transition;
use crate::identity::GlobalKey;
use crate::render_data::RenderData;

/// Per-commit context handed to a component's transition callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentContext {
    global_key: GlobalKey,
}

impl ComponentContext {
    /// Context for the node at `global_key`.
    pub fn new(global_key: GlobalKey) -> Self {
        Self { global_key }
    }

    /// Path of the node being built.
    pub fn global_key(&self) -> &GlobalKey {
        &self.global_key
    }
}

/// A component without render-data support.
pub trait Render: Send {
    /// Name used as the node's default key segment and in errors.
    fn name(&self) -> &str;
}

/// A component that may carry render data from one commit to the next.
pub trait SpecComponent: Send {
    fn name(&self) -> &str;

    /// Whether this instance wants its previous commit's render data.
    fn needs_previous_render_data(&self) -> bool;

    /// Store the previous commit's render data on this instance so that
    /// [`SpecComponent::create_transition`] can compare old and new values.
    /// `None` means there is nothing to animate from.
    fn apply_previous_render_data(&mut self, previous: Option<RenderData>);

    /// Capture the state the next commit needs. `existing` is the data
    /// applied to this instance earlier, if any.
    fn record_render_data(
        &self,
        context: &ComponentContext,
        existing: Option<RenderData>,
    ) -> Option<RenderData>;

    /// Compare the applied previous data with the current state.
    fn create_transition(&mut self, context: &ComponentContext) -> Option<Transition>;
}

/// A node's component, tagged by capability.
pub enum Component {
    Stateless(Box<dyn Render>),
    Spec(Box<dyn SpecComponent>),
}

impl Component {
    /// Wrap a stateless component.
    pub fn stateless(render: impl Render + 'static) -> Self {
        Component::Stateless(Box::new(render))
    }

    /// Wrap a render-data aware component.
    pub fn spec(component: impl SpecComponent + 'static) -> Self {
        Component::Spec(Box::new(component))
    }

    /// Name of the wrapped component.
    pub fn name(&self) -> &str {
        match self {
            Component::Stateless(render) => render.name(),
            Component::Spec(spec) => spec.name(),
        }
    }

    /// The capability gate: true iff this component may take part in the
    /// render-data protocol.
    pub fn supports_previous_render_data(&self) -> bool {
        self.render_data_capable().is_some()
    }

    /// The component narrowed to its render-data interface, if it passes
    /// the gate.
    pub fn render_data_capable(&self) -> Option<&dyn SpecComponent> {
        match self {
            Component::Spec(spec) if spec.needs_previous_render_data() => Some(spec.as_ref()),
            Component::Spec(_) | Component::Stateless(_) => None,
        }
    }

    /// Mutable form of [`Component::render_data_capable`].
    pub fn render_data_capable_mut(&mut self) -> Option<&mut (dyn SpecComponent + 'static)> {
        match self {
            Component::Spec(spec) if spec.needs_previous_render_data() => Some(spec.as_mut()),
            Component::Spec(_) | Component::Stateless(_) => None,
        }
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Stateless(render) => write!(f, "Stateless({})", render.name()),
            Component::Spec(spec) => write!(f, "Spec({})", spec.name()),
        }
    }
}

/// A component together with the context it was built in for one commit.
#[derive(Debug)]
pub struct ScopedComponentInfo {
    pub context: ComponentContext,
    pub component: Component,
}

impl ScopedComponentInfo {
    /// Pair `component` with the context it was built in.
    pub fn new(context: ComponentContext, component: Component) -> Self {
        Self { context, component }
    }
}
