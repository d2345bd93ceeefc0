//! Minimal commit tree.
//!
//! Each commit builds a fresh [`RenderTree`]. Its only job here is to hand
//! out path-based [`GlobalKey`]s and to turn the nodes that declare an intent
//! to animate into [`TransitionCreator`]s.
//!
//! ## Keys
//!
//! A node's key is its parent's key plus a segment: the node's explicit key
//! if it has one, otherwise its component name. Reserved characters in the
//! name are escaped, and the n-th repeat of a name among siblings gets a `!n`
//! suffix, so
//!
//! ```text
//! Row
//! ├── Text        -> Row,Text
//! ├── Text        -> Row,Text!1
//! ├── Image       -> Row,Image
//! └── key "Text!1" -> Row,Text%211
//! ```
//!
//! Rebuilding the same shape yields the same keys, which is what lets the
//! coordinator match creators across commits.

use std::collections::HashMap;

use crate::animation::Transition;
use crate::component::{Component, ComponentContext, ScopedComponentInfo};
use crate::creator::{OptimisticTransitionCreator, SpecTransitionCreator, TransitionCreator};
use crate::identity::GlobalKey;

type Hook = Box<dyn FnMut(&ComponentContext) -> Option<Transition> + Send>;

/// A node of the commit tree.
pub struct Node {
    component: Component,
    key: Option<String>,
    hooks: Vec<(String, Hook)>,
    children: Vec<Node>,
}

impl Node {
    /// Leaf node for `component`.
    pub fn new(component: Component) -> Self {
        Self {
            component,
            key: None,
            hooks: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Use an explicit key segment instead of the component name. Any
    /// string is accepted; reserved characters are escaped in the path.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append one child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children in order.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attach a transition hook. Hooks source their previous state
    /// themselves and are computed in a single pass.
    pub fn transition<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: FnMut(&ComponentContext) -> Option<Transition> + Send + 'static,
    {
        self.hooks.push((name.into(), Box::new(hook)));
        self
    }

    fn segment(&self) -> &str {
        self.key.as_deref().unwrap_or_else(|| self.component.name())
    }
}

/// The tree built by one commit.
pub struct RenderTree {
    root: Node,
}

impl RenderTree {
    /// Tree rooted at `root`.
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Global keys of every node, in pre-order.
    pub fn global_keys(&self) -> Vec<GlobalKey> {
        let mut keys = Vec::new();
        let root_key = GlobalKey::root(self.root.segment());
        collect_keys(&self.root, root_key, &mut keys);
        keys
    }

    /// Consume the tree and build the creators for this commit, in
    /// pre-order.
    ///
    /// A node gets a [`SpecTransitionCreator`] when its component passes the
    /// render-data capability gate, and one [`OptimisticTransitionCreator`]
    /// per transition hook.
    pub fn transition_creators(self) -> Vec<Box<dyn TransitionCreator>> {
        let mut creators = Vec::new();
        let root_key = GlobalKey::root(self.root.segment());
        collect_creators(self.root, root_key, &mut creators);
        creators
    }
}

/// Keys of `children`, in order. Repeated segments are told apart by
/// their sibling index.
fn child_keys(parent: &GlobalKey, children: &[Node]) -> Vec<GlobalKey> {
    let mut seen: HashMap<&str, u32> = HashMap::new();
    children
        .iter()
        .map(|child| {
            let segment = child.segment();
            let count = seen.entry(segment).or_insert(0);
            let key = parent.child_indexed(segment, *count);
            *count += 1;
            key
        })
        .collect()
}

fn collect_keys(node: &Node, key: GlobalKey, out: &mut Vec<GlobalKey>) {
    let keys = child_keys(&key, &node.children);
    out.push(key);
    for (child, key) in node.children.iter().zip(keys) {
        collect_keys(child, key, out);
    }
}

fn collect_creators(node: Node, key: GlobalKey, out: &mut Vec<Box<dyn TransitionCreator>>) {
    let keys = child_keys(&key, &node.children);
    let Node {
        component,
        hooks,
        children,
        ..
    } = node;

    let context = ComponentContext::new(key);
    let name = component.name().to_string();
    if component.supports_previous_render_data() {
        let info = ScopedComponentInfo::new(context.clone(), component);
        out.push(Box::new(SpecTransitionCreator::new(info)));
    }
    for (index, (hook_name, hook)) in hooks.into_iter().enumerate() {
        out.push(Box::new(OptimisticTransitionCreator::new(
            context.clone(),
            format!("{name}.{hook_name}"),
            index as u32,
            hook,
        )));
    }

    for (child, key) in children.into_iter().zip(keys) {
        collect_creators(child, key, out);
    }
}
