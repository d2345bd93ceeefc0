#![allow(dead_code)]

use segue::prelude::*;
use segue::ScopedComponentInfo;
use serde::{Deserialize, Serialize};

/// Render data recorded by [`Fading`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FadeRenderData {
    pub opacity: f32,
}

/// Component that fades between the opacity of consecutive commits.
pub struct Fading {
    pub opacity: f32,
    pub needs_previous: bool,
    /// Breaks the contract by recording nothing
    pub records_nothing: bool,
    pub previous: Option<FadeRenderData>,
}

impl Fading {
    pub fn new(opacity: f32) -> Self {
        Self {
            opacity,
            needs_previous: true,
            records_nothing: false,
            previous: None,
        }
    }

    pub fn without_render_data(opacity: f32) -> Self {
        Self {
            needs_previous: false,
            ..Self::new(opacity)
        }
    }

    pub fn faulty(opacity: f32) -> Self {
        Self {
            records_nothing: true,
            ..Self::new(opacity)
        }
    }
}

impl SpecComponent for Fading {
    fn name(&self) -> &str {
        "Fading"
    }

    fn needs_previous_render_data(&self) -> bool {
        self.needs_previous
    }

    fn apply_previous_render_data(&mut self, previous: Option<RenderData>) {
        self.previous = previous.and_then(|data| data.downcast::<FadeRenderData>().ok());
    }

    fn record_render_data(
        &self,
        _context: &ComponentContext,
        _existing: Option<RenderData>,
    ) -> Option<RenderData> {
        if self.records_nothing {
            return None;
        }
        Some(RenderData::new(FadeRenderData {
            opacity: self.opacity,
        }))
    }

    fn create_transition(&mut self, _context: &ComponentContext) -> Option<Transition> {
        let previous = self.previous.take()?;
        Transition::changed(AnimatedProperty::Alpha, previous.opacity, self.opacity)
    }
}

/// Render data recorded by [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelRenderData {
    pub x: f32,
    pub width: f32,
}

/// Component animating its position and width together.
pub struct Panel {
    pub x: f32,
    pub width: f32,
    pub previous: Option<PanelRenderData>,
}

impl Panel {
    pub fn new(x: f32, width: f32) -> Self {
        Self {
            x,
            width,
            previous: None,
        }
    }
}

impl SpecComponent for Panel {
    fn name(&self) -> &str {
        "Panel"
    }

    fn needs_previous_render_data(&self) -> bool {
        true
    }

    fn apply_previous_render_data(&mut self, previous: Option<RenderData>) {
        self.previous = previous.and_then(|data| data.downcast::<PanelRenderData>().ok());
    }

    fn record_render_data(
        &self,
        _context: &ComponentContext,
        _existing: Option<RenderData>,
    ) -> Option<RenderData> {
        Some(RenderData::new(PanelRenderData {
            x: self.x,
            width: self.width,
        }))
    }

    fn create_transition(&mut self, _context: &ComponentContext) -> Option<Transition> {
        let previous = self.previous.take()?;
        Transition::parallel(
            [
                Transition::changed(AnimatedProperty::X, previous.x, self.x),
                Transition::changed(AnimatedProperty::Width, previous.width, self.width),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

/// Component without render-data support.
pub struct Label(pub &'static str);

impl Render for Label {
    fn name(&self) -> &str {
        self.0
    }
}

pub fn context(path: &[&str]) -> ComponentContext {
    let (root, rest) = path.split_first().expect("non-empty path");
    let key = rest
        .iter()
        .fold(segue::GlobalKey::root(root), |key, segment| key.child(segment));
    ComponentContext::new(key)
}

pub fn spec_creator(path: &[&str], component: Component) -> segue::SpecTransitionCreator {
    segue::SpecTransitionCreator::new(ScopedComponentInfo::new(context(path), component))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
