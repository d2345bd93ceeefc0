//! Two commits of the same view: the badge fades out and the panel grows.
//!
//! Run with `RUST_LOG=segue=trace cargo run --example fade` to see the
//! coordinator's decisions.

use segue::prelude::*;

struct Badge {
    opacity: f32,
    previous: Option<f32>,
}

impl SpecComponent for Badge {
    fn name(&self) -> &str {
        "Badge"
    }

    fn needs_previous_render_data(&self) -> bool {
        true
    }

    fn apply_previous_render_data(&mut self, previous: Option<RenderData>) {
        self.previous = previous.and_then(|data| data.downcast::<f32>().ok());
    }

    fn record_render_data(
        &self,
        _context: &ComponentContext,
        _existing: Option<RenderData>,
    ) -> Option<RenderData> {
        Some(RenderData::new(self.opacity))
    }

    fn create_transition(&mut self, _context: &ComponentContext) -> Option<Transition> {
        Transition::changed(AnimatedProperty::Alpha, self.previous?, self.opacity)
    }
}

struct Title;

impl Render for Title {
    fn name(&self) -> &str {
        "Title"
    }
}

fn view(opacity: f32, expanded: bool) -> RenderTree {
    let height = if expanded { 240.0 } else { 120.0 };
    RenderTree::new(
        Node::new(Component::stateless(Title))
            .child(Node::new(Component::spec(Badge {
                opacity,
                previous: None,
            })))
            .transition("expand", move |_| {
                expanded.then(|| {
                    Transition::property(AnimatedProperty::Height, 120.0, height)
                        .timing(TimingFunction::EaseOut)
                })
            }),
    )
}

fn main() -> segue::Result<()> {
    env_logger::init();

    let mut coordinator = TransitionCoordinator::new(
        TransitionsConfig::builder()
            .error_policy(ErrorPolicy::LogAndSkip)
            .build(),
    );

    for (opacity, expanded) in [(1.0, false), (0.0, true)] {
        let result = coordinator.commit(view(opacity, expanded).transition_creators())?;
        println!("commit {}:", result.commit);
        for (key, transition) in &result.transitions {
            println!("  {key}: {transition:?}");
        }
    }

    Ok(())
}
