mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{init_logger, spec_creator, Fading, Label, Panel};
use segue::prelude::*;
use segue::{GlobalKey, Operation};

fn view(opacity: f32) -> RenderTree {
    RenderTree::new(
        Node::new(Component::stateless(Label("Root"))).children([
            Node::new(Component::spec(Fading::new(opacity))),
            Node::new(Component::stateless(Label("Text"))),
        ]),
    )
}

fn fading_key() -> IdentityKey {
    IdentityKey::new(GlobalKey::root("Root").child("Fading"), 0)
}

#[test]
fn test_two_commits_produce_fade() {
    init_logger();
    let mut coordinator = TransitionCoordinator::new(TransitionsConfig::default());

    let first = coordinator.commit(view(1.0).transition_creators()).unwrap();
    assert_eq!(first.commit, 1);
    assert!(first.is_empty());

    let second = coordinator.commit(view(0.0).transition_creators()).unwrap();
    assert_eq!(second.commit, 2);
    assert_eq!(second.len(), 1);
    assert_eq!(second.get(&fading_key()), Some(&Transition::fade(1.0, 0.0)));
    assert_eq!(coordinator.commit_count(), 2);
}

#[test]
fn test_unmatched_creator_starts_fresh() {
    let mut coordinator = TransitionCoordinator::default();
    coordinator.commit(view(1.0).transition_creators()).unwrap();

    // Same component under a different key has no predecessor
    let moved = RenderTree::new(
        Node::new(Component::stateless(Label("Root")))
            .child(Node::new(Component::spec(Fading::new(0.0))).key("moved")),
    );
    let result = coordinator.commit(moved.transition_creators()).unwrap();
    assert!(result.is_empty());
    assert_eq!(
        coordinator.retained_keys(),
        vec![IdentityKey::new(GlobalKey::root("Root").child("moved"), 0)]
    );
}

#[test]
fn test_sibling_order_drives_matching() {
    let tree = |a: f32, b: f32| {
        RenderTree::new(Node::new(Component::stateless(Label("Root"))).children([
            Node::new(Component::spec(Fading::new(a))),
            Node::new(Component::spec(Fading::new(b))),
        ]))
    };

    let mut coordinator = TransitionCoordinator::default();
    coordinator.commit(tree(1.0, 0.0).transition_creators()).unwrap();
    let result = coordinator.commit(tree(0.5, 0.0).transition_creators()).unwrap();

    let root = GlobalKey::root("Root");
    assert_eq!(
        result.get(&IdentityKey::new(root.child("Fading"), 0)),
        Some(&Transition::fade(1.0, 0.5))
    );
    assert_eq!(result.get(&IdentityKey::new(root.child_indexed("Fading", 1), 0)), None);
}

#[test]
fn test_optimistic_hooks_skip_record() {
    let calls = Arc::new(AtomicUsize::new(0));
    let tree = || {
        let calls = calls.clone();
        RenderTree::new(
            Node::new(Component::stateless(Label("Root"))).transition("spin", move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Some(Transition::property(AnimatedProperty::Rotation, 0.0, 1.0))
            }),
        )
    };

    let mut coordinator = TransitionCoordinator::default();
    let first = coordinator.commit(tree().transition_creators()).unwrap();
    let second = coordinator.commit(tree().transition_creators()).unwrap();

    // Produced on the first commit as well, no predecessor needed
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        second.transitions[0].0,
        IdentityKey::new(GlobalKey::root("Root"), 1)
    );
}

#[test]
fn test_abort_policy_keeps_previous_commit() {
    let mut coordinator = TransitionCoordinator::default();
    coordinator
        .commit(vec![Box::new(spec_creator(
            &["Root", "Fading"],
            Component::spec(Fading::faulty(1.0)),
        ))])
        .unwrap();

    let err = coordinator
        .commit(vec![Box::new(spec_creator(
            &["Root", "Fading"],
            Component::spec(Fading::new(0.0)),
        ))])
        .unwrap_err();
    assert!(matches!(err, TransitionError::MissingRenderData { .. }));

    // The failed pass is not counted and the faulty creator is still retained
    assert_eq!(coordinator.commit_count(), 1);
    assert_eq!(coordinator.retained_keys(), vec![fading_key()]);
}

#[test]
fn test_log_and_skip_policy_continues() {
    init_logger();
    let config = TransitionsConfig::builder()
        .error_policy(ErrorPolicy::LogAndSkip)
        .log_tag("segue-test")
        .build();
    let mut coordinator = TransitionCoordinator::new(config);

    let first: Vec<Box<dyn TransitionCreator>> = vec![
        Box::new(spec_creator(&["Root", "Label"], Component::stateless(Label("Label")))),
        Box::new(spec_creator(&["Root", "Panel"], Component::spec(Panel::new(0.0, 10.0)))),
    ];
    // The stateless creator already fails here, on the apply side
    assert_eq!(coordinator.commit(first).unwrap().skipped.len(), 1);

    let second: Vec<Box<dyn TransitionCreator>> = vec![
        Box::new(spec_creator(&["Root", "Label"], Component::stateless(Label("Label")))),
        Box::new(spec_creator(&["Root", "Panel"], Component::spec(Panel::new(0.0, 20.0)))),
    ];
    let result = coordinator.commit(second).unwrap();

    assert_eq!(result.skipped.len(), 1);
    assert!(matches!(
        result.skipped[0],
        TransitionError::UnsupportedCapability {
            operation: Operation::Record,
            ..
        }
    ));
    assert_eq!(
        result.transitions[0].1,
        Transition::property(AnimatedProperty::Width, 10.0, 20.0)
    );
}

#[test]
fn test_animations_disabled() {
    let config = TransitionsConfig::builder().animations_enabled(false).build();
    let mut coordinator = TransitionCoordinator::new(config);

    coordinator.commit(view(1.0).transition_creators()).unwrap();
    let result = coordinator.commit(view(0.0).transition_creators()).unwrap();
    assert!(result.is_empty());
    // Creators are still retained for when animations come back
    assert_eq!(coordinator.retained_keys(), vec![fading_key()]);
}

#[test]
fn test_duplicate_keys_keep_first() {
    let mut coordinator = TransitionCoordinator::default();
    coordinator
        .commit(vec![Box::new(spec_creator(
            &["Root", "Fading"],
            Component::spec(Fading::new(1.0)),
        ))])
        .unwrap();

    let result = coordinator
        .commit(vec![
            Box::new(spec_creator(&["Root", "Fading"], Component::spec(Fading::new(0.0)))),
            Box::new(spec_creator(&["Root", "Fading"], Component::spec(Fading::new(0.5)))),
        ])
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.get(&fading_key()), Some(&Transition::fade(1.0, 0.0)));
}

#[test]
fn test_explicit_key_resembling_sibling_index_still_animates() {
    let tree = |opacity: f32| {
        RenderTree::new(Node::new(Component::stateless(Label("Root"))).children([
            Node::new(Component::spec(Fading::new(1.0))),
            Node::new(Component::spec(Fading::new(1.0))),
            Node::new(Component::spec(Fading::new(opacity))).key("Fading!1"),
        ]))
    };

    let mut coordinator = TransitionCoordinator::default();
    coordinator.commit(tree(1.0).transition_creators()).unwrap();
    assert_eq!(coordinator.retained_keys().len(), 3);

    let result = coordinator.commit(tree(0.0).transition_creators()).unwrap();
    let keyed = IdentityKey::new(GlobalKey::root("Root").child("Fading!1"), 0);
    assert_eq!(result.len(), 1);
    assert_eq!(result.get(&keyed), Some(&Transition::fade(1.0, 0.0)));
}

#[test]
fn test_reset_forgets_previous_commit() {
    let mut coordinator = TransitionCoordinator::default();
    coordinator.commit(view(1.0).transition_creators()).unwrap();
    coordinator.reset();
    assert!(coordinator.retained_keys().is_empty());

    let result = coordinator.commit(view(0.0).transition_creators()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_pass_runs_on_background_thread() {
    fn assert_send<T: Send>() {}
    assert_send::<TransitionCoordinator>();

    let mut coordinator = TransitionCoordinator::default();
    coordinator.commit(view(1.0).transition_creators()).unwrap();

    let handle = std::thread::spawn(move || {
        let result = coordinator.commit(view(0.25).transition_creators()).unwrap();
        result.get(&fading_key()).cloned()
    });
    assert_eq!(handle.join().unwrap(), Some(Transition::fade(1.0, 0.25)));
}
