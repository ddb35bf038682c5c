//! Integration tests for composed animation trees
//!
//! These tests verify that:
//! - Leaves write interpolated values through nested combinators
//! - Time remapping of groups, sequences and inversions composes
//! - Implicit properties dispatch through real drivers

use reel_animation::{
    Animation, AnimationContext, AnimationScheduler, BasicAnimation, BasicTransition, Group,
    KeyPoints, KeyPointsAnimation, ManualAnimator, PropertyAnimation, Sequence, TimingFunction,
};
use reel_core::{AnimatableProperty, NormalizedTime};
use std::cell::RefCell;
use std::rc::Rc;

fn at(t: f64) -> NormalizedTime {
    NormalizedTime::from_interval(t, 1.0)
}

fn track(initial: f64) -> (AnimatableProperty<f64>, Rc<RefCell<Vec<f64>>>) {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let writes_clone = writes.clone();
    let property = AnimatableProperty::new(initial, move |v| writes_clone.borrow_mut().push(*v));
    (property, writes)
}

#[test]
fn test_basic_endpoints_and_midpoint() {
    let (property, writes) = track(0.0);
    let animation = BasicAnimation::new(2.0, 6.0, property.clone(), 1.0);

    animation.tick(NormalizedTime::ZERO);
    animation.tick(at(0.5));
    animation.tick(NormalizedTime::ONE);

    assert_eq!(*writes.borrow(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_double_inversion_matches_original() {
    let (direct, _) = track(0.0);
    let (boxed, _) = track(0.0);
    let original = BasicAnimation::new(0.0, 10.0, direct.clone(), 1.0)
        .with_timing(TimingFunction::EaseInOut);
    // Through trait objects the inversions cannot unwrap
    let twice: Box<dyn Animation> = BasicAnimation::new(0.0, 10.0, boxed.clone(), 1.0)
        .with_timing(TimingFunction::EaseInOut)
        .boxed()
        .inverted()
        .boxed()
        .inverted()
        .boxed();

    for step in 0..=20 {
        let t = at(step as f64 / 20.0);
        original.tick(t);
        twice.tick(t);
        assert!((direct.value() - boxed.value()).abs() < 1e-6);
    }
}

#[test]
fn test_group_finishes_short_child_early() {
    let (short, _) = track(0.0);
    let (long, _) = track(0.0);
    let group = Group::new([
        BasicAnimation::new(0.0, 1.0, short.clone(), 1.0).boxed(),
        BasicAnimation::new(0.0, 1.0, long.clone(), 2.0).boxed(),
    ])
    .unwrap();

    assert_eq!(group.duration(), 2.0);
    group.tick(at(0.5));

    assert_eq!(short.value(), 1.0);
    assert_eq!(long.value(), 0.5);
}

#[test]
fn test_sequence_boundary_starts_second_child() {
    let (first, first_writes) = track(-1.0);
    let (second, _) = track(-1.0);
    let sequence = Sequence::new([
        BasicAnimation::new(0.0, 1.0, first.clone(), 1.0).boxed(),
        BasicAnimation::new(10.0, 20.0, second.clone(), 3.0).boxed(),
    ])
    .unwrap();

    assert_eq!(sequence.duration(), 4.0);
    sequence.tick(at(0.25));

    assert!(first_writes.borrow().is_empty());
    assert_eq!(first.value(), -1.0);
    assert_eq!(second.value(), 10.0);
}

#[test]
fn test_sequence_terminal_tick_with_uneven_spans() {
    let (earlier, _) = track(0.0);
    let (last, _) = track(0.0);
    let sequence = Sequence::new([
        BasicAnimation::new(0.0, 1.0, earlier.clone(), 0.1).boxed(),
        BasicAnimation::new(0.0, 1.0, earlier.clone(), 0.2).boxed(),
        BasicAnimation::new(0.0, 7.0, last.clone(), 0.7).boxed(),
    ])
    .unwrap();

    sequence.tick(NormalizedTime::ONE);

    assert_eq!(last.value(), 7.0);
}

#[test]
fn test_key_points_through_property() {
    let (property, _) = track(0.0);
    let animation = KeyPointsAnimation::new(
        0.0,
        property.clone(),
        2.0,
        KeyPoints::new().linear(10.0, 0.5).linear(20.0, 1.0),
    )
    .unwrap();

    assert_eq!(animation.interpolated_value(at(0.25)), 5.0);
    assert_eq!(animation.interpolated_value(at(0.75)), 15.0);
    animation.tick(NormalizedTime::ONE);
    assert_eq!(property.value(), 20.0);
}

#[test]
fn test_nested_tree_remaps_time() {
    // sequence(group(a: 1s, b: 2s), invert(c: 2s)) lasts 4s
    let (a, _) = track(0.0);
    let (b, _) = track(0.0);
    let (c, _) = track(0.0);
    let tree = Sequence::new([
        Group::new([
            BasicAnimation::new(0.0, 1.0, a.clone(), 1.0).boxed(),
            BasicAnimation::new(0.0, 1.0, b.clone(), 2.0).boxed(),
        ])
        .unwrap()
        .boxed(),
        BasicAnimation::new(0.0, 1.0, c.clone(), 2.0)
            .inverted()
            .boxed(),
    ])
    .unwrap();
    assert_eq!(tree.duration(), 4.0);

    // 1s in: group at 0.5
    tree.tick(at(0.25));
    assert_eq!(a.value(), 1.0);
    assert_eq!(b.value(), 0.5);
    assert_eq!(c.value(), 0.0);

    // 3s in: inverted child at local 0.5
    tree.tick(at(0.75));
    assert_eq!(c.value(), 0.5);

    // End: inverted child back at its start
    tree.tick(NormalizedTime::ONE);
    assert_eq!(c.value(), 0.0);
}

#[test]
fn test_single_child_wrappers_match_child() {
    let (alone, alone_writes) = track(0.0);
    let (grouped, group_writes) = track(0.0);
    let (sequenced, sequence_writes) = track(0.0);
    let child = |property: &AnimatableProperty<f64>| {
        BasicAnimation::new(3.0, 9.0, property.clone(), 1.5).with_timing(TimingFunction::EaseInOut)
    };
    let plain = child(&alone);
    let group = Group::new([child(&grouped).boxed()]).unwrap();
    let sequence = Sequence::new([child(&sequenced).boxed()]).unwrap();

    for step in 0..=10 {
        let t = at(step as f64 / 10.0);
        plain.tick(t);
        group.tick(t);
        sequence.tick(t);
    }

    assert_eq!(*group_writes.borrow(), *alone_writes.borrow());
    assert_eq!(*sequence_writes.borrow(), *alone_writes.borrow());
}

#[test]
fn test_implicit_property_with_scheduler() {
    let scheduler = Rc::new(AnimationScheduler::new());
    let context = AnimationContext::new(scheduler.clone());
    let mut width = context.implicit_property(100.0f64, |_| {}, BasicTransition::new(1.0).unwrap());

    width.set(200.0);
    assert_eq!(scheduler.animation_count(), 1);

    scheduler.advance(0.0);
    assert_eq!(width.presentation_value(), 100.0);
    scheduler.advance(0.5);
    assert_eq!(width.presentation_value(), 150.0);
    assert_eq!(*width.value(), 200.0);
    scheduler.advance(0.5);
    assert_eq!(width.presentation_value(), 200.0);
    assert!(!scheduler.has_active_animations());
}

#[test]
fn test_implicit_property_retargets_from_presentation_value() {
    let animator = Rc::new(ManualAnimator::new());
    let context = AnimationContext::new(animator.clone());
    let mut x = context.implicit_property(0.0f64, |_| {}, BasicTransition::new(2.0).unwrap());

    x.set(10.0);
    animator.seek(1.0);
    assert_eq!(x.presentation_value(), 5.0);

    // The new animation starts where the old one was interrupted
    x.set(0.0);
    assert_eq!(x.presentation_value(), 5.0);
    animator.seek(2.0);
    assert_eq!(x.presentation_value(), 0.0);
}

#[test]
fn test_callback_may_submit_animations() {
    let scheduler = Rc::new(AnimationScheduler::new());
    let context = AnimationContext::new(scheduler.clone());
    let follower = AnimatableProperty::detached(0.0f64);
    let follower_clone = follower.clone();
    let chained = context.clone();

    let leader = AnimatableProperty::new(0.0f64, move |v| {
        if *v >= 1.0 {
            chained.run(BasicAnimation::new(0.0, 1.0, follower_clone.clone(), 1.0));
        }
    });
    scheduler.start(BasicAnimation::new(0.0, 1.0, leader, 1.0).boxed());

    scheduler.advance(0.0);
    scheduler.advance(1.0);
    assert_eq!(scheduler.animation_count(), 1);
    scheduler.advance(0.0);
    scheduler.advance(1.0);
    assert_eq!(follower.value(), 1.0);
}
